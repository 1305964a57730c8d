// SPDX-License-Identifier: MIT

//! Rich-text description trees.
//!
//! Issue descriptions may arrive as a nested block/paragraph/text document
//! rather than a plain string. The node set is closed; anything else on the
//! wire deserializes to [`DocNode::Other`] and is skipped during extraction,
//! never an error.

use serde::Deserialize;

/// One node of a rich-text description document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocNode {
    /// Document root wrapping a sequence of blocks.
    Doc {
        #[serde(default)]
        content: Vec<DocNode>,
    },
    /// A paragraph of inline nodes. Contributes a trailing newline.
    Paragraph {
        #[serde(default)]
        content: Vec<DocNode>,
    },
    /// A literal text run.
    Text {
        #[serde(default)]
        text: String,
    },
    /// Any node kind we do not model (mentions, tables, media, ...).
    #[serde(other)]
    Other,
}

impl DocNode {
    /// Extract the plain text of a description tree.
    ///
    /// Total over all inputs: unrecognized nodes contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect(&mut out);
        out.trim_end().to_string()
    }

    fn collect(&self, out: &mut String) {
        match self {
            DocNode::Doc { content } => {
                for node in content {
                    node.collect(out);
                }
            }
            DocNode::Paragraph { content } => {
                for node in content {
                    node.collect(out);
                }
                out.push('\n');
            }
            DocNode::Text { text } => out.push_str(text),
            DocNode::Other => {}
        }
    }
}

#[cfg(test)]
#[path = "doc_tests.rs"]
mod tests;
