// SPDX-License-Identifier: MIT

//! Plain-text renderer: numbered section headings over pipe-separated rows.

use brief_core::ReportModel;

/// Text rendering knobs.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum cell width in characters, ellipsis included. 0 disables.
    pub truncate: usize,
    /// Print empty sections with a "(none)" placeholder instead of
    /// omitting them.
    pub show_empty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            truncate: 64,
            show_empty: true,
        }
    }
}

/// Render a report as numbered text sections.
///
/// Empty-section handling follows `show_empty` consistently for the whole
/// report; headings are numbered over the sections actually printed.
pub fn render(model: &ReportModel, cfg: &RenderConfig) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Status Report ({})", model.window.label));
    lines.push(String::new());

    let mut number = 0;
    for section in &model.sections {
        if section.rows.is_empty() && !cfg.show_empty {
            continue;
        }
        number += 1;
        lines.push(format!("{}. {}", number, section.title));
        if section.rows.is_empty() {
            lines.push("  (none)".to_string());
        } else {
            for row in &section.rows {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| format_cell(cell, cfg.truncate))
                    .collect();
                lines.push(format!("  - {}", cells.join(" | ")));
            }
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}

/// Flatten a cell to one line and truncate it with an ellipsis.
fn format_cell(cell: &str, max: usize) -> String {
    let flat = cell.split_whitespace().collect::<Vec<_>>().join(" ");
    if max == 0 || flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
