// SPDX-License-Identifier: MIT

//! Report configuration.
//!
//! Configuration is read from an optional `brief.toml` in the working
//! directory; every field has a default, and command-line flags override
//! whatever the file says.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const CONFIG_FILE_NAME: &str = "brief.toml";

/// Report configuration stored in `brief.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default reporting period when --period is not given.
    pub period: String,
    /// Base browse URL joined with issue keys to build link cells
    /// (e.g. "https://tracker.example.com/browse").
    pub link_base: Option<String>,
    /// Maximum text-cell width before ellipsis truncation (text output only,
    /// 0 disables truncation).
    pub truncate: usize,
    /// Render empty sections with a "(none)" placeholder instead of
    /// omitting them.
    pub show_empty_sections: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            period: "weekly".to_string(),
            link_base: None,
            truncate: 64,
            show_empty_sections: true,
        }
    }
}

impl Config {
    /// Load configuration from a directory, falling back to defaults when
    /// no `brief.toml` is present.
    pub fn load(dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
