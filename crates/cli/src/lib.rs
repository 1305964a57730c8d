// SPDX-License-Identifier: MIT

//! briefrs - status report generation for issue-tracker exports.
//!
//! This crate provides the CLI shell around the `brief-core` engine:
//!
//! - [`source`] - file-based issue source (JSON array / JSONL) and
//!   risk-register loading
//! - [`render`] - text and JSON renderers over the assembled report model
//! - [`Config`] - optional `brief.toml` configuration
//! - [`Error`] - error types for all operations
//!
//! The categorization rules themselves live in `brief-core`; nothing here
//! decides what belongs in which section.

mod cli;
mod commands;
mod completions;
pub mod config;
pub mod error;
pub mod render;
pub mod source;

pub use cli::{Cli, Command, OutputFormat, PeriodArg};
pub use config::Config;
pub use error::{Error, Result};

/// Execute a parsed CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Report {
            input,
            period,
            from,
            to,
            now,
            risks,
            format,
        } => commands::report::run(
            &input,
            period,
            from.as_deref(),
            to.as_deref(),
            now.as_deref(),
            risks.as_deref(),
            format,
        ),
        Command::Window {
            period,
            from,
            to,
            now,
            format,
        } => commands::window::run(period, from.as_deref(), to.as_deref(), now.as_deref(), format),
        Command::Completion { shell } => {
            completions::run(shell);
            Ok(())
        }
    }
}
