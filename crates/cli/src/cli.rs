// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use brief_core::Period;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reporting period selector (CLI surface of [`brief_core::Period`]).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PeriodArg {
    Weekly,
    Biweekly,
    Custom,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Weekly => Period::Weekly,
            PeriodArg::Biweekly => Period::Biweekly,
            PeriodArg::Custom => Period::Custom,
        }
    }
}

#[derive(Parser)]
#[command(name = "brief")]
#[command(about = "Build multi-section status reports from issue-tracker exports")]
#[command(
    long_about = "Build multi-section status reports from issue-tracker exports.\n\n\
    Reads an issue export (JSON array or JSONL), resolves a reporting window,\n\
    and emits accomplishments, priorities, risks, and milestones as text or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a status report from an issue export
    #[command(after_help = "Examples:\n  \
        brief report -i issues.jsonl                         Weekly report, text output\n  \
        brief report -i issues.json --period biweekly -o json\n  \
        brief report -i issues.jsonl --period custom --from 2026-08-01 --to 2026-08-31\n  \
        brief report -i issues.jsonl --risks risks.json      Use an uploaded risk register\n  \
        cat issues.jsonl | brief report -i -                 Read the export from stdin")]
    Report {
        /// Issue export file (JSON array or JSONL); '-' reads stdin
        #[arg(short, long)]
        input: String,

        /// Reporting period (default: from brief.toml, else weekly)
        #[arg(short, long, value_enum)]
        period: Option<PeriodArg>,

        /// Window start for the custom period (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        from: Option<String>,

        /// Window end for the custom period
        #[arg(long)]
        to: Option<String>,

        /// Reference instant for windowing (defaults to the current time)
        #[arg(long)]
        now: Option<String>,

        /// Risk register file (JSON array of column/value rows)
        #[arg(long)]
        risks: Option<String>,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve and print the report window for a period
    Window {
        /// Reporting period (default: from brief.toml, else weekly)
        #[arg(short, long, value_enum)]
        period: Option<PeriodArg>,

        /// Window start for the custom period (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        from: Option<String>,

        /// Window end for the custom period
        #[arg(long)]
        to: Option<String>,

        /// Reference instant for windowing (defaults to the current time)
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
