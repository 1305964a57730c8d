// SPDX-License-Identifier: MIT

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use briefrs::Cli;
use clap::Parser;

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("BRIEF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = briefrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
