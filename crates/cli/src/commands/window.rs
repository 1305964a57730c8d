// SPDX-License-Identifier: MIT

use std::path::Path;

use brief_core::ReportWindow;

use crate::cli::{OutputFormat, PeriodArg};
use crate::config::Config;
use crate::error::Result;

use super::{parse_range, resolve_now, resolve_period};

pub fn run(
    period: Option<PeriodArg>,
    from: Option<&str>,
    to: Option<&str>,
    now: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let period = resolve_period(period, &config)?;
    let custom = parse_range(from, to)?;
    let now = resolve_now(now)?;

    let window = ReportWindow::resolve(period, custom, now)?;
    println!("{}", render(&window, format)?);
    Ok(())
}

pub(crate) fn render(window: &ReportWindow, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "{}\n  start: {}\n  end:   {}",
            window.label,
            window.start.format("%Y-%m-%d %H:%M UTC"),
            window.end.format("%Y-%m-%d %H:%M UTC")
        ),
        OutputFormat::Json => serde_json::to_string_pretty(window)?,
    })
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
