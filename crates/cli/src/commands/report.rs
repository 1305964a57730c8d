// SPDX-License-Identifier: MIT

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use brief_core::{build_report, DateRange, IssueRecord, Period, ReportOptions, RiskStore};

use crate::cli::{OutputFormat, PeriodArg};
use crate::config::Config;
use crate::error::Result;
use crate::render;
use crate::source;

use super::{parse_range, resolve_now, resolve_period};

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &str,
    period: Option<PeriodArg>,
    from: Option<&str>,
    to: Option<&str>,
    now: Option<&str>,
    risks: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let issues = source::load_issues(input)?;
    let store = match risks {
        Some(path) => Some(source::load_risks(path)?),
        None => None,
    };
    let period = resolve_period(period, &config)?;
    let custom = parse_range(from, to)?;
    let now = resolve_now(now)?;

    let rendered = run_impl(&config, &issues, store.as_ref(), period, custom, now, format)?;
    println!("{rendered}");
    Ok(())
}

/// Internal implementation that accepts loaded inputs for testing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    config: &Config,
    issues: &[IssueRecord],
    store: Option<&RiskStore>,
    period: Period,
    custom: Option<DateRange>,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> Result<String> {
    debug!(issues = issues.len(), %period, "building report");

    let snapshot = store.map(|s| s.snapshot());
    let opts = ReportOptions {
        link_base: config.link_base.clone(),
    };
    let model = build_report(issues, period, custom, now, snapshot.as_deref(), &opts)?;

    Ok(match format {
        OutputFormat::Text => render::text::render(
            &model,
            &render::text::RenderConfig {
                truncate: config.truncate,
                show_empty: config.show_empty_sections,
            },
        ),
        OutputFormat::Json => render::json::render(&model)?,
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
