// SPDX-License-Identifier: MIT

pub mod report;
pub mod window;

use chrono::{DateTime, Utc};

use brief_core::{parse_date, DateRange, Period};

use crate::cli::PeriodArg;
use crate::config::Config;
use crate::error::{Error, Result};

/// Pick the period: explicit flag, else the configured default.
pub(crate) fn resolve_period(arg: Option<PeriodArg>, config: &Config) -> Result<Period> {
    match arg {
        Some(p) => Ok(p.into()),
        None => Ok(config.period.parse::<Period>()?),
    }
}

/// Turn --from/--to flags into a custom range. Supplying only one bound is
/// the same validation error as supplying neither.
pub(crate) fn parse_range(from: Option<&str>, to: Option<&str>) -> Result<Option<DateRange>> {
    match (from, to) {
        (None, None) => Ok(None),
        (Some(f), Some(t)) => Ok(Some(DateRange {
            start: parse_date(f)?,
            end: parse_date(t)?,
        })),
        _ => Err(Error::Core(brief_core::Error::CustomRangeRequired)),
    }
}

/// Resolve the reference instant: an explicit --now flag, else wall clock.
pub(crate) fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
