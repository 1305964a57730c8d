// SPDX-License-Identifier: MIT

//! Date window resolution.
//!
//! A report window is the `[start, end]` pair every date predicate in the
//! pipeline compares against. Resolution is a pure function of the period
//! selector and the reference instant.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Seven days back, seven days ahead of the reference instant.
    Weekly,
    /// Fourteen days back, fourteen days ahead.
    Biweekly,
    /// Explicit start/end bounds supplied by the caller.
    Custom,
}

impl Period {
    /// Returns the string representation used in configuration and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Biweekly => "biweekly",
            Period::Custom => "custom",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Period::Weekly),
            "biweekly" => Ok(Period::Biweekly),
            "custom" => Ok(Period::Custom),
            _ => Err(Error::InvalidPeriod(s.to_string())),
        }
    }
}

/// Explicit bounds for a custom period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A resolved reporting window.
///
/// `start <= end` always holds for a constructed window. The window is not
/// required to contain the reference instant: a custom range may lie
/// entirely in the past or the future.
#[derive(Debug, Clone, Serialize)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Human-readable description of the resolved range.
    pub label: String,
}

impl ReportWindow {
    /// Resolve a period selector into a concrete window.
    ///
    /// `custom` is required for [`Period::Custom`] and rejected for the
    /// fixed periods. Deterministic given `now`; no side effects.
    pub fn resolve(
        period: Period,
        custom: Option<DateRange>,
        now: DateTime<Utc>,
    ) -> Result<ReportWindow> {
        let (start, end) = match (period, custom) {
            (Period::Weekly, None) => (now - Duration::days(7), now + Duration::days(7)),
            (Period::Biweekly, None) => (now - Duration::days(14), now + Duration::days(14)),
            (Period::Custom, Some(range)) => (range.start, range.end),
            (Period::Custom, None) => return Err(Error::CustomRangeRequired),
            (_, Some(_)) => return Err(Error::CustomRangeUnexpected),
        };

        if end < start {
            return Err(Error::WindowInverted {
                start: start.format("%Y-%m-%d").to_string(),
                end: end.format("%Y-%m-%d").to_string(),
            });
        }

        Ok(ReportWindow {
            start,
            end,
            label: format!(
                "{} to {}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        })
    }

    /// Whether an instant falls inside the window (inclusive on both ends).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
