// SPDX-License-Identifier: MIT

use thiserror::Error;

/// All possible errors that can occur in the brief-core library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid period: '{0}'\n  hint: valid periods are: weekly, biweekly, custom")]
    InvalidPeriod(String),

    #[error("custom period requires both a start and an end date")]
    CustomRangeRequired,

    #[error("start/end dates are only valid with the custom period")]
    CustomRangeUnexpected,

    #[error("invalid report window: end {end} is before start {start}")]
    WindowInverted { start: String, end: String },

    #[error("invalid status category: '{0}'\n  hint: valid categories are: new, indeterminate, done")]
    InvalidStatusCategory(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("malformed issue record '{key}': {reason}")]
    MalformedRecord { key: String, reason: String },
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
