// SPDX-License-Identifier: MIT

//! brief-core: Report categorization and windowing engine
//!
//! This crate is the pure data-transformation pipeline behind the `brief`
//! status-report CLI: given a flat list of issue records, a reporting
//! period, and a reference instant, it decides which issues belong in which
//! report section, in what order, and with what fields.
//!
//! The pipeline, leaf to root:
//!
//! 1. [`ReportWindow::resolve`] — period selector + "now" → `[start, end]`
//! 2. [`filter::is_reportable`] — drop issues eligible for no section
//! 3. [`categorize()`] — assign eligible issues to zero or more buckets
//! 4. [`Buckets::sort`] — deterministic, stable per-bucket ordering
//! 5. [`build_report`] / [`report::assemble`] — ordered sections out
//!
//! Everything is synchronous and side-effect free: no I/O, no globals, no
//! state shared between builds. How issues were fetched and how the report
//! is rendered are the caller's concerns.

pub mod categorize;
pub mod doc;
pub mod error;
pub mod filter;
pub mod issue;
pub mod report;
pub mod risk;
pub mod sort;
pub mod window;

pub use categorize::{categorize, Buckets, Category};
pub use doc::DocNode;
pub use error::{Error, Result};
pub use issue::{parse_date, screen_records, IssueRecord, RawIssue, StatusCategory};
pub use report::{assemble, build_report, ReportModel, ReportOptions, Section};
pub use risk::{RiskRow, RiskStore};
pub use window::{DateRange, Period, ReportWindow};
