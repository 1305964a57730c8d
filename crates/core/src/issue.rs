// SPDX-License-Identifier: MIT

//! Issue record types and wire-form screening.
//!
//! [`IssueRecord`] is the validated, immutable input to the report pipeline.
//! [`RawIssue`] is the lenient wire form an issue export arrives in; records
//! are screened one at a time so a single malformed record never blocks
//! visibility into the rest of the project.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::doc::DocNode;
use crate::error::{Error, Result};

/// Workflow state category of an issue.
///
/// Free-text status names vary between trackers and projects; this closed
/// category is the only field the engine trusts for done/not-done decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Not yet started.
    New,
    /// In flight (any non-terminal, non-new state).
    Indeterminate,
    /// Completed.
    Done,
}

impl StatusCategory {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::New => "new",
            StatusCategory::Indeterminate => "indeterminate",
            StatusCategory::Done => "done",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "new" => Ok(StatusCategory::New),
            "indeterminate" => Ok(StatusCategory::Indeterminate),
            "done" => Ok(StatusCategory::Done),
            _ => Err(Error::InvalidStatusCategory(s.to_string())),
        }
    }
}

/// One validated issue record.
///
/// Immutable for the duration of a report build; the pipeline holds
/// references into the caller's slice and never copies or mutates records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Unique, project-prefixed ticket id (e.g. "PROJ-42"). Uniqueness
    /// within one issue list is assumed, not enforced.
    pub key: String,
    /// One-line title, if the export carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Plain-text body; may be empty.
    pub description: String,
    /// Display name of the assignee; `None` means unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Free-text workflow state name (display only).
    pub status: String,
    /// The trusted done/not-done signal.
    pub status_category: StatusCategory,
    /// Free-text type name (e.g. "Story", "Epic", "Milestone", "Task").
    pub issue_type: String,
    /// Free-text priority name (e.g. "Highest", "High", "Medium", "Low").
    pub priority: String,
    /// Present only if the issue has been resolved.
    pub resolution_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
}

impl IssueRecord {
    /// Whether the issue's status category is `done`.
    pub fn is_done(&self) -> bool {
        self.status_category == StatusCategory::Done
    }

    /// Case-insensitive comparison against a type name.
    pub fn has_type(&self, name: &str) -> bool {
        self.issue_type.eq_ignore_ascii_case(name)
    }

    /// Validate a raw wire record into a typed one.
    ///
    /// A missing key or an unknown status category rejects only this record
    /// ([`Error::MalformedRecord`]); the rest of the batch is unaffected.
    pub fn from_raw(raw: RawIssue) -> Result<Self> {
        let key = match raw.key {
            Some(k) if !k.trim().is_empty() => k,
            _ => {
                return Err(Error::MalformedRecord {
                    key: "<missing>".to_string(),
                    reason: "missing issue key".to_string(),
                })
            }
        };

        let status_category = match raw.status_category {
            Some(s) => s
                .parse::<StatusCategory>()
                .map_err(|e| Error::MalformedRecord {
                    key: key.clone(),
                    reason: e.to_string(),
                })?,
            None => {
                return Err(Error::MalformedRecord {
                    key,
                    reason: "missing status category".to_string(),
                })
            }
        };

        // Trackers export unassigned issues either with no assignee field or
        // with a literal "Unassigned" sentinel; normalize both to None.
        let assignee = raw
            .assignee
            .filter(|a| !a.trim().is_empty() && !a.eq_ignore_ascii_case("unassigned"));

        Ok(IssueRecord {
            key,
            summary: raw.summary,
            description: raw
                .description
                .map(|d| d.plain_text())
                .unwrap_or_default(),
            assignee,
            status: raw.status.unwrap_or_default(),
            status_category,
            issue_type: raw.issue_type.unwrap_or_default(),
            priority: raw.priority.unwrap_or_default(),
            resolution_date: raw.resolution_date,
            due_date: raw.due_date,
        })
    }
}

/// Lenient wire form of an issue record.
///
/// Field names follow the tracker export convention (camelCase). Everything
/// is optional here; [`IssueRecord::from_raw`] decides what is fatal for the
/// individual record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<RawDescription>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_category: Option<String>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub resolution_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub due_date: Option<DateTime<Utc>>,
}

/// A description on the wire: a plain string or a rich-text document tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDescription {
    Plain(String),
    Rich(DocNode),
}

impl RawDescription {
    /// Flatten to plain text.
    pub fn plain_text(&self) -> String {
        match self {
            RawDescription::Plain(s) => s.clone(),
            RawDescription::Rich(node) => node.plain_text(),
        }
    }
}

/// Screen a batch of raw records, partitioning into valid records and
/// per-record rejection errors. Order of valid records is preserved.
pub fn screen_records(raws: Vec<RawIssue>) -> (Vec<IssueRecord>, Vec<Error>) {
    let mut records = Vec::with_capacity(raws.len());
    let mut rejected = Vec::new();
    for raw in raws {
        match IssueRecord::from_raw(raw) {
            Ok(record) => records.push(record),
            Err(e) => rejected.push(e),
        }
    }
    (records, rejected)
}

/// Parse a wire date: RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }
    Err(Error::InvalidDate(s.to_string()))
}

fn de_opt_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
