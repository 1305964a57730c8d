// SPDX-License-Identifier: MIT

//! Report assembly.
//!
//! Turns ordered buckets (plus an optional risk-register snapshot) into a
//! renderer-agnostic table model: a fixed sequence of named sections, each
//! with a fixed column set and one string row per issue. Missing optional
//! fields render as sentinels; assembly itself never fails on absent data.
//! Truncation of long cells is a renderer concern, not performed here.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::categorize::{categorize, Buckets, Category};
use crate::error::Result;
use crate::issue::IssueRecord;
use crate::risk::RiskRow;
use crate::window::{DateRange, Period, ReportWindow};

/// Sentinel for an absent assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Sentinel for any other absent optional field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Assembly options.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Base browse URL joined with the issue key to form the link cell
    /// (e.g. "https://tracker.example.com/browse"). None renders N/A.
    pub link_base: Option<String>,
}

/// One report section: a named table with fixed columns.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub category: Category,
    pub title: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// The assembled report: ordered sections over a resolved window.
#[derive(Debug, Clone, Serialize)]
pub struct ReportModel {
    pub window: ReportWindow,
    pub sections: Vec<Section>,
}

/// Column set for a section. Priorities intentionally carry no date column;
/// their ordering already encodes urgency.
fn columns(category: Category) -> Vec<&'static str> {
    match category {
        Category::Accomplishments => vec!["key", "link", "description", "owner", "completed"],
        Category::Priorities => vec!["key", "link", "description", "owner"],
        Category::Risks => vec!["key", "link", "description", "owner", "target date", "status"],
        Category::Milestones | Category::UpcomingMilestones => {
            vec!["key", "link", "description", "owner", "due", "status"]
        }
    }
}

fn link_cell(opts: &ReportOptions, key: &str) -> String {
    match &opts.link_base {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn owner_cell(issue: &IssueRecord) -> String {
    issue
        .assignee
        .clone()
        .unwrap_or_else(|| UNASSIGNED.to_string())
}

fn date_cell(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn status_cell(issue: &IssueRecord) -> String {
    let status = issue.status.trim();
    if status.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        status.to_string()
    }
}

/// Description with summary fallback for issues whose body is blank.
fn description_cell(issue: &IssueRecord) -> String {
    let body = issue.description.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    issue
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn issue_row(category: Category, issue: &IssueRecord, opts: &ReportOptions) -> Vec<String> {
    let mut row = vec![
        issue.key.clone(),
        link_cell(opts, &issue.key),
        description_cell(issue),
        owner_cell(issue),
    ];
    match category {
        Category::Accomplishments => row.push(date_cell(issue.resolution_date)),
        Category::Priorities => {}
        Category::Risks | Category::Milestones | Category::UpcomingMilestones => {
            row.push(date_cell(issue.due_date));
            row.push(status_cell(issue));
        }
    }
    row
}

/// Register rows name their columns freely; look up each cell under the
/// spellings seen in real uploads, first match wins.
fn register_cell(row: &RiskRow, candidates: &[&str]) -> String {
    candidates
        .iter()
        .find_map(|c| row.get(c))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn register_row(row: &RiskRow) -> Vec<String> {
    vec![
        register_cell(row, &["key", "id"]),
        register_cell(row, &["link", "url"]),
        register_cell(row, &["description", "risk", "summary"]),
        register_cell(row, &["owner", "assignee"]),
        register_cell(row, &["target date", "targetdate", "target_date"]),
        register_cell(row, &["status"]),
    ]
}

/// Build the risks section. A non-empty uploaded register replaces the
/// issue-derived rows; it is the curated source of truth.
fn risks_section(
    buckets: &Buckets,
    risk_snapshot: Option<&[RiskRow]>,
    opts: &ReportOptions,
) -> Section {
    let rows = match risk_snapshot {
        Some(snapshot) if !snapshot.is_empty() => {
            snapshot.iter().map(register_row).collect()
        }
        _ => buckets
            .risks
            .iter()
            .map(|issue| issue_row(Category::Risks, issue, opts))
            .collect(),
    };
    Section {
        category: Category::Risks,
        title: Category::Risks.title().to_string(),
        columns: columns(Category::Risks),
        rows,
    }
}

/// Assemble ordered buckets into the output model.
///
/// Sections appear in fixed order, empty ones included with zero rows;
/// whether an empty section is omitted or rendered with a placeholder is
/// the renderer's choice.
pub fn assemble(
    buckets: &Buckets,
    window: &ReportWindow,
    risk_snapshot: Option<&[RiskRow]>,
    opts: &ReportOptions,
) -> ReportModel {
    let sections = Category::all()
        .into_iter()
        .map(|category| match category {
            Category::Risks => risks_section(buckets, risk_snapshot, opts),
            _ => Section {
                category,
                title: category.title().to_string(),
                columns: columns(category),
                rows: buckets
                    .get(category)
                    .iter()
                    .map(|issue| issue_row(category, issue, opts))
                    .collect(),
            },
        })
        .collect();

    ReportModel {
        window: window.clone(),
        sections,
    }
}

/// Build a full report: resolve the window, filter and categorize the
/// issues, order the buckets, and assemble the output model.
///
/// Pure and synchronous; shares no state between invocations. Fails only on
/// window validation, never on missing optional issue fields.
pub fn build_report(
    issues: &[IssueRecord],
    period: Period,
    custom: Option<DateRange>,
    now: DateTime<Utc>,
    risk_snapshot: Option<&[RiskRow]>,
    opts: &ReportOptions,
) -> Result<ReportModel> {
    let window = ReportWindow::resolve(period, custom, now)?;
    let mut buckets = categorize(issues, &window, now);
    buckets.sort();
    Ok(assemble(&buckets, &window, risk_snapshot, opts))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
