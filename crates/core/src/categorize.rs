// SPDX-License-Identifier: MIT

//! Report categorization.
//!
//! Each eligible issue is tested against five independent predicates, one
//! per report section, so an issue may land in more than one bucket (a due
//! Epic is both a milestone and an upcoming milestone, for example).
//! Buckets hold references into the caller's slice; nothing is copied or
//! mutated, and buckets are recomputed fully on every build.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::filter::is_reportable;
use crate::issue::IssueRecord;
use crate::window::ReportWindow;

/// Issue types that count as project milestones.
const MILESTONE_TYPES: [&str; 2] = ["epic", "milestone"];

/// Issue type whose open items are surfaced as risks.
const RISK_TYPE: &str = "story";

/// The five report sections, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accomplishments,
    Priorities,
    Risks,
    Milestones,
    UpcomingMilestones,
}

impl Category {
    /// All categories in fixed section order.
    pub fn all() -> [Category; 5] {
        [
            Category::Accomplishments,
            Category::Priorities,
            Category::Risks,
            Category::Milestones,
            Category::UpcomingMilestones,
        ]
    }

    /// Returns the string representation used in output models.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Accomplishments => "accomplishments",
            Category::Priorities => "priorities",
            Category::Risks => "risks",
            Category::Milestones => "milestones",
            Category::UpcomingMilestones => "upcoming_milestones",
        }
    }

    /// Section heading used by renderers.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Accomplishments => "Accomplishments",
            Category::Priorities => "Upcoming Priorities",
            Category::Risks => "Risks",
            Category::Milestones => "Milestones",
            Category::UpcomingMilestones => "Upcoming Milestones",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The five ordered buckets of one report build.
///
/// Constructed and discarded within a single build call; no state survives
/// across builds.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub accomplishments: Vec<&'a IssueRecord>,
    pub priorities: Vec<&'a IssueRecord>,
    pub risks: Vec<&'a IssueRecord>,
    pub milestones: Vec<&'a IssueRecord>,
    pub upcoming_milestones: Vec<&'a IssueRecord>,
}

impl<'a> Buckets<'a> {
    /// The bucket for a category, in section order.
    pub fn get(&self, category: Category) -> &[&'a IssueRecord] {
        match category {
            Category::Accomplishments => &self.accomplishments,
            Category::Priorities => &self.priorities,
            Category::Risks => &self.risks,
            Category::Milestones => &self.milestones,
            Category::UpcomingMilestones => &self.upcoming_milestones,
        }
    }
}

/// What finished inside the look-back half of the window.
fn is_accomplishment(issue: &IssueRecord, window: &ReportWindow, now: DateTime<Utc>) -> bool {
    issue.is_done()
        && matches!(issue.resolution_date, Some(d) if window.start <= d && d <= now)
}

/// What is due before the look-ahead boundary and is not finished.
fn is_priority(issue: &IssueRecord, window: &ReportWindow) -> bool {
    !issue.is_done() && matches!(issue.due_date, Some(d) if d <= window.end)
}

/// Still-open, risk-bearing work items.
fn is_risk(issue: &IssueRecord) -> bool {
    issue.has_type(RISK_TYPE) && !issue.is_done()
}

/// Coarse, type-driven project-health view, independent of the window.
fn is_milestone(issue: &IssueRecord) -> bool {
    MILESTONE_TYPES.iter().any(|t| issue.has_type(t))
}

/// Milestone subset falling due between the reference instant and the
/// window's end.
fn is_upcoming_milestone(issue: &IssueRecord, window: &ReportWindow, now: DateTime<Utc>) -> bool {
    is_milestone(issue) && matches!(issue.due_date, Some(d) if now <= d && d <= window.end)
}

/// Assign eligible issues to buckets.
///
/// Applies the inclusion filter first; ineligible issues appear nowhere.
/// Bucket order here is input order; callers sort via
/// [`Buckets::sort`](crate::sort) before assembly.
pub fn categorize<'a>(
    issues: &'a [IssueRecord],
    window: &ReportWindow,
    now: DateTime<Utc>,
) -> Buckets<'a> {
    let mut buckets = Buckets::default();

    for issue in issues.iter().filter(|i| is_reportable(i)) {
        if is_accomplishment(issue, window, now) {
            buckets.accomplishments.push(issue);
        }
        if is_priority(issue, window) {
            buckets.priorities.push(issue);
        }
        if is_risk(issue) {
            buckets.risks.push(issue);
        }
        if is_milestone(issue) {
            buckets.milestones.push(issue);
        }
        if is_upcoming_milestone(issue, window, now) {
            buckets.upcoming_milestones.push(issue);
        }
    }

    buckets
}

#[cfg(test)]
#[path = "categorize_tests.rs"]
mod tests;
