// SPDX-License-Identifier: MIT

//! Deterministic bucket ordering.
//!
//! All sorts are stable (equal keys preserve input order) and total, so
//! rebuilding a report from the same inputs yields identical ordering.

use std::cmp::Ordering;

use crate::categorize::Buckets;
use crate::issue::IssueRecord;

/// Lexicographic by issue key.
pub fn by_key(bucket: &mut [&IssueRecord]) {
    bucket.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Due date ascending; issues with no due date sort last; ties broken by key.
pub fn by_due_date(bucket: &mut [&IssueRecord]) {
    bucket.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.key.cmp(&b.key)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.key.cmp(&b.key),
    });
}

impl Buckets<'_> {
    /// Order every bucket: accomplishments, risks, and milestones by key;
    /// priorities and upcoming milestones by due date.
    pub fn sort(&mut self) {
        by_key(&mut self.accomplishments);
        by_due_date(&mut self.priorities);
        by_key(&mut self.risks);
        by_key(&mut self.milestones);
        by_due_date(&mut self.upcoming_milestones);
    }
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
