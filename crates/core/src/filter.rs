// SPDX-License-Identifier: MIT

//! Inclusion filter: decides whether an issue can appear in any section.

use crate::issue::IssueRecord;

/// An issue is reportable when it has a non-blank description and, if its
/// status category is `done`, a resolution date to anchor it in time.
/// Undone issues are eligible regardless of dates. Issues failing this
/// check appear in no bucket.
pub fn is_reportable(issue: &IssueRecord) -> bool {
    if issue.description.trim().is_empty() {
        return false;
    }
    if issue.is_done() && issue.resolution_date.is_none() {
        return false;
    }
    true
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
