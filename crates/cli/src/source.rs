// SPDX-License-Identifier: MIT

//! File-based issue source and risk-register loader.
//!
//! Accepts a whole-file JSON array or JSONL (one record per line). Records
//! are screened individually: a malformed record or an unparseable line is
//! logged and skipped, never aborting the build. I/O failures propagate
//! untouched.

use std::fs;
use std::io::{self, Read};

use tracing::{debug, warn};

use brief_core::{screen_records, IssueRecord, RawIssue, RiskRow, RiskStore};

use crate::error::Result;

/// Load and screen an issue export. `path` of `-` reads stdin.
pub fn load_issues(path: &str) -> Result<Vec<IssueRecord>> {
    let text = read_input(path)?;
    let raws = parse_raw_issues(&text)?;
    let (records, rejected) = screen_records(raws);
    for err in &rejected {
        warn!("skipping issue record: {err}");
    }
    debug!(
        loaded = records.len(),
        skipped = rejected.len(),
        "loaded issue export"
    );
    Ok(records)
}

/// Load a risk register (JSON array of column/value rows) into a store.
pub fn load_risks(path: &str) -> Result<RiskStore> {
    let text = read_input(path)?;
    let rows: Vec<RiskRow> = serde_json::from_str(&text)?;
    let mut store = RiskStore::new();
    store.replace(rows);
    debug!(rows = store.len(), "loaded risk register");
    Ok(store)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_raw_issues(text: &str) -> Result<Vec<RawIssue>> {
    // A whole-file array is parsed strictly; its structure is the caller's.
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    // JSONL is screened line by line.
    let mut raws = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<RawIssue>(line) {
            Ok(raw) => raws.push(raw),
            Err(e) => warn!(line = number + 1, "skipping unparseable line: {e}"),
        }
    }
    Ok(raws)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
