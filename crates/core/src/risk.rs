// SPDX-License-Identifier: MIT

//! Risk register store.
//!
//! An uploaded risk register is a table of arbitrary column/value rows. The
//! store is an explicit object passed by reference into report builds —
//! never a process global — with replace-on-upload and clear semantics.
//! Builds read a copy-on-read snapshot, so a store mutated between builds
//! cannot affect one in flight.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One uploaded risk-register row: arbitrary column/value pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskRow(pub BTreeMap<String, Value>);

impl RiskRow {
    /// Case-insensitive column lookup. Non-string values are rendered
    /// through their JSON representation.
    pub fn get(&self, column: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(column))
            .map(|(_, v)| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}

/// Holder of the current risk register.
#[derive(Debug, Clone, Default)]
pub struct RiskStore {
    rows: Vec<RiskRow>,
}

impl RiskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the register with a newly uploaded table.
    pub fn replace(&mut self, rows: Vec<RiskRow>) {
        self.rows = rows;
    }

    /// Drop all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Copy-on-read snapshot for one report build.
    pub fn snapshot(&self) -> Vec<RiskRow> {
        self.rows.clone()
    }
}

#[cfg(test)]
#[path = "risk_tests.rs"]
mod tests;
