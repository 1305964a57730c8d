// SPDX-License-Identifier: MIT

//! JSON renderer: pretty-printed serialization of the report model.
//! No truncation; consumers get every cell verbatim.

use brief_core::ReportModel;

use crate::error::Result;

pub fn render(model: &ReportModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
