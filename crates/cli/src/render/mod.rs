// SPDX-License-Identifier: MIT

//! Report renderers.
//!
//! Renderers consume the assembled [`brief_core::ReportModel`]; any renderer
//! accepting that model satisfies the contract. Truncation and empty-section
//! presentation are decided here, never in the core.

pub mod json;
pub mod text;
