// SPDX-License-Identifier: MIT

//! End-to-end specs for the `brief` CLI.
//!
//! The spec files under `cli/` are wired as `[[test]]` targets of the
//! `brief` crate so they run against the freshly built binary.
