// SPDX-License-Identifier: MIT

//! Rust specs for the `brief window` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn brief() -> Command {
    cargo_bin_cmd!("brief")
}

const NOW: &str = "2026-08-23T12:00:00Z";

#[test]
fn weekly_window_brackets_now_by_seven_days() {
    brief()
        .args(["window", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-08-16 to 2026-08-30"));
}

#[test]
fn biweekly_window_brackets_now_by_fourteen_days() {
    brief()
        .args(["window", "--period", "biweekly", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-08-09 to 2026-09-06"));
}

#[test]
fn custom_window_uses_explicit_bounds() {
    brief()
        .args([
            "window", "--period", "custom", "--from", "2026-01-01", "--to", "2026-01-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-01 to 2026-01-31"));
}

#[test]
fn custom_window_without_bounds_fails() {
    brief()
        .args(["window", "--period", "custom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom period requires"));
}

#[test]
fn json_window_is_machine_readable() {
    let output = brief()
        .args(["window", "--now", NOW, "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["label"], "2026-08-16 to 2026-08-30");
}

#[test]
fn invalid_now_is_rejected() {
    brief()
        .args(["window", "--now", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}
