// SPDX-License-Identifier: MIT

//! Rust specs for the `brief report` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn brief() -> Command {
    cargo_bin_cmd!("brief")
}

const NOW: &str = "2026-08-23T12:00:00Z";

fn write_export(temp: &TempDir) -> String {
    let lines = concat!(
        r#"{"key": "A-1", "statusCategory": "done", "description": "shipped the importer", "resolutionDate": "2026-08-20", "assignee": "dana"}"#,
        "\n",
        r#"{"key": "A-2", "statusCategory": "new", "description": "ship the exporter", "dueDate": "2026-08-25"}"#,
        "\n",
        r#"{"key": "A-3", "statusCategory": "indeterminate", "description": "migration epic", "issueType": "Epic", "dueDate": "2026-08-27"}"#,
        "\n",
        r#"{"key": "A-4", "statusCategory": "new", "description": "flaky vendor api", "issueType": "Story"}"#,
        "\n",
    );
    let path = temp.path().join("issues.jsonl");
    std::fs::write(&path, lines).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn text_report_has_five_numbered_sections() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);

    brief()
        .args(["report", "-i", &input, "--now", NOW])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Status Report (2026-08-16 to 2026-08-30)",
        ))
        .stdout(predicate::str::contains("1. Accomplishments"))
        .stdout(predicate::str::contains("2. Upcoming Priorities"))
        .stdout(predicate::str::contains("3. Risks"))
        .stdout(predicate::str::contains("4. Milestones"))
        .stdout(predicate::str::contains("5. Upcoming Milestones"));
}

#[test]
fn sections_are_populated_by_category() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);

    let output = brief()
        .args(["report", "-i", &input, "--now", NOW])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Issue order within the text output follows section order: the
    // accomplished issue first, the due task next, then the open story
    // under risks and the epic under milestones.
    let pos = |key: &str| stdout.find(key).unwrap_or_else(|| panic!("{key} missing"));
    assert!(pos("A-1") < pos("A-2"));
    assert!(pos("A-2") < pos("A-4"));
    assert!(pos("A-4") < pos("A-3"));
}

#[test]
fn json_report_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);

    let output = brief()
        .args(["report", "-i", &input, "--now", NOW, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 5);
    assert_eq!(sections[0]["rows"][0][0], "A-1");
    assert_eq!(sections[1]["rows"][0][0], "A-2");
    assert_eq!(sections[2]["rows"][0][0], "A-4");
    assert_eq!(sections[3]["rows"][0][0], "A-3");
    assert_eq!(sections[4]["rows"][0][0], "A-3");
}

#[test]
fn custom_period_requires_both_bounds() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);

    brief()
        .args(["report", "-i", &input, "--period", "custom", "--from", "2026-08-01"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom period requires"));
}

#[test]
fn inverted_custom_range_fails() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);

    brief()
        .args([
            "report", "-i", &input, "--period", "custom", "--from", "2026-08-31", "--to",
            "2026-08-01",
        ])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid report window"));
}

#[test]
fn risk_register_replaces_issue_risks() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    let risks = temp.path().join("risks.json");
    std::fs::write(
        &risks,
        r#"[{"Key": "R-1", "Description": "vendor contract lapses", "Owner": "fox", "Target Date": "2026-09-01", "Status": "open"}]"#,
    )
    .unwrap();

    brief()
        .args([
            "report",
            "-i",
            &input,
            "--now",
            NOW,
            "--risks",
            risks.to_string_lossy().as_ref(),
        ])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("R-1"))
        .stdout(predicate::str::contains("vendor contract lapses"))
        .stdout(predicate::str::contains("A-4").not());
}

#[test]
fn stdin_export_is_accepted() {
    let temp = TempDir::new().unwrap();

    brief()
        .args(["report", "-i", "-", "--now", NOW])
        .current_dir(temp.path())
        .write_stdin(r#"{"key": "S-1", "statusCategory": "new", "description": "from stdin", "dueDate": "2026-08-24"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("S-1"));
}

#[test]
fn config_file_supplies_the_link_base() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    std::fs::write(
        temp.path().join("brief.toml"),
        "link_base = \"https://tracker.example.com/browse\"\n",
    )
    .unwrap();

    brief()
        .args(["report", "-i", &input, "--now", NOW])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://tracker.example.com/browse/A-2",
        ));
}

#[test]
fn malformed_records_do_not_block_the_report() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.jsonl");
    std::fs::write(
        &path,
        concat!(
            r#"{"statusCategory": "new", "description": "no key"}"#,
            "\n",
            r#"{"key": "OK-1", "statusCategory": "new", "description": "fine", "dueDate": "2026-08-24"}"#,
            "\n",
        ),
    )
    .unwrap();

    brief()
        .args(["report", "-i", path.to_string_lossy().as_ref(), "--now", NOW])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK-1"));
}
