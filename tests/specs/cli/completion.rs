// SPDX-License-Identifier: MIT

//! Rust specs for the `brief completion` command.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn brief() -> Command {
    cargo_bin_cmd!("brief")
}

#[test]
fn bash_completions_mention_the_subcommands() {
    brief()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("window"));
}

#[test]
fn zsh_completions_generate() {
    brief()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brief"));
}

#[test]
fn unknown_shell_is_rejected() {
    brief()
        .args(["completion", "tcsh"])
        .assert()
        .failure();
}
