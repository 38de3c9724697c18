// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;

fn sut() -> Command {
    Command::cargo_bin("gdev").expect("Should be able to create a command")
}

#[test]
fn should_print_welcome_banner_when_started_without_arguments() {
    let execution = sut().assert();
    execution.success().stdout("Welcome to GDEV 2.0!\n");
}

#[test]
fn should_print_welcome_banner_before_anything_else() {
    let execution = sut().arg("build").assert();
    execution.success().stdout(predicate::str::starts_with("Welcome to GDEV 2.0!\n"));
}

#[test]
fn should_accept_multiple_command_tokens() {
    let execution = sut().args(["build", "--target", "web"]).assert();
    execution.success().stdout("Welcome to GDEV 2.0!\n");
}
