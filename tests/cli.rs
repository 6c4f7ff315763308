//! End-to-end CLI tests.
//!
//! Each test points HOME at a scratch directory so config and database
//! state never leak between runs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nudge(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nudge").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn parse_classifies_a_reminder() {
    let home = TempDir::new().unwrap();
    nudge(&home)
        .args(["parse", "remind me to buy milk at 17:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder"))
        .stdout(predicate::str::contains("buy milk"));
}

#[test]
fn parse_emits_json() {
    let home = TempDir::new().unwrap();
    nudge(&home)
        .args(["parse", "meeting in 2 days", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"intent\": \"task\""))
        .stdout(predicate::str::contains("\"subject\": \"meeting\""));
}

#[test]
fn parse_flags_missing_time() {
    let home = TempDir::new().unwrap();
    nudge(&home)
        .args(["parse", "remind me to call mom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("awaiting time"));
}

#[test]
fn task_add_list_done_cycle() {
    let home = TempDir::new().unwrap();

    nudge(&home)
        .args(["task", "add", "finish report tomorrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finish report"));

    nudge(&home)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finish report"));

    nudge(&home)
        .args(["task", "done", "1"])
        .assert()
        .success();

    nudge(&home)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 items"));
}

#[test]
fn habit_add_and_check() {
    let home = TempDir::new().unwrap();

    nudge(&home)
        .args(["habit", "add", "drink water"])
        .assert()
        .success();

    nudge(&home)
        .args(["habit", "check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 day streak"));
}

#[test]
fn say_routes_a_habit() {
    let home = TempDir::new().unwrap();

    nudge(&home)
        .args(["say", "drink water every day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("habit"));

    nudge(&home)
        .args(["habit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drink water"));
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();
    nudge(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nudge"));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();
    nudge(&home).arg("frobnicate").assert().failure();
}
