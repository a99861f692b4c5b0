//! Integration tests for checkin, coach, schedule and split

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::habitual_cmd;

#[test]
fn test_checkin_low_energy() {
    habitual_cmd()
        .args(["checkin", "Honestly a bit overwhelmed and tired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Low Energy Mode"))
        .stdout(predicate::str::contains("Focus on small wins today!"))
        .stdout(predicate::str::contains("--mood tired"));
}

#[test]
fn test_checkin_high_energy() {
    habitual_cmd()
        .args(["checkin", "Feeling great and motivated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High Performance Mode"))
        .stdout(predicate::str::contains("--mood energetic"));
}

#[test]
fn test_checkin_neutral_has_no_tip() {
    habitual_cmd()
        .args(["checkin", "just a regular day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Neutral"))
        .stdout(predicate::str::contains("Tip:").not());
}

#[test]
fn test_coach_with_explicit_persona() {
    habitual_cmd()
        .args(["coach", "--persona", "strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No excuses. Get it done."))
        .stdout(predicate::str::contains("Coach Persona: strict"));
}

#[test]
fn test_coach_unknown_persona_is_supportive() {
    habitual_cmd()
        .args(["coach", "-p", "mystery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("every small step counts"));
}

#[test]
fn test_coach_uses_configured_persona() {
    let temp = TempDir::new().unwrap();
    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    habitual_cmd()
        .current_dir(temp.path())
        .args(["config", "persona", "calm"])
        .assert()
        .success();

    habitual_cmd()
        .current_dir(temp.path())
        .arg("coach")
        .assert()
        .success()
        .stdout(predicate::str::contains("Take a deep breath."))
        .stdout(predicate::str::contains("Coach Persona: calm"));
}

#[test]
fn test_schedule_defaults() {
    habitual_cmd()
        .arg("schedule")
        .assert()
        .success()
        .stdout(predicate::str::contains("07:00  Morning Routine"))
        .stdout(predicate::str::contains("8:00   Deep Work Session"))
        .stdout(predicate::str::contains("23:00  Evening Wind Down"));
}

#[test]
fn test_schedule_invalid_wake_time() {
    habitual_cmd()
        .args(["schedule", "--wake", "early"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid time: 'early'"));
}

#[test]
fn test_split_marks_done_steps() {
    habitual_cmd()
        .args(["split", "File taxes", "--done", "1", "--done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 2/6 steps (33%)"))
        .stdout(predicate::str::contains(
            "[x] 1. Set up workspace for: File taxes (2 mins)",
        ))
        .stdout(predicate::str::contains("[ ] 3. Start with the easiest part first"));
}

#[test]
fn test_split_empty_task_rejected() {
    habitual_cmd().args(["split", "  "]).assert().code(3);
}
