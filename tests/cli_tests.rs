#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::tempdir;

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("cli").expect("cli binary")
}

#[test]
fn prints_fixed_schedule_by_default() {
    cli()
        .assert()
        .success()
        .stdout(str_contains("AI Auto-Generated Schedule (Mockup)"))
        .stdout(str_contains(
            "Level | Week | Day | Activity | Module | Duration(min) | Goal",
        ))
        .stdout(str_contains("Level3→Level4"));
}

#[test]
fn personalized_flags_shape_the_plan() {
    cli()
        .args([
            "--ai-personalized",
            "--minutes-per-week",
            "600",
            "--focus",
            "conversation",
            "--weeks",
            "2",
        ])
        .assert()
        .success()
        .stdout(str_contains("AI Personalized Schedule"))
        .stdout(str_contains("L1-2-Conversation"))
        .stdout(str_contains("90 min/day"));
}

#[test]
fn non_positive_minutes_fail() {
    cli()
        .args(["--ai-personalized", "--minutes-per-week", "0"])
        .assert()
        .failure()
        .stderr(str_contains("invalid argument"));
}

#[test]
fn output_flag_writes_document_instead_of_printing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.md");

    let assert = cli()
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(str_contains("Saved schedule to"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(!stdout.contains("Duration(min)"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 33);
    assert_eq!(lines[0], "AI Auto-Generated Schedule (Mockup)");
}

#[test]
fn workbook_csv_and_json_exports_are_written() {
    let dir = tempdir().unwrap();
    let workbook = dir.path().join("out").join("plan.xlsx");
    let sheet = dir.path().join("out").join("plan.csv");
    let json = dir.path().join("plan.json");

    cli()
        .arg("--excel")
        .arg(&workbook)
        .arg("--csv")
        .arg(&sheet)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let xlsx = std::fs::read(&workbook).unwrap();
    assert!(xlsx.starts_with(b"PK\x03\x04"));
    let csv_text = std::fs::read_to_string(&sheet).unwrap();
    assert_eq!(csv_text.lines().count(), 31);
    let json_text = std::fs::read_to_string(&json).unwrap();
    assert!(json_text.contains("\"title\": \"AI Auto-Generated Schedule (Mockup)\""));
}

#[test]
fn japanese_locale_and_calendar_view() {
    cli()
        .args(["--locale", "ja", "--calendar", "2025-01-06"])
        .assert()
        .success()
        .stdout(str_contains("オンデマンド"))
        .stdout(str_contains("Day number"))
        .stdout(str_contains("2025-01-06 09:00"));
}

#[test]
fn out_of_range_weeks_are_rejected() {
    for weeks in ["0", "53", "4294967295"] {
        cli()
            .args(["--ai-personalized", "--weeks", weeks])
            .assert()
            .failure()
            .stderr(str_contains("--weeks"));
    }
}
