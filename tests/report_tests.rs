mod common;
use common::{crp, fixture, setup_config, temp_dir};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_report_csv_from_events_file() {
    let cfg = setup_config("report_csv");
    let out = temp_dir("report_csv");
    let out_str = out.to_string_lossy().to_string();

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "--calendar",
            "freelance",
            "--from",
            "",
            "--to",
            "",
            "--filter",
            "",
            "--format",
            "csv",
            "--output-dir",
            &out_str,
            "--events-file",
            &fixture("freelance.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("====================== Report for freelance"))
        .stdout(predicate::str::contains("hours_total: 29.25"));

    let content = fs::read_to_string(out.join("freelance-01-02.csv")).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "Michael Guldborg Consulting;;;",
            "From: 20-01-2019;;;",
            "To: 19-02-2019;;;",
            "Date;Start;End;Duration",
            "21-01-2019;09:00;09:30;0:30:00",
            "22-01-2019;13:00;15:15;2:15:00",
            "28-01-2019;08:00;10:30;1 day, 2:30:00",
            ";;Total;29.25",
        ]
    );
}

#[test]
fn test_report_pdf_with_filter_in_name() {
    let cfg = setup_config("report_pdf_filter");
    let out = temp_dir("report_pdf_filter");
    let out_str = out.to_string_lossy().to_string();

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "-c",
            "2",
            "--from",
            "2019,1",
            "--to",
            "2019,2",
            "--filter",
            "review",
            "--output-dir",
            &out_str,
            "--events-file",
            &fixture("freelance.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped Standup"));

    let pdf = fs::read(out.join("freelance-01-02-review.pdf")).expect("read pdf");
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(pdf.windows(b"(2.25)".len()).any(|w| w == b"(2.25)"));
}

#[test]
fn test_report_json_with_no_matching_events() {
    let cfg = setup_config("report_json_empty");
    let out = temp_dir("report_json_empty");
    let out_str = out.to_string_lossy().to_string();

    crp()
        .args([
            "--config",
            &cfg,
            "-q",
            "report",
            "-c",
            "freelance",
            "--from",
            "",
            "--to",
            "",
            "--filter",
            "xyz",
            "--format",
            "json",
            "--output-dir",
            &out_str,
            "--events-file",
            &fixture("freelance.json"),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(out.join("freelance-01-02-xyz.json")).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["rows"].as_array().map(|a| a.len()), Some(0));
    assert_eq!(v["total"]["end"], "Total");
    assert_eq!(v["total"]["duration"], "0.0");
    assert_eq!(v["headers"][0], "Michael Guldborg Consulting");
}

#[test]
fn test_report_interactive_input() {
    let cfg = setup_config("report_interactive");
    let out = temp_dir("report_interactive");
    let out_str = out.to_string_lossy().to_string();

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "--format",
            "csv",
            "--output-dir",
            &out_str,
            "--events-file",
            &fixture("freelance.json"),
        ])
        .write_stdin("2\n2019,1,21\n\nstandup\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please pick a calendar to use"));

    let content =
        fs::read_to_string(out.join("freelance-01-02-standup.csv")).expect("read csv");
    assert!(content.contains("From: 21-01-2019"));
    assert!(content.contains(";;Total;0.5"));
}

#[test]
fn test_report_truncated_input_cancels() {
    let cfg = setup_config("report_truncated");
    let out = temp_dir("report_truncated");
    let out_str = out.to_string_lossy().to_string();

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "--format",
            "csv",
            "--output-dir",
            &out_str,
            "--events-file",
            &fixture("freelance.json"),
        ])
        .write_stdin("2\n2019,1,21\n\nstandup\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cancelled by user"));

    assert!(!out.join("freelance-01-02-standup.csv").exists());
}

#[test]
fn test_report_invalid_calendar_index_fails() {
    let cfg = setup_config("report_bad_index");

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "-c",
            "7",
            "--from",
            "",
            "--to",
            "",
            "--filter",
            "",
            "--events-file",
            &fixture("freelance.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid calendar index"));
}

#[test]
fn test_report_non_numeric_date_fails() {
    let cfg = setup_config("report_bad_date");

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "-c",
            "0",
            "--from",
            "2019,jan",
            "--to",
            "",
            "--filter",
            "",
            "--events-file",
            &fixture("freelance.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date input"));
}

#[test]
fn test_report_impossible_month_fails() {
    let cfg = setup_config("report_month_13");

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "-c",
            "0",
            "--from",
            "2019,13",
            "--to",
            "",
            "--filter",
            "",
            "--events-file",
            &fixture("freelance.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_report_all_day_event_aborts() {
    let cfg = setup_config("report_all_day");
    let out = temp_dir("report_all_day");
    let out_str = out.to_string_lossy().to_string();

    crp()
        .args([
            "--config",
            &cfg,
            "report",
            "-c",
            "0",
            "--from",
            "",
            "--to",
            "",
            "--filter",
            "",
            "--output-dir",
            &out_str,
            "--events-file",
            &fixture("broken.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event timestamp"));

    assert!(!out.join("freelance-01-02.pdf").exists());
}

#[test]
fn test_report_existing_file_needs_force() {
    let cfg = setup_config("report_force");
    let out = temp_dir("report_force");
    let out_str = out.to_string_lossy().to_string();
    let events = fixture("freelance.json");
    let args = [
        "--config",
        &cfg,
        "report",
        "-c",
        "freelance",
        "--from",
        "",
        "--to",
        "",
        "--filter",
        "",
        "--format",
        "csv",
        "--output-dir",
        &out_str,
        "--events-file",
        &events,
    ];

    crp().args(args).assert().success();

    // declined overwrite
    crp().args(args).write_stdin("n\n").assert().failure();

    crp().args(args).arg("--force").assert().success();
}
