use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{fall_2023, no_config, rcc, temp_out, write_calendar};

#[test]
fn test_meetings_markdown_stdout() {
    let cfg = no_config("meetings_md");

    rcc()
        .args([
            "--config",
            &cfg,
            "meetings",
            "--start",
            "2023-08-31",
            "--end",
            "2023-09-07",
        ])
        .assert()
        .success()
        .stdout(contains("| date       | day |"))
        .stdout(contains("| 2023-08-31 | Th. |"))
        .stdout(contains("| 2023-09-05 | Tu. |"))
        .stdout(contains("| 2023-09-07 | Th. |"))
        .stdout(contains("2023-09-06").not());
}

#[test]
fn test_meetings_csv_uses_config_defaults() {
    let cfg = no_config("meetings_csv");

    rcc()
        .args(["--config", &cfg, "meetings", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("date,day"))
        .stdout(contains("2023-08-31,Th."))
        .stdout(contains("2023-12-28,Th."));
}

#[test]
fn test_meetings_rejects_reversed_bounds() {
    let cfg = no_config("meetings_reversed");

    rcc()
        .args([
            "--config",
            &cfg,
            "meetings",
            "--start",
            "2023-12-31",
            "--end",
            "2023-08-31",
        ])
        .assert()
        .failure()
        .stderr(contains("is after term end"));
}

#[test]
fn test_meetings_rejects_bad_date() {
    let cfg = no_config("meetings_bad_date");

    rcc()
        .args(["--config", &cfg, "meetings", "--start", "31/08/2023"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_calendar_csv_stdout() {
    let cfg = no_config("calendar_csv");
    let input = write_calendar("calendar_csv", &fall_2023());

    rcc()
        .args(["--config", &cfg, "calendar", "-i", &input, "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("date,event"))
        .stdout(contains("2023-08-30,Classes Begin"))
        .stdout(contains("2023-10-31,Registration"))
        .stdout(contains("2023-11-20,Spring Schedule Posted"))
        .stdout(contains("2023-12-16,Exams"))
        .stdout(contains("2023-12-12,Exams").not());
}

#[test]
fn test_calendar_year_override() {
    let cfg = no_config("calendar_year");
    let input = write_calendar("calendar_year", &fall_2023());

    rcc()
        .args([
            "--config", &cfg, "calendar", "-i", &input, "--format", "csv", "--year", "2024",
        ])
        .assert()
        .success()
        .stdout(contains("2024-08-30,Classes Begin"));
}

#[test]
fn test_calendar_start_sets_reference_year() {
    let cfg = no_config("calendar_start");
    let input = write_calendar("calendar_start", &fall_2023());

    rcc()
        .args([
            "--config", &cfg, "calendar", "-i", &input, "--format", "csv", "--start",
            "2024-08-29",
        ])
        .assert()
        .success()
        .stdout(contains("2024-08-30,Classes Begin"))
        .stdout(contains("2023-").not());
}

#[test]
fn test_schedule_start_sets_reference_year() {
    let cfg = no_config("schedule_start");
    let input = write_calendar("schedule_start", &[("September 3", "Labor Day Observed")]);

    rcc()
        .args([
            "--config", &cfg, "schedule", "-i", &input, "--format", "csv", "--start",
            "2024-08-29", "--end", "2024-09-05",
        ])
        .assert()
        .success()
        .stdout(contains("2024-08-29,Th.,,,\n"))
        .stdout(contains("2024-09-03,Tu.,,,Labor Day Observed"));
}

#[test]
fn test_calendar_reversed_range_is_skipped_with_warning() {
    let cfg = no_config("calendar_reversed");
    let input = write_calendar(
        "calendar_reversed",
        &[
            ("December 16 - January 15", "Winter Break"),
            ("August 30", "Classes Begin"),
        ],
    );

    rcc()
        .args(["--config", &cfg, "calendar", "-i", &input, "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("2023-08-30,Classes Begin"))
        .stdout(contains("Winter Break").not())
        .stderr(contains("before it starts"));
}

#[test]
fn test_calendar_markdown_file() {
    let cfg = no_config("calendar_md_file");
    let input = write_calendar("calendar_md_file", &fall_2023());
    let out = temp_out("calendar_md_file", "md");

    rcc()
        .args(["--config", &cfg, "calendar", "-i", &input, "-o", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read calendar markdown");
    assert!(content.starts_with("| date       | event"));
    assert!(content.contains("| 2023-10-17 | Fall Break"));
}

#[test]
fn test_schedule_csv_file() {
    let cfg = no_config("schedule_csv");
    let input = write_calendar("schedule_csv", &fall_2023());
    let out = temp_out("schedule_csv", "csv");

    rcc()
        .args([
            "--config", &cfg, "schedule", "-i", &input, "-o", &out, "--format", "csv",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read schedule csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "date,day,topic,reading,academic calendar");
    assert_eq!(lines.len(), 36);
    assert!(lines.contains(&"2023-08-31,Th.,,,"));
    assert!(lines.contains(&"2023-10-17,Tu.,,,Fall Break"));
    assert!(lines.contains(&"2023-10-24,Tu.,,,Registration"));
    assert!(lines.contains(&"2023-11-02,Th.,,,Registration"));
    assert!(lines.contains(&"2023-11-23,Th.,,,Thanksgiving Break"));
    assert!(lines.contains(&"2023-12-05,Tu.,,,"));
}

#[test]
fn test_schedule_markdown_stdout() {
    let cfg = no_config("schedule_md");
    let input = write_calendar("schedule_md", &fall_2023());

    rcc()
        .args([
            "--config",
            &cfg,
            "schedule",
            "-i",
            &input,
            "--start",
            "2023-10-16",
            "--end",
            "2023-10-20",
        ])
        .assert()
        .success()
        .stdout(contains("| date       | day | topic | reading | academic calendar |"))
        .stdout(contains("| 2023-10-17 | Tu. |       |         | Fall Break        |"))
        .stdout(contains("| 2023-10-19 | Th. |       |         |                   |"));
}

#[test]
fn test_schedule_json_file() {
    let cfg = no_config("schedule_json");
    let input = write_calendar("schedule_json", &fall_2023());
    let out = temp_out("schedule_json", "json");

    rcc()
        .args([
            "--config", &cfg, "schedule", "-i", &input, "-o", &out, "--format", "json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read schedule json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("json array");

    assert_eq!(rows.len(), 35);
    assert_eq!(rows[0]["date"], "2023-08-31");
    assert_eq!(rows[0]["day"], "Th.");
    assert!(
        rows.iter()
            .any(|r| r["date"] == "2023-11-23" && r["academic calendar"] == "Thanksgiving Break")
    );
}

#[test]
fn test_schedule_fail_fast_writes_nothing() {
    let cfg = no_config("schedule_fail_fast");
    let mut rows = fall_2023();
    rows.push(("Smarch 1", "Lousy Smarch Weather"));
    let input = write_calendar("schedule_fail_fast", &rows);
    let out = temp_out("schedule_fail_fast", "md");

    rcc()
        .args(["--config", &cfg, "schedule", "-i", &input, "-o", &out])
        .assert()
        .failure()
        .stderr(contains("Malformed date range 'Smarch 1'"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_schedule_skip_invalid_continues() {
    let cfg = no_config("schedule_skip");
    let mut rows = fall_2023();
    rows.push(("Smarch 1", "Lousy Smarch Weather"));
    let input = write_calendar("schedule_skip", &rows);
    let out = temp_out("schedule_skip", "csv");

    rcc()
        .args([
            "--config",
            &cfg,
            "schedule",
            "-i",
            &input,
            "-o",
            &out,
            "--format",
            "csv",
            "--skip-invalid",
        ])
        .assert()
        .success()
        .stderr(contains("Skipping row 'Lousy Smarch Weather'"));

    let content = fs::read_to_string(&out).expect("read schedule csv");
    assert!(content.contains("2023-10-17,Tu.,,,Fall Break"));
}

#[test]
fn test_schedule_tie_break_policies() {
    let cfg = no_config("schedule_tie_break");
    let mut rows = fall_2023();
    rows.push(("October 24", "Advising Day"));
    let input = write_calendar("schedule_tie_break", &rows);

    rcc()
        .args(["--config", &cfg, "schedule", "-i", &input, "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("2023-10-24,Tu.,,,Registration\n"))
        .stderr(contains("2 events on 2023-10-24"));

    rcc()
        .args([
            "--config",
            &cfg,
            "schedule",
            "-i",
            &input,
            "--format",
            "csv",
            "--tie-break",
            "concat",
        ])
        .assert()
        .success()
        .stdout(contains("2023-10-24,Tu.,,,Registration; Advising Day"));

    rcc()
        .args([
            "--config",
            &cfg,
            "schedule",
            "-i",
            &input,
            "--tie-break",
            "strict",
        ])
        .assert()
        .failure()
        .stderr(contains("Ambiguous events on 2023-10-24"));
}

#[test]
fn test_existing_output_needs_confirmation() {
    let cfg = no_config("schedule_overwrite");
    let input = write_calendar("schedule_overwrite", &fall_2023());
    let out = temp_out("schedule_overwrite", "md");
    fs::write(&out, "keep me").unwrap();

    rcc()
        .args(["--config", &cfg, "schedule", "-i", &input, "-o", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rcc()
        .args(["--config", &cfg, "schedule", "-i", &input, "-o", &out, "-f"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Thanksgiving Break"));
}

#[test]
fn test_quiet_silences_progress() {
    let cfg = no_config("schedule_quiet");
    let input = write_calendar("schedule_quiet", &fall_2023());

    rcc()
        .args(["--config", &cfg, "-q", "schedule", "-i", &input])
        .assert()
        .success()
        .stderr(contains("Parsed").not());
}

#[test]
fn test_init_and_print_config() {
    let cfg = no_config("init_print");

    rcc().args(["--config", &cfg, "init"]).assert().success();
    assert!(Path::new(&cfg).exists());

    rcc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("term_start"))
        .stdout(contains("2023-08-31"))
        .stdout(contains("tie_break: first"));
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    let cfg = no_config("init_test_mode");

    rcc()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(!Path::new(&cfg).exists());
}

#[test]
fn test_config_file_drives_term_and_policy() {
    let cfg = no_config("custom_config");
    fs::write(
        &cfg,
        "term_start: '2024-01-16'\nterm_end: '2024-01-25'\ntie_break: concat\n",
    )
    .unwrap();

    let input = write_calendar(
        "custom_config",
        &[("January 18", "MLK Observed"), ("January 18", "Add/Drop")],
    );

    rcc()
        .args(["--config", &cfg, "schedule", "-i", &input, "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("2024-01-16,Tu.,,,\n"))
        .stdout(contains("2024-01-18,Th.,,,MLK Observed; Add/Drop"))
        .stdout(contains("2024-01-25,Th.,,,"))
        .stdout(contains("2024-01-30").not());
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = no_config("broken_config");
    fs::write(&cfg, "tie_break: sometimes\n").unwrap();

    rcc()
        .args(["--config", &cfg, "meetings"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
