#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcc() -> Command {
    cargo_bin_cmd!("rclasscal")
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rclasscal_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A config path that does not exist, so every run uses the defaults
/// (term 2023-08-31..2023-12-31).
pub fn no_config(name: &str) -> String {
    temp_out(&format!("{name}_config"), "conf")
}

/// Write a registrar calendar CSV (with header) and return its path.
pub fn write_calendar(name: &str, rows: &[(&str, &str)]) -> String {
    let path = temp_out(&format!("{name}_calendar"), "csv");
    let mut wtr = csv::Writer::from_path(&path).expect("create calendar csv");
    wtr.write_record(["date", "event"]).expect("write header");
    for (date, event) in rows {
        wtr.write_record([*date, *event]).expect("write row");
    }
    wtr.flush().expect("flush calendar csv");
    path
}

/// Fall 2023 registrar calendar used across the CLI tests.
pub fn fall_2023() -> Vec<(&'static str, &'static str)> {
    vec![
        ("August 30", "Classes Begin"),
        ("October 14-17", "Fall Break"),
        ("October 23 - November 3", "Registration"),
        ("November 20, 2024", "Spring Schedule Posted"),
        ("November 22-26", "Thanksgiving Break"),
        ("December 6", "Last Day of Classes"),
        ("December 9-10, 16-17", "Exams"),
    ]
}
