#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn crp() -> Command {
    cargo_bin_cmd!("calreport")
}

pub fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// Fresh, empty output directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("calreport_{name}"));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write a test configuration with three calendars and return its path.
pub fn setup_config(name: &str) -> String {
    let mut path = env::temp_dir();
    path.push(format!("calreport_{name}.conf"));
    fs::write(
        &path,
        r#"owner_name: Michael Guldborg Consulting
calendars:
  - name: minejendom
    id: a@group.calendar.google.com
  - name: sidecourt
    id: b@group.calendar.google.com
  - name: freelance
    id: c@group.calendar.google.com
default_start: [2019, 1, 20, 0, 0]
default_end: [2019, 2, 19, 23, 59]
"#,
    )
    .expect("write test config");
    path.to_string_lossy().to_string()
}
