#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("timetally")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetally.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique flat-backend data dir inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetally_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one entry through the CLI against a sqlite test DB
pub fn add_entry(db_path: &str, date: &str, start: &str, end: &str, brk: &str, wage: &str) {
    tt()
        .args([
            "--db", db_path, "--test", "add", date, "--start", start, "--end", end, "--break",
            brk, "--wage", wage, "--job", "acme",
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// two 7.5h sessions in ISO week 2025-02 and one 4h session in 2025-06.
pub fn init_db_with_data(db_path: &str) {
    tt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_entry(db_path, "2025-01-06", "09:00", "17:00", "30", "20");
    add_entry(db_path, "2025-01-07", "09:00", "17:00", "30", "20");
    add_entry(db_path, "2025-02-03", "09:00", "13:00", "0", "20");
}
