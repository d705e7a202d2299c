use chrono::Datelike;
use predicates::str::contains;

mod common;
use common::{setup_data_dir, setup_test_db, tt};

fn current_week_id() -> String {
    let iw = chrono::Local::now().date_naive().iso_week();
    format!("{}-{:02}", iw.year(), iw.week())
}

#[test]
fn test_settings_show_defaults() {
    let db_path = setup_test_db("settings_defaults");

    tt()
        .args(["--db", &db_path, "settings", "--show"])
        .assert()
        .success()
        .stdout(contains("Active job: -"))
        .stdout(contains("Hourly wage: 0.00"))
        .stdout(contains("Estimated weekly hours: 40"));
}

#[test]
fn test_settings_save_and_show() {
    let db_path = setup_test_db("settings_save");

    tt()
        .args([
            "--db",
            &db_path,
            "--test",
            "settings",
            "--job",
            "acme",
            "--wage",
            "21.5",
            "--weekly-hours",
            "35",
        ])
        .assert()
        .success()
        .stdout(contains("Settings saved."));

    tt()
        .args(["--db", &db_path, "settings", "--show"])
        .assert()
        .success()
        .stdout(contains("Active job: acme"))
        .stdout(contains("Hourly wage: 21.50"))
        .stdout(contains("Estimated weekly hours: 35"));
}

#[test]
fn test_settings_partial_update_keeps_other_fields() {
    let db_path = setup_test_db("settings_partial");

    tt()
        .args([
            "--db", &db_path, "settings", "--job", "acme", "--wage", "20",
        ])
        .assert()
        .success();

    tt()
        .args(["--db", &db_path, "settings", "--wage", "25"])
        .assert()
        .success();

    tt()
        .args(["--db", &db_path, "settings", "--show"])
        .assert()
        .success()
        .stdout(contains("Active job: acme"))
        .stdout(contains("Hourly wage: 25.00"));
}

#[test]
fn test_settings_rejects_invalid_values() {
    let db_path = setup_test_db("settings_invalid");

    tt()
        .args(["--db", &db_path, "settings", "--weekly-hours", "0"])
        .assert()
        .failure()
        .stderr(contains("estimated weekly hours must be positive"));

    tt()
        .args(["--db", &db_path, "settings", "--wage", "-5"])
        .assert()
        .failure()
        .stderr(contains("default hourly wage cannot be negative"));
}

#[test]
fn test_saving_settings_stamps_current_week_target() {
    let db_path = setup_test_db("settings_stamp_week");

    tt()
        .args(["--db", &db_path, "settings", "--weekly-hours", "32"])
        .assert()
        .success();

    // The history key is the ISO week of the save date.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (week_id, hours): (String, f64) = conn
        .query_row(
            "SELECT week_id, estimated_hours FROM target_history",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("one history row");

    assert_eq!(week_id, current_week_id());
    assert_eq!(hours, 32.0);
}

#[test]
fn test_resaving_settings_overwrites_current_week_target() {
    let db_path = setup_test_db("settings_stamp_overwrite");

    tt()
        .args(["--db", &db_path, "settings", "--weekly-hours", "32"])
        .assert()
        .success();

    tt()
        .args(["--db", &db_path, "settings", "--weekly-hours", "36"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM target_history", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1, "same week overwrites, never duplicates");

    let hours: f64 = conn
        .query_row("SELECT estimated_hours FROM target_history", [], |row| {
            row.get(0)
        })
        .expect("hours");
    assert_eq!(hours, 36.0);
}

#[test]
fn test_flat_backend_settings_roundtrip() {
    let data_dir = setup_data_dir("flat_settings");

    tt()
        .args([
            "--data-dir",
            &data_dir,
            "settings",
            "--job",
            "acme",
            "--weekly-hours",
            "30",
        ])
        .assert()
        .success();

    tt()
        .args(["--data-dir", &data_dir, "settings", "--show"])
        .assert()
        .success()
        .stdout(contains("Active job: acme"))
        .stdout(contains("Estimated weekly hours: 30"));

    // Target history lands in the JSON file, keyed by the save week.
    let json = std::fs::read_to_string(
        std::path::Path::new(&data_dir).join("target_history.json"),
    )
    .expect("target_history.json written");
    assert!(json.contains(&current_week_id()));
    assert!(json.contains("30.0"));
}
