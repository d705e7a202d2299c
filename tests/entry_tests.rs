use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_entry, setup_data_dir, setup_test_db, tt};

#[test]
fn test_add_and_list_entry() {
    let db_path = setup_test_db("add_and_list");

    tt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_entry(&db_path, "2025-01-06", "09:00", "17:00", "30", "20");

    tt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-01-06"))
        .stdout(contains("acme"))
        .stdout(contains("7.50"))
        .stdout(contains("150.00"));
}

#[test]
fn test_add_reports_hours_and_earnings() {
    let db_path = setup_test_db("add_reports");

    tt()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-01-06",
            "--start",
            "09:00",
            "--end",
            "17:00",
            "--break",
            "30",
            "--wage",
            "20",
        ])
        .assert()
        .success()
        .stdout(contains("worked hours 7.50"))
        .stdout(contains("earnings 150.00"));
}

#[test]
fn test_add_rejects_missing_end_time() {
    let db_path = setup_test_db("missing_end");

    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "09:00", "--wage", "20",
        ])
        .assert()
        .failure()
        .stderr(contains("Start and end time are both required"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("end_before_start");

    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "17:00", "--end", "09:00",
            "--wage", "20",
        ])
        .assert()
        .failure()
        .stderr(contains("End time must be later than start time"));
}

#[test]
fn test_add_rejects_negative_break() {
    let db_path = setup_test_db("negative_break");

    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "09:00", "--end", "17:00",
            "--break", "-10", "--wage", "20",
        ])
        .assert()
        .failure()
        .stderr(contains("Break minutes cannot be negative"));
}

#[test]
fn test_add_rejects_default_zero_wage() {
    let db_path = setup_test_db("zero_wage");

    // No --wage and empty settings: the 0.0 default wage fails validation.
    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "09:00", "--end", "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Hourly wage must be greater than zero"));
}

#[test]
fn test_add_accepts_boundary_wage() {
    let db_path = setup_test_db("boundary_wage");

    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "09:00", "--end", "10:00",
            "--wage", "0.01",
        ])
        .assert()
        .success()
        .stdout(contains("worked hours 1.00"))
        .stdout(contains("earnings 0.01"));
}

#[test]
fn test_add_overlong_break_zeroes_entry() {
    let db_path = setup_test_db("overlong_break");

    // Break exceeds the interval: entry is stored with zero hours, not
    // rejected.
    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "09:00", "--end", "10:00",
            "--break", "120", "--wage", "20",
        ])
        .assert()
        .success()
        .stdout(contains("worked hours 0.00"))
        .stdout(contains("earnings 0.00"));
}

#[test]
fn test_add_rejects_invalid_date_and_time() {
    let db_path = setup_test_db("invalid_date_time");

    tt()
        .args([
            "--db", &db_path, "add", "2025-13-40", "--start", "09:00", "--end", "17:00",
            "--wage", "20",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    tt()
        .args([
            "--db", &db_path, "add", "2025-01-06", "--start", "9am", "--end", "17:00",
            "--wage", "20",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_list_empty_store() {
    let db_path = setup_test_db("list_empty");

    tt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn test_list_positions_follow_date_order() {
    let db_path = setup_test_db("list_positions");

    // Inserted out of order; list positions follow date order.
    add_entry(&db_path, "2025-01-08", "09:00", "17:00", "0", "20");
    add_entry(&db_path, "2025-01-06", "09:00", "17:00", "0", "20");

    let out = tt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let pos_06 = text.find("2025-01-06").expect("entry 06 listed");
    let pos_08 = text.find("2025-01-08").expect("entry 08 listed");
    assert!(pos_06 < pos_08, "ascending order by default");
}

#[test]
fn test_list_descending_order() {
    let db_path = setup_test_db("list_desc");

    add_entry(&db_path, "2025-01-06", "09:00", "17:00", "0", "20");
    add_entry(&db_path, "2025-01-08", "09:00", "17:00", "0", "20");

    let out = tt()
        .args(["--db", &db_path, "list", "--order", "desc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let pos_06 = text.find("2025-01-06").expect("entry 06 listed");
    let pos_08 = text.find("2025-01-08").expect("entry 08 listed");
    assert!(pos_08 < pos_06, "newest first with --order desc");
}

#[test]
fn test_delete_entry_by_position() {
    let db_path = setup_test_db("delete_entry");

    add_entry(&db_path, "2025-01-06", "09:00", "17:00", "0", "20");
    add_entry(&db_path, "2025-01-07", "09:00", "17:00", "0", "20");

    tt()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted entry at position 1"));

    tt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-01-07"))
        .stdout(contains("2025-01-06").not());
}

#[test]
fn test_delete_aborts_without_confirmation() {
    let db_path = setup_test_db("delete_abort");

    add_entry(&db_path, "2025-01-06", "09:00", "17:00", "0", "20");

    tt()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Aborted. No entries deleted."));

    tt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-01-06"));
}

#[test]
fn test_delete_out_of_range_position() {
    let db_path = setup_test_db("delete_oob");

    add_entry(&db_path, "2025-01-06", "09:00", "17:00", "0", "20");

    tt()
        .args(["--db", &db_path, "del", "5"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No entry at position 5"));
}

#[test]
fn test_flat_backend_add_list_delete() {
    let data_dir = setup_data_dir("flat_roundtrip");

    tt()
        .args([
            "--data-dir",
            &data_dir,
            "add",
            "2025-01-06",
            "--start",
            "09:00",
            "--end",
            "17:00",
            "--break",
            "30",
            "--wage",
            "20",
            "--job",
            "acme",
        ])
        .assert()
        .success()
        .stdout(contains("worked hours 7.50"));

    // The flat backend writes the canonical CSV columns.
    let csv_path = std::path::Path::new(&data_dir).join("entries.csv");
    let content = std::fs::read_to_string(&csv_path).expect("entries.csv written");
    assert!(content.starts_with(
        "Job Name,Date,Start time,End time,Break minutes,Hours worked,Earnings"
    ));
    assert!(content.contains("acme,2025-01-06,09:00,17:00,30,7.5,150.0"));

    tt()
        .args(["--data-dir", &data_dir, "list"])
        .assert()
        .success()
        .stdout(contains("2025-01-06"))
        .stdout(contains("7.50"));

    tt()
        .args(["--data-dir", &data_dir, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success();

    tt()
        .args(["--data-dir", &data_dir, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}
