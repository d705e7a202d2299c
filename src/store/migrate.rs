//! SQLite schema management. All schema creation goes through here so the
//! store itself never issues CREATE TABLE statements.

use rusqlite::{Connection, OptionalExtension, Result};

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            job_name      TEXT NOT NULL DEFAULT '',
            date          TEXT NOT NULL,
            start_time    TEXT NOT NULL,
            end_time      TEXT NOT NULL,
            break_minutes INTEGER NOT NULL DEFAULT 0,
            hours_worked  REAL NOT NULL,
            earnings      REAL NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date, start_time);
        "#,
    )?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id                     INTEGER PRIMARY KEY CHECK (id = 1),
            default_job_name       TEXT NOT NULL DEFAULT '',
            default_hourly_wage    REAL NOT NULL DEFAULT 0,
            estimated_weekly_hours REAL NOT NULL DEFAULT 40
        );
        "#,
    )?;
    Ok(())
}

fn create_target_history_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS target_history (
            week_id         TEXT PRIMARY KEY,
            estimated_hours REAL NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: bring the schema up to date.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "entries")? {
        create_entries_table(conn)?;
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date, start_time);",
        )?;
    }

    create_settings_table(conn)?;
    create_target_history_table(conn)?;

    Ok(())
}
