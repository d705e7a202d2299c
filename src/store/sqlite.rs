//! SQLite-backed store (the default backend).

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};

use crate::core::targets::TargetHistory;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::store::migrate::run_pending_migrations;
use crate::store::{EntryStore, SettingsStore};

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// For tests and maintenance tooling.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
        let date_str: String = row.get("date")?;
        let start_str: String = row.get("start_time")?;
        let end_str: String = row.get("end_time")?;

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(date_str.clone())),
            )
        })?;

        let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(start_str.clone())),
            )
        })?;

        let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(end_str.clone())),
            )
        })?;

        Ok(TimeEntry {
            job_name: row.get("job_name")?,
            date,
            start_time,
            end_time,
            break_minutes: row.get("break_minutes")?,
            hours_worked: row.get("hours_worked")?,
            earnings: row.get("earnings")?,
        })
    }
}

const LOAD_ORDER: &str = "ORDER BY date ASC, start_time ASC, id ASC";

impl EntryStore for SqliteStore {
    fn load_entries(&mut self) -> AppResult<Vec<TimeEntry>> {
        let sql = format!(
            "SELECT job_name, date, start_time, end_time, break_minutes, hours_worked, earnings
             FROM entries {LOAD_ORDER}"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn append_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO entries
                 (job_name, date, start_time, end_time, break_minutes, hours_worked, earnings, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.job_name,
                entry.date.format("%Y-%m-%d").to_string(),
                entry.start_time.format("%H:%M").to_string(),
                entry.end_time.format("%H:%M").to_string(),
                entry.break_minutes,
                entry.hours_worked,
                entry.earnings,
                chrono::Local::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn delete_entry(&mut self, position: usize) -> AppResult<()> {
        if position == 0 {
            return Err(AppError::InvalidEntryPosition(position));
        }

        // Resolve the 1-based load-order position to a rowid.
        let sql = format!("SELECT id FROM entries {LOAD_ORDER} LIMIT 1 OFFSET ?1");
        let id: Option<i64> = {
            let mut stmt = self.conn.prepare(&sql)?;
            let mut rows = stmt.query([position as i64 - 1])?;
            match rows.next()? {
                Some(row) => Some(row.get(0)?),
                None => None,
            }
        };

        let id = id.ok_or(AppError::InvalidEntryPosition(position))?;
        self.conn
            .execute("DELETE FROM entries WHERE id = ?1", [id])?;
        Ok(())
    }
}

impl SettingsStore for SqliteStore {
    fn load_settings(&mut self) -> AppResult<Settings> {
        let mut stmt = self.conn.prepare(
            "SELECT default_job_name, default_hourly_wage, estimated_weekly_hours
             FROM settings WHERE id = 1",
        )?;
        let mut rows = stmt.query([])?;

        match rows.next()? {
            Some(row) => Ok(Settings {
                default_job_name: row.get(0)?,
                default_hourly_wage: row.get(1)?,
                estimated_weekly_hours: row.get(2)?,
            }),
            None => Ok(Settings::default()),
        }
    }

    fn save_settings(&mut self, settings: &Settings) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO settings (id, default_job_name, default_hourly_wage, estimated_weekly_hours)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                 default_job_name = excluded.default_job_name,
                 default_hourly_wage = excluded.default_hourly_wage,
                 estimated_weekly_hours = excluded.estimated_weekly_hours",
            params![
                settings.default_job_name,
                settings.default_hourly_wage,
                settings.estimated_weekly_hours,
            ],
        )?;
        Ok(())
    }

    fn load_target_history(&mut self) -> AppResult<TargetHistory> {
        let mut stmt = self
            .conn
            .prepare("SELECT week_id, estimated_hours FROM target_history")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut map = BTreeMap::new();
        for r in rows {
            let (week_id, hours) = r?;
            map.insert(week_id, hours);
        }
        Ok(TargetHistory::from_map(map))
    }

    fn save_target_history(&mut self, history: &TargetHistory) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM target_history", [])?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO target_history (week_id, estimated_hours) VALUES (?1, ?2)")?;
            for (week_id, hours) in history.as_map() {
                stmt.execute(params![week_id, hours])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn memory_store() -> SqliteStore {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        run_pending_migrations(&conn).expect("migrate");
        SqliteStore { conn }
    }

    fn entry(date: &str, start: &str) -> TimeEntry {
        TimeEntry::build(
            "acme",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            NaiveTime::parse_from_str("17:00", "%H:%M").unwrap(),
            30,
            20.0,
        )
    }

    #[test]
    fn empty_store_loads_no_entries() {
        let mut store = memory_store();
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn entries_load_in_date_order() {
        let mut store = memory_store();
        store.append_entry(&entry("2025-02-01", "09:00")).unwrap();
        store.append_entry(&entry("2025-01-01", "09:00")).unwrap();
        store.append_entry(&entry("2025-01-01", "07:00")).unwrap();

        let loaded = store.load_entries().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].date_str(), "2025-01-01");
        assert_eq!(loaded[0].start_time.format("%H:%M").to_string(), "07:00");
        assert_eq!(loaded[2].date_str(), "2025-02-01");
    }

    #[test]
    fn delete_by_position_follows_load_order() {
        let mut store = memory_store();
        store.append_entry(&entry("2025-01-01", "09:00")).unwrap();
        store.append_entry(&entry("2025-01-02", "09:00")).unwrap();

        store.delete_entry(1).unwrap();
        let loaded = store.load_entries().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date_str(), "2025-01-02");
    }

    #[test]
    fn delete_out_of_range_errors() {
        let mut store = memory_store();
        assert!(matches!(
            store.delete_entry(1),
            Err(AppError::InvalidEntryPosition(1))
        ));
        assert!(matches!(
            store.delete_entry(0),
            Err(AppError::InvalidEntryPosition(0))
        ));
    }

    #[test]
    fn settings_default_when_absent() {
        let mut store = memory_store();
        let s = store.load_settings().unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.estimated_weekly_hours, 40.0);
    }

    #[test]
    fn settings_roundtrip() {
        let mut store = memory_store();
        let s = Settings {
            default_job_name: "acme".into(),
            default_hourly_wage: 25.5,
            estimated_weekly_hours: 32.0,
        };
        store.save_settings(&s).unwrap();
        assert_eq!(store.load_settings().unwrap(), s);

        // Saves are wholesale: a second save replaces every field.
        let s2 = Settings {
            default_job_name: "other".into(),
            ..s
        };
        store.save_settings(&s2).unwrap();
        assert_eq!(store.load_settings().unwrap(), s2);
    }

    #[test]
    fn target_history_full_overwrite() {
        let mut store = memory_store();
        let mut h = TargetHistory::new();
        h.record("2024-05", 35.0);
        h.record("2024-06", 36.0);
        store.save_target_history(&h).unwrap();

        let mut h2 = TargetHistory::new();
        h2.record("2024-07", 30.0);
        store.save_target_history(&h2).unwrap();

        let loaded = store.load_target_history().unwrap();
        assert_eq!(loaded, h2);
    }
}
