//! Persistence contracts and backend selection.
//!
//! The core depends only on the two capability traits below; the SQLite and
//! flat-file backends are interchangeable behind them.

pub mod flatfile;
pub mod migrate;
pub mod sqlite;

use clap::ValueEnum;

use crate::config::Config;
use crate::core::targets::TargetHistory;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;

/// Append/read/delete of entry records.
///
/// `load_entries` must tolerate an empty store (empty Vec, not an error) and
/// returns entries in load order: date, then start time, then insertion
/// order. Positions handed to `delete_entry` are 1-based indexes into that
/// same order.
pub trait EntryStore {
    fn load_entries(&mut self) -> AppResult<Vec<TimeEntry>>;
    fn append_entry(&mut self, entry: &TimeEntry) -> AppResult<()>;
    fn delete_entry(&mut self, position: usize) -> AppResult<()>;
}

/// Settings plus the week-keyed target history. Saving the history is a
/// full overwrite, never an incremental merge.
pub trait SettingsStore {
    fn load_settings(&mut self) -> AppResult<Settings>;
    fn save_settings(&mut self, settings: &Settings) -> AppResult<()>;
    fn load_target_history(&mut self) -> AppResult<TargetHistory>;
    fn save_target_history(&mut self, history: &TargetHistory) -> AppResult<()>;
}

pub trait Store: EntryStore + SettingsStore {}

impl<T: EntryStore + SettingsStore> Store for T {}

/// Which backend holds the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Flat,
}

/// Open the backend selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn Store>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(sqlite::SqliteStore::open(&cfg.database)?)),
        Backend::Flat => Ok(Box::new(flatfile::FlatFileStore::open(&cfg.data_dir)?)),
    }
}
