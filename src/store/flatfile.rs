//! Flat-file store: CSV entries, YAML settings, JSON target history.
//!
//! The second backend behind the store traits. Files live together in one
//! data directory; a missing file is the documented empty state, a present
//! but unparseable file is a data-access fault.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::core::targets::TargetHistory;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::store::{EntryStore, SettingsStore};

const ENTRIES_FILE: &str = "entries.csv";
const SETTINGS_FILE: &str = "settings.yaml";
const TARGETS_FILE: &str = "target_history.json";

pub struct FlatFileStore {
    dir: PathBuf,
}

impl FlatFileStore {
    pub fn open(dir: &str) -> AppResult<Self> {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn entries_path(&self) -> PathBuf {
        self.dir.join(ENTRIES_FILE)
    }

    fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    fn targets_path(&self) -> PathBuf {
        self.dir.join(TARGETS_FILE)
    }

    fn read_entries(path: &Path) -> AppResult<Vec<TimeEntry>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AppError::Store(format!("cannot read {}: {e}", path.display())))?;

        let mut out = Vec::new();
        for record in reader.deserialize::<TimeEntry>() {
            out.push(
                record
                    .map_err(|e| AppError::Store(format!("malformed entry row: {e}")))?,
            );
        }
        Ok(out)
    }

    fn write_all_entries(path: &Path, entries: &[TimeEntry]) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| AppError::Store(format!("cannot write {}: {e}", path.display())))?;
        for entry in entries {
            writer
                .serialize(entry)
                .map_err(|e| AppError::Store(format!("cannot write entry: {e}")))?;
        }
        writer
            .flush()
            .map_err(|e| AppError::Store(format!("cannot flush entries: {e}")))?;
        Ok(())
    }

    /// Load order is date, start time, then file order. Entries are kept in
    /// append order on disk and sorted on load so both backends present the
    /// same positions.
    fn sort_entries(entries: &mut [TimeEntry]) {
        // sort_by is stable, so same-date same-start rows keep file order
        entries.sort_by(|a, b| {
            (a.date, a.start_time).cmp(&(b.date, b.start_time))
        });
    }
}

impl EntryStore for FlatFileStore {
    fn load_entries(&mut self) -> AppResult<Vec<TimeEntry>> {
        let mut entries = Self::read_entries(&self.entries_path())?;
        Self::sort_entries(&mut entries);
        Ok(entries)
    }

    fn append_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        let path = self.entries_path();
        let new_file = !path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(new_file)
            .from_writer(file);

        writer
            .serialize(entry)
            .map_err(|e| AppError::Store(format!("cannot append entry: {e}")))?;
        writer
            .flush()
            .map_err(|e| AppError::Store(format!("cannot flush entries: {e}")))?;
        Ok(())
    }

    fn delete_entry(&mut self, position: usize) -> AppResult<()> {
        let mut entries = self.load_entries()?;
        if position == 0 || position > entries.len() {
            return Err(AppError::InvalidEntryPosition(position));
        }
        entries.remove(position - 1);
        Self::write_all_entries(&self.entries_path(), &entries)
    }
}

impl SettingsStore for FlatFileStore {
    fn load_settings(&mut self) -> AppResult<Settings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Store(format!("malformed {}: {e}", path.display())))
    }

    fn save_settings(&mut self, settings: &Settings) -> AppResult<()> {
        let yaml = serde_yaml::to_string(settings)
            .map_err(|e| AppError::Store(format!("cannot serialize settings: {e}")))?;
        fs::write(self.settings_path(), yaml)?;
        Ok(())
    }

    fn load_target_history(&mut self) -> AppResult<TargetHistory> {
        let path = self.targets_path();
        if !path.exists() {
            return Ok(TargetHistory::new());
        }

        let file = File::open(&path)?;
        let map: BTreeMap<String, f64> = serde_json::from_reader(file)
            .map_err(|e| AppError::Store(format!("malformed {}: {e}", path.display())))?;
        Ok(TargetHistory::from_map(map))
    }

    fn save_target_history(&mut self, history: &TargetHistory) -> AppResult<()> {
        let json = serde_json::to_string_pretty(history.as_map())
            .map_err(|e| AppError::Store(format!("cannot serialize target history: {e}")))?;
        fs::write(self.targets_path(), json)?;
        Ok(())
    }
}
