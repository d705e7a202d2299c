use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::store::Backend;
use crate::ui::messages::warning;
use crate::utils::path::config_dir;

/// Application configuration: which backend holds the data and where.
/// Loaded once in `run()` and threaded by reference; there is no global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: Backend,

    /// SQLite database path (used when backend = sqlite).
    pub database: String,

    /// Flat-file data directory (used when backend = flat).
    pub data_dir: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_backend() -> Backend {
    Backend::Sqlite
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database: Self::database_file().to_string_lossy().to_string(),
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        config_dir().join("timetally.conf")
    }

    /// Default path of the SQLite database.
    pub fn database_file() -> PathBuf {
        config_dir().join("timetally.sqlite")
    }

    /// Default flat-file data directory.
    pub fn data_dir_default() -> PathBuf {
        config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A present but unparseable file falls back to defaults with a warning
    /// rather than aborting; `config --edit` exists to fix it.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Ignoring malformed config {}: {}",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Cannot read config {}: {}", path.display(), e));
                Self::default()
            }
        }
    }

    /// Initialize the config file and storage locations.
    pub fn init_all(&self, write_config: bool) -> std::io::Result<()> {
        fs::create_dir_all(config_dir())?;

        if write_config {
            let yaml = serde_yaml::to_string(self)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        match self.backend {
            Backend::Sqlite => {
                let db_path = PathBuf::from(&self.database);
                if let Some(parent) = db_path.parent() {
                    fs::create_dir_all(parent)?;
                }
            }
            Backend::Flat => {
                fs::create_dir_all(&self.data_dir)?;
            }
        }

        Ok(())
    }
}
