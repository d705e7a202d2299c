//! Platform paths for the config file and default data locations.

use std::path::PathBuf;

/// Standard configuration directory, `~/.config/timetally` style on Unix,
/// `%APPDATA%\timetally` on Windows. Falls back to the current directory
/// when the platform dirs are unavailable.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timetally")
}
