use std::io::{self, Write, stdin};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;

/// Delete an entry by its 1-based list position, with confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { position } = cmd {
        let mut store = store::open(cfg)?;

        print!("Are you sure to delete entry {} (N/y) ? ", position);
        let _ = io::stdout().flush();
        let mut input = String::new();
        stdin().read_line(&mut input).unwrap_or(0);
        if input.trim().to_lowercase() != "y" {
            println!("Aborted. No entries deleted.");
            return Ok(());
        }

        store.delete_entry(*position)?;
        info(format!("Deleted entry at position {}", position));
    }

    Ok(())
}
