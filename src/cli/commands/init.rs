use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

/// Handle the `init` command: write the config file (unless in test mode)
/// and create the configured backend storage.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(!cli.test)?;

    // Opening the store creates the schema / data files.
    let _store = store::open(cfg)?;

    match cfg.backend {
        crate::store::Backend::Sqlite => {
            success(format!("Database initialized at {}", cfg.database));
        }
        crate::store::Backend::Flat => {
            success(format!("Data directory initialized at {}", cfg.data_dir));
        }
    }

    Ok(())
}
