//! timetally library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; CLI overrides are applied on top of it.
    let mut cfg = Config::load();

    // An explicit storage override also selects the matching backend, so
    // tests and scripts are independent of the on-disk config.
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
        cfg.backend = store::Backend::Sqlite;
    }
    if let Some(custom_dir) = &cli.data_dir {
        cfg.data_dir = custom_dir.clone();
        cfg.backend = store::Backend::Flat;
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }

    dispatch(&cli, &cfg)
}
