use clap::{Parser, Subcommand};

use crate::export::ExportFormat;
use crate::models::summary::SortOrder;
use crate::store::Backend;

/// Command-line interface definition for timetally
/// CLI application to track daily work hours, earnings and weekly overtime
#[derive(Parser)]
#[command(
    name = "timetally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily work hours and earnings, with weekly overtime against a configurable target",
    long_about = None
)]
pub struct Cli {
    /// Override the SQLite database path (implies the sqlite backend)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the flat-file data directory (implies the flat backend)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Override the persistence backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and storage
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or change the stored defaults (job, wage, weekly hours target)
    Settings {
        #[arg(long = "show", help = "Show the current settings")]
        show: bool,

        #[arg(long = "job", help = "Default job name for new entries")]
        job: Option<String>,

        #[arg(
            long = "wage",
            help = "Default hourly wage for new entries",
            allow_negative_numbers = true
        )]
        wage: Option<f64>,

        #[arg(
            long = "weekly-hours",
            help = "Estimated weekly hours target (recorded per ISO week)",
            allow_negative_numbers = true
        )]
        weekly_hours: Option<f64>,
    },

    /// Log a work session
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        /// Break duration in minutes
        #[arg(
            long = "break",
            help = "Break duration in minutes",
            allow_negative_numbers = true
        )]
        break_minutes: Option<i32>,

        /// Job name (defaults to the settings value)
        #[arg(long = "job", help = "Job name (default: settings value)")]
        job: Option<String>,

        /// Hourly wage (defaults to the settings value)
        #[arg(
            long = "wage",
            help = "Hourly wage (default: settings value)",
            allow_negative_numbers = true
        )]
        wage: Option<f64>,
    },

    /// Delete an entry by its list position
    Del {
        /// 1-based position as shown by `list`
        position: usize,
    },

    /// List logged entries
    List {
        #[arg(
            long = "order",
            value_enum,
            default_value = "asc",
            help = "Row order: asc (chronological) or desc (newest first)"
        )]
        order: SortOrder,
    },

    /// Weekly or monthly summaries with overtime
    Report {
        #[arg(long = "monthly", help = "Monthly totals instead of weekly")]
        monthly: bool,

        #[arg(
            long = "order",
            value_enum,
            help = "Row order (default: desc for tables, asc with --chart)"
        )]
        order: Option<SortOrder>,

        #[arg(
            long = "chart",
            conflicts_with = "monthly",
            help = "Render weekly hours as a bar chart against the target"
        )]
        chart: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        range: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
