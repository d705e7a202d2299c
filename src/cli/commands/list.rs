use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::summary::SortOrder;
use crate::store;
use crate::ui::messages::info;
use crate::utils::formatting::{format_hours, format_money};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

/// List logged entries with their positions (the handles `del` takes).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { order } = cmd {
        let mut store = store::open(cfg)?;
        let entries = store.load_entries()?;

        if entries.is_empty() {
            info("No entries yet. Add some time entries to see them here!");
            return Ok(());
        }

        let mut rows: Vec<(usize, &crate::models::entry::TimeEntry)> =
            entries.iter().enumerate().map(|(i, e)| (i + 1, e)).collect();
        if *order == SortOrder::Desc {
            rows.reverse();
        }

        let mut table = Table::new(vec![
            Column::right("Pos"),
            Column::left("Date"),
            Column::left("Job"),
            Column::right("Start"),
            Column::right("End"),
            Column::right("Break"),
            Column::right("Hours"),
            Column::right("Earnings"),
        ]);

        for (pos, e) in &rows {
            table.add_row(vec![
                pos.to_string(),
                e.date_str(),
                e.job_name.clone(),
                format_time(e.start_time),
                format_time(e.end_time),
                e.break_minutes.to_string(),
                format_hours(e.hours_worked),
                format_money(e.earnings, &cfg.currency),
            ]);
        }

        println!("📅 Logged entries:\n");
        print!("{}", table.render());
        println!("\n{} entries.", entries.len());
    }

    Ok(())
}
