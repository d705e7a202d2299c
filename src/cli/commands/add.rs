use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::validate_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::store;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::{format_hours, format_money};
use crate::utils::time::parse_optional_time;

/// Log a work session: validate, derive hours/earnings, append.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
        job,
        wage,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;
        let break_val = (*break_minutes).unwrap_or(0);

        let mut store = store::open(cfg)?;
        let settings = store.load_settings()?;

        let job_name = job.clone().unwrap_or(settings.default_job_name);
        let hourly_wage = (*wage).unwrap_or(settings.default_hourly_wage);

        // Validation stops processing before anything is persisted.
        validate_entry(start_parsed, end_parsed, break_val, hourly_wage)?;

        // validate_entry guarantees both times are present here.
        let (start_time, end_time) = match (start_parsed, end_parsed) {
            (Some(s), Some(e)) => (s, e),
            _ => unreachable!("validated entry always has both times"),
        };

        let entry = TimeEntry::build(&job_name, d, start_time, end_time, break_val, hourly_wage);
        store.append_entry(&entry)?;

        success(format!(
            "Logged {} on {}: worked hours {}, earnings {}.",
            if job_name.is_empty() {
                "session"
            } else {
                job_name.as_str()
            },
            entry.date_str(),
            format_hours(entry.hours_worked),
            format_money(entry.earnings, &cfg.currency),
        ));
    }

    Ok(())
}
