use serde::Serialize;

use crate::models::entry::TimeEntry;

/// Flat row for export. `position` is the 1-based load-order index shown by
/// `list` — the same handle `del` takes.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub position: usize,
    pub job_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: i32,
    pub hours_worked: f64,
    pub earnings: f64,
}

impl EntryExport {
    pub fn from_entry(position: usize, entry: &TimeEntry) -> Self {
        Self {
            position,
            job_name: entry.job_name.clone(),
            date: entry.date_str(),
            start_time: entry.start_time.format("%H:%M").to_string(),
            end_time: entry.end_time.format("%H:%M").to_string(),
            break_minutes: entry.break_minutes,
            hours_worked: entry.hours_worked,
            earnings: entry.earnings,
        }
    }
}

/// Header row for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "position",
        "job_name",
        "date",
        "start_time",
        "end_time",
        "break_minutes",
        "hours_worked",
        "earnings",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.position.to_string(),
        e.job_name.clone(),
        e.date.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.break_minutes.to_string(),
        format!("{:.2}", e.hours_worked),
        format!("{:.2}", e.earnings),
    ]
}
