use clap::ValueEnum;
use serde::Serialize;

/// One row of the weekly report: totals for an ISO week plus the target
/// that applied to it and the resulting overtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub year: i32,
    pub week: u32,
    pub total_hours: f64,
    pub total_earnings: f64,
    pub estimated_hours: f64,
    pub overtime: f64,
}

impl WeeklySummary {
    /// Key into the target history, "{iso_year}-{iso_week:02}".
    pub fn week_id(&self) -> String {
        crate::core::targets::week_id(self.year, self.week)
    }
}

/// One row of the monthly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String, // "YYYY-MM"
    pub total_hours: f64,
    pub total_earnings: f64,
}

/// Requested row order for reports: chronological for charting,
/// newest-first for tabular display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}
