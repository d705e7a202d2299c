//! The aggregation engine: weekly and monthly summaries over the full entry
//! log, plus per-week overtime attribution against the target history.
//!
//! Every pass is a pure computation over a snapshot of the entries; nothing
//! is cached between calls. Per-entry hours/earnings arrive already rounded
//! to 2 decimals, so each sum gets one final 2-decimal round and the addends
//! are never re-rounded.

use std::collections::BTreeMap;

use crate::core::targets::TargetHistory;
use crate::models::entry::TimeEntry;
use crate::models::summary::{MonthlySummary, SortOrder, WeeklySummary};
use crate::utils::formatting::round2;

/// Group entries by ISO (year, week) and sum hours/earnings.
///
/// Rows come back in ascending (year, week) order, one per week that has at
/// least one entry; weeks without entries are not imputed. Targets and
/// overtime are left at zero until [`attribute_overtime`] joins them in.
pub fn summarize_weekly(entries: &[TimeEntry]) -> Vec<WeeklySummary> {
    let mut groups: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();

    for entry in entries {
        let acc = groups.entry(entry.iso_week()).or_insert((0.0, 0.0));
        acc.0 += entry.hours_worked;
        acc.1 += entry.earnings;
    }

    groups
        .into_iter()
        .map(|((year, week), (hours, earnings))| WeeklySummary {
            year,
            week,
            total_hours: round2(hours),
            total_earnings: round2(earnings),
            estimated_hours: 0.0,
            overtime: 0.0,
        })
        .collect()
}

/// Join weekly rows against the target history.
///
/// Each week gets the target recorded for it, or `current_default` when the
/// week was never recorded; overtime is the excess over that target, floored
/// at zero.
pub fn attribute_overtime(
    rows: Vec<WeeklySummary>,
    history: &TargetHistory,
    current_default: f64,
) -> Vec<WeeklySummary> {
    rows.into_iter()
        .map(|row| {
            let estimated = history.lookup(row.year, row.week, current_default);
            let overtime = round2((row.total_hours - estimated).max(0.0));
            WeeklySummary {
                estimated_hours: estimated,
                overtime,
                ..row
            }
        })
        .collect()
}

/// Group entries by calendar month ("YYYY-MM") and sum hours/earnings.
/// Ascending month order, no gap-filling for empty months.
pub fn summarize_monthly(entries: &[TimeEntry]) -> Vec<MonthlySummary> {
    let mut groups: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for entry in entries {
        let acc = groups.entry(entry.month_key()).or_insert((0.0, 0.0));
        acc.0 += entry.hours_worked;
        acc.1 += entry.earnings;
    }

    groups
        .into_iter()
        .map(|(month, (hours, earnings))| MonthlySummary {
            month,
            total_hours: round2(hours),
            total_earnings: round2(earnings),
        })
        .collect()
}

/// Reorder weekly rows in place. Rows are produced ascending, so descending
/// is a reverse, not a recomputation.
pub fn order_weekly(rows: &mut [WeeklySummary], order: SortOrder) {
    rows.sort_by_key(|r| (r.year, r.week));
    if order == SortOrder::Desc {
        rows.reverse();
    }
}

/// Reorder monthly rows in place.
pub fn order_monthly(rows: &mut [MonthlySummary], order: SortOrder) {
    rows.sort_by(|a, b| a.month.cmp(&b.month));
    if order == SortOrder::Desc {
        rows.reverse();
    }
}
