use chrono::NaiveTime;

use crate::utils::time::minutes_between;

/// Worked hours for a same-day wall-clock interval, minus the break.
///
/// Clamped at zero: a break longer than the raw interval silently zeroes
/// the entry rather than erroring. Pure, no I/O.
pub fn daily_hours(start: NaiveTime, end: NaiveTime, break_minutes: i32) -> f64 {
    let raw_minutes = minutes_between(start, end);
    let worked = raw_minutes as f64 / 60.0 - break_minutes as f64 / 60.0;
    worked.max(0.0)
}
