//! Date helpers: parsing, ISO week / month keys, and the period grammar
//! shared by `export --range`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// ISO (year, week) of a date. The ISO year may differ from the calendar
/// year around January 1st.
pub fn iso_week_of(date: NaiveDate) -> (i32, u32) {
    let iw = date.iso_week();
    (iw.year(), iw.week())
}

/// Calendar month key, "YYYY-MM".
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Resolve a single period expression to inclusive date bounds.
///
/// Supported: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        let last = last_day_of_month(first.year(), first.month());
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Parse a range expression into inclusive date bounds.
///
/// Accepts a single period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a
/// `start:end` pair of periods in the same grammar.
pub fn parse_range(range: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start, end)) = range.split_once(':') {
        let (s, _) = period_bounds(start)?;
        let (_, e) = period_bounds(end)?;
        if e < s {
            return Err(AppError::InvalidPeriod(range.to_string()));
        }
        return Ok((s, e));
    }

    period_bounds(range)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
