use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::formatting::round2;

/// One logged work session.
///
/// `hours_worked` and `earnings` are derived once at creation, rounded to
/// two decimals, and stored as-is; aggregation never recomputes them from
/// the raw times. Serde field names are the canonical store/export column
/// headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "Job Name")]
    pub job_name: String,

    #[serde(rename = "Date")]
    pub date: NaiveDate, // "YYYY-MM-DD"

    #[serde(rename = "Start time", with = "hhmm")]
    pub start_time: NaiveTime, // "HH:MM"

    #[serde(rename = "End time", with = "hhmm")]
    pub end_time: NaiveTime, // "HH:MM"

    #[serde(rename = "Break minutes")]
    pub break_minutes: i32,

    #[serde(rename = "Hours worked")]
    pub hours_worked: f64,

    #[serde(rename = "Earnings")]
    pub earnings: f64,
}

impl TimeEntry {
    /// Build an entry from validated inputs, deriving hours and earnings.
    pub fn build(
        job_name: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_minutes: i32,
        hourly_wage: f64,
    ) -> Self {
        let hours = crate::core::calculator::daily_hours(start_time, end_time, break_minutes);
        let hours_worked = round2(hours);
        let earnings = crate::core::calculator::earnings(hours_worked, hourly_wage);

        Self {
            job_name: job_name.to_string(),
            date,
            start_time,
            end_time,
            break_minutes,
            hours_worked,
            earnings,
        }
    }

    /// ISO (year, week) the entry falls in.
    pub fn iso_week(&self) -> (i32, u32) {
        let iw = self.date.iso_week();
        (iw.year(), iw.week())
    }

    /// Calendar month key, "YYYY-MM".
    pub fn month_key(&self) -> String {
        crate::utils::date::month_key(self.date)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Serialize/deserialize NaiveTime as "HH:MM" (the store column format).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn build_derives_rounded_hours_and_earnings() {
        let e = TimeEntry::build(
            "acme",
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            t(9, 0),
            t(17, 0),
            30,
            20.0,
        );
        assert_eq!(e.hours_worked, 7.5);
        assert_eq!(e.earnings, 150.0);
    }

    #[test]
    fn iso_week_uses_iso_year() {
        let e = TimeEntry::build(
            "acme",
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            t(9, 0),
            t(10, 0),
            0,
            10.0,
        );
        assert_eq!(e.iso_week(), (2025, 1));
    }
}
