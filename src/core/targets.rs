//! Weekly target history: a versioned mapping from ISO week to the
//! estimated-weekly-hours value that applied to that week.

use std::collections::BTreeMap;

/// Key into the history, "{iso_year}-{iso_week:02}".
pub fn week_id(year: i32, week: u32) -> String {
    format!("{year}-{week:02}")
}

/// Week-keyed history of the weekly-hours target.
///
/// Loaded wholesale from the store at the start of an aggregation pass.
/// Keys are stamped with the ISO week of the settings *save* date, so a
/// week's recorded target is "whatever the target was when settings were
/// last saved during that week". Weeks never stamped fall back to the
/// caller-supplied current default at lookup time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetHistory {
    targets: BTreeMap<String, f64>,
}

impl TargetHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(targets: BTreeMap<String, f64>) -> Self {
        Self { targets }
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Recorded target for the given ISO week, or `current_default` when
    /// the week was never recorded.
    pub fn lookup(&self, year: i32, week: u32, current_default: f64) -> f64 {
        self.targets
            .get(&week_id(year, week))
            .copied()
            .unwrap_or(current_default)
    }

    /// Upsert one entry; a later record for the same week wins outright.
    pub fn record(&mut self, week_id: &str, value: f64) {
        self.targets.insert(week_id.to_string(), value);
    }
}
