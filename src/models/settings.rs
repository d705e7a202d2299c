use serde::{Deserialize, Serialize};

/// Current user defaults, mutated wholesale via an explicit save action.
/// `estimated_weekly_hours` is additionally versioned per ISO week in the
/// target history whenever settings are saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_job_name: String,

    #[serde(default)]
    pub default_hourly_wage: f64,

    #[serde(default = "default_weekly_hours")]
    pub estimated_weekly_hours: f64,
}

fn default_weekly_hours() -> f64 {
    40.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_job_name: String::new(),
            default_hourly_wage: 0.0,
            estimated_weekly_hours: default_weekly_hours(),
        }
    }
}
