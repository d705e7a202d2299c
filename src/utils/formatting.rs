//! Formatting utilities used for CLI and export outputs.

/// Round to 2 decimal places. All stored hours/earnings go through this once
/// at entry creation; summaries apply it once more over the accumulated sum.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}
