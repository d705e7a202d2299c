//! Entry validation. Gates every new entry before any derivation or
//! persistence happens.

use chrono::NaiveTime;

use crate::errors::ValidationError;

/// Validate a prospective entry. Checks run in a fixed order and stop at the
/// first failure:
///
/// 1. both times present
/// 2. end strictly after start (same-day only, no overnight shifts)
/// 3. break minutes non-negative
/// 4. hourly wage strictly positive
///
/// No side effects; an overlong break is NOT a validation failure (the
/// calculator clamps it to zero hours instead).
pub fn validate_entry(
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    break_minutes: i32,
    hourly_wage: f64,
) -> Result<(), ValidationError> {
    let (start, end) = match (start_time, end_time) {
        (Some(s), Some(e)) => (s, e),
        _ => return Err(ValidationError::MissingTime),
    };

    if end <= start {
        return Err(ValidationError::EndBeforeStart);
    }

    if break_minutes < 0 {
        return Err(ValidationError::NegativeBreak);
    }

    if hourly_wage <= 0.0 {
        return Err(ValidationError::NonPositiveWage);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn accepts_valid_entry() {
        assert_eq!(validate_entry(t(9, 0), t(17, 0), 30, 12.5), Ok(()));
    }

    #[test]
    fn accepts_boundary_wage() {
        assert_eq!(validate_entry(t(9, 0), t(17, 0), 0, 0.01), Ok(()));
    }

    #[test]
    fn rejects_missing_times_first() {
        assert_eq!(
            validate_entry(None, t(17, 0), -5, 0.0),
            Err(ValidationError::MissingTime)
        );
        assert_eq!(
            validate_entry(t(9, 0), None, 0, 10.0),
            Err(ValidationError::MissingTime)
        );
    }

    #[test]
    fn rejects_end_not_after_start() {
        assert_eq!(
            validate_entry(t(17, 0), t(9, 0), 0, 10.0),
            Err(ValidationError::EndBeforeStart)
        );
        assert_eq!(
            validate_entry(t(9, 0), t(9, 0), 0, 10.0),
            Err(ValidationError::EndBeforeStart)
        );
    }

    #[test]
    fn rejects_negative_break_before_wage() {
        assert_eq!(
            validate_entry(t(9, 0), t(17, 0), -1, 0.0),
            Err(ValidationError::NegativeBreak)
        );
    }

    #[test]
    fn rejects_non_positive_wage() {
        assert_eq!(
            validate_entry(t(9, 0), t(17, 0), 0, 0.0),
            Err(ValidationError::NonPositiveWage)
        );
        assert_eq!(
            validate_entry(t(9, 0), t(17, 0), 0, -3.0),
            Err(ValidationError::NonPositiveWage)
        );
    }
}
