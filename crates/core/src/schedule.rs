//! Celebration schedule constants and validation.
//!
//! Celebrations (masses, confessions, adoration) are grouped by day of week;
//! the day is the partition key for their display ordering.

use crate::error::CoreError;

/// Day-of-week display labels, indexed 0 = Sunday through 6 = Saturday.
pub const DAY_LABELS: &[&str] = &[
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Validate a `day_of_week` value (0 = Sunday .. 6 = Saturday).
pub fn validate_day_of_week(day: i16) -> Result<(), CoreError> {
    if (0..=6).contains(&day) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "day_of_week must be between 0 (Sunday) and 6 (Saturday), got {day}"
        )))
    }
}

/// Label for a valid day index.
pub fn day_label(day: i16) -> Option<&'static str> {
    usize::try_from(day).ok().and_then(|i| DAY_LABELS.get(i)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_days_pass() {
        for day in 0..=6 {
            assert!(validate_day_of_week(day).is_ok());
        }
    }

    #[test]
    fn out_of_range_days_reject() {
        assert!(validate_day_of_week(-1).is_err());
        assert!(validate_day_of_week(7).is_err());
    }

    #[test]
    fn labels_cover_the_week() {
        assert_eq!(day_label(0), Some("Sunday"));
        assert_eq!(day_label(6), Some("Saturday"));
        assert_eq!(day_label(7), None);
        assert_eq!(day_label(-1), None);
    }
}
