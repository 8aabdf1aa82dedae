//! Error types for the calendar core.

use crate::data::CalendarDate;
use crate::selection::SelectionMode;

/// Errors returned by fallible calendar operations.
///
/// Everything except [`CalendarError::InvalidDate`] is a configuration error
/// raised by [`crate::view::CalendarView::setup`], which leaves the view
/// untouched when it fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the minimum bound lies after the maximum bound.
    #[error("invalid configuration: min date {min} is after max date {max}")]
    InvalidBounds {
        /// The requested lower bound.
        min: CalendarDate,
        /// The requested upper bound.
        max: CalendarDate,
    },

    /// Returned when the first day of week is not an ISO weekday number.
    #[error("invalid configuration: first day of week must be 1 (Monday) to 7 (Sunday), got {value}")]
    InvalidFirstDayOfWeek {
        /// The rejected weekday number.
        value: u8,
    },

    /// Returned when the initial selection does not fit the selection mode.
    #[error("invalid configuration: {mode} selection cannot start with {count} selected date(s)")]
    SelectionCountMismatch {
        /// The requested selection mode.
        mode: SelectionMode,
        /// Number of dates supplied.
        count: usize,
    },

    /// Returned when a date string is not a real `YYYY-MM-DD` day.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The unparseable input.
        input: String,
    },
}

impl CalendarError {
    /// Returns true for errors caused by bad setup arguments.
    pub fn is_invalid_configuration(&self) -> bool {
        !matches!(self, CalendarError::InvalidDate { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn test_invalid_bounds_message() {
        let e = CalendarError::InvalidBounds {
            min: d(2024, 12, 31),
            max: d(2024, 1, 1),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: min date 2024-12-31 is after max date 2024-01-01"
        );
        assert!(e.is_invalid_configuration());
    }

    #[test]
    fn test_invalid_first_day_message() {
        let e = CalendarError::InvalidFirstDayOfWeek { value: 9 };
        assert!(e.to_string().contains("got 9"));
        assert!(e.is_invalid_configuration());
    }

    #[test]
    fn test_selection_count_message() {
        let e = CalendarError::SelectionCountMismatch {
            mode: SelectionMode::Range,
            count: 1,
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: range selection cannot start with 1 selected date(s)"
        );
    }

    #[test]
    fn test_invalid_date_is_not_configuration() {
        let e = CalendarError::InvalidDate {
            input: "2024-02-30".to_string(),
        };
        assert!(!e.is_invalid_configuration());
        assert!(e.to_string().contains("2024-02-30"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
