//! Exercise log entry definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input format accepted for calendar dates, e.g. "2024-01-01".
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Display format for calendar dates, e.g. "Mon Jan 01 2024".
const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// A single entry in a user's exercise log.
///
/// Entries are immutable once appended and live exactly as long as their
/// owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// What was done.
    pub description: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Calendar date of the exercise (no time component).
    pub date: NaiveDate,
}

impl Exercise {
    /// Creates a new exercise entry.
    pub fn new(description: impl Into<String>, duration: u32, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            duration,
            date,
        }
    }

    /// Renders the entry date in the fixed display form.
    pub fn date_display(&self) -> String {
        format_date(self.date)
    }
}

/// Parses a calendar date from its `YYYY-MM-DD` input form.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Formats a calendar date in the fixed display form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        // Surrounding whitespace is tolerated
        assert!(parse_date(" 2024-02-29 ").is_some());
    }

    #[test]
    fn test_parse_date_rejects_malformed_input() {
        assert!(parse_date("").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("01/01/2024").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("2023-02-29").is_none());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(date), "Mon Jan 01 2024");

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_date(date), "Thu Feb 29 2024");
    }

    #[test]
    fn test_exercise_date_display() {
        let exercise = Exercise::new("run", 30, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(exercise.date_display(), "Mon Jan 01 2024");
    }
}
