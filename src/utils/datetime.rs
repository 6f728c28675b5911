use chrono::{Local, NaiveDateTime};

use crate::error::MatchError;

/// Layout used both to read and to print match times, e.g. `25-12-2024 20:30`.
pub const MATCH_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

pub fn parse_match_time(input: &str) -> Result<NaiveDateTime, MatchError> {
    NaiveDateTime::parse_from_str(input.trim(), MATCH_TIME_FORMAT)
        .map_err(|_| MatchError::InvalidDateTimeFormat)
}

pub fn format_match_time(dt: &NaiveDateTime) -> String {
    dt.format(MATCH_TIME_FORMAT).to_string()
}

/// Local wall-clock time, the reference for kickoff times.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_match_time() {
        let dt = parse_match_time(" 05-01-2025 09:05 ").unwrap();
        assert_eq!((dt.day(), dt.month(), dt.year()), (5, 1, 2025));
        assert_eq!((dt.hour(), dt.minute()), (9, 5));
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(parse_match_time("2025-01-05 09:05").is_err());
        assert!(parse_match_time("05-01-2025").is_err());
        assert!(parse_match_time("05-01-2025 25:00").is_err());
        assert!(parse_match_time("").is_err());
    }

    #[test]
    fn test_format_round_trips_layout() {
        let dt = parse_match_time("25-12-2024 20:30").unwrap();
        assert_eq!(format_match_time(&dt), "25-12-2024 20:30");
    }
}
