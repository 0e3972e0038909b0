//! Time and timestamp utilities

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a calendar date (`YYYY-MM-DD`). Anything malformed yields `None`
/// so a bad date degrades to "no constraint" instead of failing the query.
pub fn parse_date_lenient(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// 00:00:00.000 of the given day, UTC
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// 23:59:59.999 of the given day, UTC; the inclusive upper bound a
/// `dateTo` filter extends to
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc()
}

/// en-US locale-style rendering (`6/1/2025, 12:00:00 PM`), the format the
/// digest and share texts have always used
pub fn format_locale(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_lenient() {
        assert_eq!(
            parse_date_lenient("2025-06-01"),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(parse_date_lenient(" 2025-06-01 "), NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(parse_date_lenient("06/01/2025"), None);
        assert_eq!(parse_date_lenient("not-a-date"), None);
        assert_eq!(parse_date_lenient(""), None);
    }

    #[test]
    fn test_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(
            start_of_day(date),
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
        let end = end_of_day(date);
        assert!(end > Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap());
        assert!(end < Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_format_locale() {
        let noon = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_locale(&noon), "6/1/2025, 12:00:00 PM");
        let morning = Utc.with_ymd_and_hms(2025, 12, 24, 9, 5, 7).unwrap();
        assert_eq!(format_locale(&morning), "12/24/2025, 9:05:07 AM");
        let midnight = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(format_locale(&midnight), "6/1/2025, 12:00:00 AM");
    }
}
