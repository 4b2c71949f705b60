//! Calendar validation and display formatting for HL7 timestamps.

use chrono::NaiveDate;

/// A validated encounter date in the two renderings the listing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormattedDate {
    /// ISO `YYYY-MM-DD`.
    pub iso: String,
    /// Long-form English, e.g. `"June 15, 2023"`.
    pub long: String,
}

/// Format the first 8 digits of an HL7 timestamp (`YYYYMMDD[HHMMSS]...`) as a
/// calendar date. Returns `None` when the prefix is shorter than 8 digits or
/// does not name a real date.
pub(crate) fn format_timestamp(timestamp: &str) -> Option<FormattedDate> {
    let digits: Vec<u8> = timestamp
        .bytes()
        .take_while(u8::is_ascii_digit)
        .take(8)
        .collect();
    if digits.len() < 8 {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> u32 {
        digits[range].iter().fold(0, |n, b| n * 10 + u32::from(b - b'0'))
    };
    let date = NaiveDate::from_ymd_opt(field(0..4) as i32, field(4..6), field(6..8))?;

    Some(FormattedDate {
        iso: date.format("%Y-%m-%d").to_string(),
        long: date.format("%B %-d, %Y").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_timestamp() {
        let f = format_timestamp("20230615120000").unwrap();
        assert_eq!(f.iso, "2023-06-15");
        assert_eq!(f.long, "June 15, 2023");
    }

    #[test]
    fn date_only() {
        let f = format_timestamp("20220304").unwrap();
        assert_eq!(f.iso, "2022-03-04");
        assert_eq!(f.long, "March 4, 2022");
    }

    #[test]
    fn single_digit_day_is_unpadded() {
        assert_eq!(format_timestamp("20240101").unwrap().long, "January 1, 2024");
    }

    #[test]
    fn trailing_timezone_is_ignored() {
        assert_eq!(format_timestamp("20230615-0500").unwrap().iso, "2023-06-15");
    }

    #[test]
    fn invalid_calendar_date_is_none() {
        assert_eq!(format_timestamp("20231301"), None); // month 13
        assert_eq!(format_timestamp("20230230"), None); // Feb 30
    }

    #[test]
    fn short_or_non_numeric_input_is_none() {
        assert_eq!(format_timestamp("2023"), None);
        assert_eq!(format_timestamp("not-a-date"), None);
        assert_eq!(format_timestamp(""), None);
    }

    #[test]
    fn leap_day_is_accepted() {
        assert_eq!(format_timestamp("20240229").unwrap().iso, "2024-02-29");
    }
}
