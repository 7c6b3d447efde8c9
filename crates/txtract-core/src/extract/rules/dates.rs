//! Date extraction from receipt lines.
//!
//! Numeric forms are disambiguated by segment width: a 4-digit first
//! segment means year-first, anything else is read day-first. Candidates
//! that do not form a real calendar date are silently skipped.

use chrono::NaiveDate;

use super::patterns::{
    DATE_DMY, DATE_DMY_ANYWHERE, DATE_DMY_TRAILING, DATE_MONTH_NAME, DATE_YMD,
};
use super::FieldExtractor;

/// Date field extractor for POS receipt lines.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, line: &str) -> Option<NaiveDate> {
        self.extract_all(line).into_iter().next()
    }

    /// Valid candidates in format order: day-first numeric, year-first
    /// numeric, then `D MMM YYYY`.
    fn extract_all(&self, line: &str) -> Vec<NaiveDate> {
        let mut results = Vec::new();

        // DD/MM/YYYY or DD-MM-YYYY
        if let Some(caps) = DATE_DMY.captures(line) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                results.push(date);
            }
        }

        // YYYY/MM/DD or YYYY-MM-DD
        if let Some(caps) = DATE_YMD.captures(line) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if !results.contains(&date) {
                    results.push(date);
                }
            }
        }

        // "29 Jul 2025"
        if let Some(caps) = DATE_MONTH_NAME.captures(line) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month = month_abbr_to_number(&caps[2]);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if !results.contains(&date) {
                    results.push(date);
                }
            }
        }

        results
    }
}

/// Strip a `DD-MM-YYYY` token anchored at the very end of a structured
/// line. Returns the (possibly invalid, hence `Option`) date and the line
/// with the token removed. The token is stripped whenever the pattern
/// matches; calendar validation only decides whether a date is reported.
pub fn take_trailing_dmy_date(remaining: &str) -> Option<(Option<NaiveDate>, &str)> {
    let caps = DATE_DMY_TRAILING.captures(remaining)?;
    let full = caps.get(0)?;

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    let date = NaiveDate::from_ymd_opt(year, month, day);
    Some((date, &remaining[..full.start()]))
}

/// Scan a whole structured line for any `DD-MM-YYYY` substring.
pub fn any_dmy_date(line: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY_ANYWHERE.captures(line)?;

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_abbr_to_number(abbr: &str) -> u32 {
    match abbr.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_numeric() {
        let extractor = DateExtractor::new();
        assert_eq!(
            extractor.extract("Date: 29-07-2025"),
            NaiveDate::from_ymd_opt(2025, 7, 29)
        );
        assert_eq!(
            extractor.extract("29/07/2025 14:21"),
            NaiveDate::from_ymd_opt(2025, 7, 29)
        );
    }

    #[test]
    fn test_year_first_numeric() {
        let extractor = DateExtractor::new();
        assert_eq!(
            extractor.extract("2025-07-29"),
            NaiveDate::from_ymd_opt(2025, 7, 29)
        );
        assert_eq!(
            extractor.extract("2025/7/9"),
            NaiveDate::from_ymd_opt(2025, 7, 9)
        );
    }

    #[test]
    fn test_month_name_form() {
        let extractor = DateExtractor::new();
        assert_eq!(
            extractor.extract("29 Jul 2025"),
            NaiveDate::from_ymd_opt(2025, 7, 29)
        );
        assert_eq!(
            extractor.extract("1 jan 2024"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_invalid_calendar_date_skipped() {
        let extractor = DateExtractor::new();
        assert_eq!(extractor.extract("31-02-2025"), None);
        assert_eq!(extractor.extract("2025-13-05"), None);
        assert_eq!(extractor.extract("32 Jan 2025"), None);
    }

    #[test]
    fn test_trailing_token_is_stripped() {
        let (date, rest) = take_trailing_dmy_date("250Groceries29-07-2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 29));
        assert_eq!(rest, "250Groceries");
    }

    #[test]
    fn test_trailing_token_stripped_even_when_invalid() {
        let (date, rest) = take_trailing_dmy_date("250Groceries99-99-2025").unwrap();
        assert_eq!(date, None);
        assert_eq!(rest, "250Groceries");
    }

    #[test]
    fn test_trailing_token_must_be_anchored() {
        assert!(take_trailing_dmy_date("29-07-2025 via UPI").is_none());
    }

    #[test]
    fn test_mid_line_scan() {
        assert_eq!(
            any_dmy_date("paid 29-07-2025 via UPI"),
            NaiveDate::from_ymd_opt(2025, 7, 29)
        );
        assert_eq!(any_dmy_date("no date here"), None);
    }
}
