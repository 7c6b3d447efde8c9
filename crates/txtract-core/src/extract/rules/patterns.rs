//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Total-like amount patterns for POS receipts, in priority order.
    // Each has exactly one numeric capture group.
    pub static ref TOTAL_AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)total[:\s]*₹?\s*(\d+(?:\.\d{2})?)").unwrap(),
        Regex::new(r"(?i)amount[:\s]*₹?\s*(\d+(?:\.\d{2})?)").unwrap(),
        Regex::new(r"(?i)grand\s*total[:\s]*₹?\s*(\d+(?:\.\d{2})?)").unwrap(),
        Regex::new(r"(?i)net\s*amount[:\s]*₹?\s*(\d+(?:\.\d{2})?)").unwrap(),
        Regex::new(r"(?i)₹\s*(\d+(?:\.\d{2})?)\s*total").unwrap(),
        Regex::new(r"₹\s*(\d+(?:\.\d{2})?)$").unwrap(),
    ];

    // Date patterns
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[-/](\d{1,2})[-/](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+([A-Za-z]{3})\s+(\d{4})\b"
    ).unwrap();

    // Structured-line date tokens (always DD-MM-YYYY)
    pub static ref DATE_DMY_TRAILING: Regex = Regex::new(
        r"(\d{2})-(\d{2})-(\d{4})$"
    ).unwrap();

    pub static ref DATE_DMY_ANYWHERE: Regex = Regex::new(
        r"(\d{2})-(\d{2})-(\d{4})"
    ).unwrap();

    // Structured-line tokens
    pub static ref KIND_PREFIX: Regex = Regex::new(
        r"(?i)^(expense|income)"
    ).unwrap();

    pub static ref LEADING_AMOUNT: Regex = Regex::new(
        r"^(\d+(?:\.\d{1,2})?)"
    ).unwrap();

    // Description token filters
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"^\d+([,.]\d+)*$"
    ).unwrap();

    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"^\d{2}-\d{2}-\d{4}$"
    ).unwrap();

    // Lines carrying any of these are never POS description candidates.
    pub static ref POS_DESCRIPTION_MARKERS: Regex = Regex::new(
        r"(?i)total|amount|date|time|₹|\d{4}"
    ).unwrap();
}
