//! Monetary amount extraction from receipt lines.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{LEADING_AMOUNT, TOTAL_AMOUNT_PATTERNS};
use super::FieldExtractor;
use crate::models::transaction::AMOUNT_CEILING;

/// Amount field extractor for total-like POS patterns.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    /// Best candidate on the line: the largest admissible total.
    fn extract(&self, line: &str) -> Option<Decimal> {
        self.extract_all(line).into_iter().max()
    }

    /// First numeric capture of each total pattern, admissible ones only,
    /// in pattern order.
    fn extract_all(&self, line: &str) -> Vec<Decimal> {
        let mut results = Vec::new();

        for pattern in TOTAL_AMOUNT_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                if let Ok(amount) = Decimal::from_str(&caps[1]) {
                    if is_admissible(amount) {
                        results.push(amount);
                    }
                }
            }
        }

        results
    }
}

/// Whether an amount candidate is plausible for a receipt. Values at or
/// above the ceiling are misread barcodes or reference numbers.
pub fn is_admissible(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount < Decimal::from(AMOUNT_CEILING)
}

/// Leading numeric run of a structured-line remainder, fraction preserved.
///
/// Returns the amount and the rest of the string. The remainder is matched
/// as-is: a leading space means no amount (the line then fails to qualify).
pub fn leading_amount(remaining: &str) -> Option<(Decimal, &str)> {
    let caps = LEADING_AMOUNT.captures(remaining)?;
    let matched = caps.get(1)?;
    let amount = Decimal::from_str(matched.as_str()).ok()?;
    if !is_admissible(amount) {
        return None;
    }
    Some((amount, &remaining[matched.end()..]))
}
