//! Description extraction.

use crate::models::transaction::{
    DESCRIPTION_MAX_LEN, EXPENSE_CATEGORIES, INCOME_CATEGORIES, PAYMENT_METHODS,
    PAYMENT_METHOD_OTHER,
};

use super::patterns::{DATE_TOKEN, NUMERIC_TOKEN, POS_DESCRIPTION_MARKERS};

/// Whether a POS line qualifies as a merchant/item description: short but
/// not trivial, and free of digit/currency/date/time markers.
pub fn pos_description_candidate(line: &str) -> bool {
    let len = line.chars().count();
    len > 3 && len < 50 && !POS_DESCRIPTION_MARKERS.is_match(line)
}

/// Build a structured-line description from the tokens left over once
/// every other field has claimed its own.
///
/// Tokens containing a canonical category or payment-method name are
/// dropped by substring containment, which can over-delete ordinary words;
/// that imprecision is part of the extraction contract.
pub fn structured_description(line: &str) -> String {
    let kept: Vec<&str> = line
        .split_whitespace()
        .filter(|word| {
            let lower = word.to_lowercase();
            !lower.contains("expense")
                && !lower.contains("income")
                && !NUMERIC_TOKEN.is_match(word)
                && !DATE_TOKEN.is_match(word)
                && !EXPENSE_CATEGORIES
                    .iter()
                    .chain(INCOME_CATEGORIES.iter())
                    .any(|c| lower.contains(&c.to_lowercase()))
                && !PAYMENT_METHODS
                    .iter()
                    .chain(std::iter::once(&PAYMENT_METHOD_OTHER))
                    .any(|m| lower.contains(&m.to_lowercase()))
        })
        .collect();

    kept.join(" ").chars().take(DESCRIPTION_MAX_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_candidate_accepts_merchant_name() {
        assert!(pos_description_candidate("Big Bazaar"));
        assert!(pos_description_candidate("Corner Kitchen"));
    }

    #[test]
    fn test_pos_candidate_rejects_marked_lines() {
        assert!(!pos_description_candidate("Total: ₹450.00"));
        assert!(!pos_description_candidate("29-07-2025"));
        assert!(!pos_description_candidate("Time 14:21"));
        assert!(!pos_description_candidate("GSTIN 2941"));
    }

    #[test]
    fn test_pos_candidate_rejects_by_length() {
        assert!(!pos_description_candidate("abc"));
        assert!(!pos_description_candidate(&"x".repeat(50)));
        assert!(pos_description_candidate(&"x".repeat(49)));
    }

    #[test]
    fn test_structured_description_excludes_claimed_tokens() {
        assert_eq!(
            structured_description("Expense 250 Lunch at canteen 29-07-2025"),
            "Lunch at canteen"
        );
    }

    #[test]
    fn test_structured_description_drops_category_and_payment_words() {
        // "Groceries" is a canonical category, "UPI" a payment method
        assert_eq!(
            structured_description("paid Groceries via UPI from stall"),
            "paid via from stall"
        );
    }

    #[test]
    fn test_structured_description_concatenated_line_yields_empty() {
        assert_eq!(structured_description("Expense250Groceries29-07-2025"), "");
    }

    #[test]
    fn test_structured_description_truncated() {
        let line = format!("Expense 250 {}", "word ".repeat(40));
        let description = structured_description(&line);
        assert_eq!(description.chars().count(), DESCRIPTION_MAX_LEN);
    }
}
