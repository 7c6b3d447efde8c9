//! Category classification rules.
//!
//! Two independent rule sets: merchant-keyword rules for free-form POS
//! lines, and free-token normalization for structured-line category tokens.
//! Both are ordered tables evaluated top to bottom, first match wins.

use crate::models::transaction::{
    TransactionKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES, STANDARD_CATEGORIES,
};

/// Merchant keyword groups mapped to categories, in priority order.
/// Supermarket-chain names ("bazaar") count as grocery keywords.
const MERCHANT_RULES: &[(&[&str], &str)] = &[
    (
        &["restaurant", "cafe", "food", "dining", "kitchen", "hotel"],
        "Food & Dining",
    ),
    (
        &["grocery", "supermarket", "mart", "store", "bazaar"],
        "Groceries",
    ),
    (
        &["pharmacy", "medical", "health", "clinic"],
        "Healthcare",
    ),
    (
        &["fuel", "petrol", "gas", "station"],
        "Transportation",
    ),
    (&["clothing", "fashion", "apparel"], "Shopping"),
    (&["electronics", "mobile", "computer"], "Electronics"),
];

/// Substring families normalizing a structured category token. The
/// resolved category may depend on the transaction kind.
type Resolver = fn(TransactionKind) -> &'static str;

const TOKEN_RULES: &[(&[&str], Resolver)] = &[
    (&["grocery", "groceries"], |_| "Groceries"),
    (&["transport", "auto", "taxi"], |_| "Transportation"),
    (&["rent", "housing"], |_| "Rent/EMI"),
    (&["food", "restaurant", "dining"], |_| "Food & Dining"),
    (
        &["utility", "utilities", "electricity", "water"],
        |_| "Bills & Utilities",
    ),
    (&["health", "medical", "medicine"], |_| "Healthcare"),
    (&["subscription", "netflix", "spotify"], |_| "Entertainment"),
    (&["salary", "income"], |kind| match kind {
        TransactionKind::Income => "Salary",
        TransactionKind::Expense => "Other",
    }),
    (&["gift"], |kind| match kind {
        TransactionKind::Income => "Other Income",
        TransactionKind::Expense => "Other",
    }),
    (&["freelance", "freelancing"], |kind| match kind {
        TransactionKind::Income => "Freelance",
        TransactionKind::Expense => "Other",
    }),
];

/// Classify a free-form POS line by merchant keywords. First matching
/// group wins; the caller's accumulator lets later lines overwrite.
pub fn merchant_category(line: &str) -> Option<&'static str> {
    let line = line.to_lowercase();

    for &(keywords, category) in MERCHANT_RULES {
        if keywords.iter().any(|k| line.contains(k)) {
            return Some(category);
        }
    }

    None
}

/// Normalize a structured-line category token into a canonical category.
///
/// A token that already spells a canonical category is a fixed point.
/// Unmatched tokens are kept literally with the first letter capitalized.
pub fn normalize_category(token: &str, kind: TransactionKind) -> String {
    let lower = token.to_lowercase();

    for canonical in EXPENSE_CATEGORIES.iter().chain(INCOME_CATEGORIES.iter()) {
        if lower == canonical.to_lowercase() {
            return canonical.to_string();
        }
    }

    for &(keywords, resolve) in TOKEN_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return resolve(kind).to_string();
        }
    }

    capitalize_first(token)
}

/// Fallback for lines with no category token: scan the line and its
/// immediate successor for any standard category name.
pub fn scan_standard_categories(line: &str, next_line: Option<&str>) -> Option<&'static str> {
    let line = line.to_lowercase();
    let next = next_line.map(str::to_lowercase);

    for category in STANDARD_CATEGORIES {
        let needle = category.to_lowercase();
        if line.contains(&needle) || next.as_deref().is_some_and(|n| n.contains(&needle)) {
            return Some(category);
        }
    }

    None
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
