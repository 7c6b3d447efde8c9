//! Transaction draft models produced by the extraction pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of document the caller recovered the text from.
///
/// This is the caller-supplied discriminator that selects the parsing
/// strategy; the core never inspects files to guess it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Free-form point-of-sale receipt text (typically OCR output).
    PosReceipt,
    /// Semi-structured export where each line encodes one transaction.
    StructuredExport,
}

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Canonical expense categories.
pub const EXPENSE_CATEGORIES: [&str; 13] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Groceries",
    "Rent/EMI",
    "Insurance",
    "Fitness",
    "Other",
];

/// Canonical income categories.
pub const INCOME_CATEGORIES: [&str; 3] = ["Salary", "Freelance", "Other Income"];

/// Categories the structured strategy scans for when a line carries no
/// usable category token of its own.
pub const STANDARD_CATEGORIES: [&str; 15] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Groceries",
    "Rent/EMI",
    "Insurance",
    "Fitness",
    "Salary",
    "Freelance",
    "Investment",
];

/// Payment methods the detector scans for. "Other" is the default and is
/// never scanned.
pub const PAYMENT_METHODS: [&str; 5] =
    ["UPI", "Credit Card", "Debit Card", "Bank Transfer", "Cash"];

/// Default payment method when nothing matches.
pub const PAYMENT_METHOD_OTHER: &str = "Other";

/// Amounts at or above this are treated as OCR noise (misread barcodes,
/// reference numbers) and rejected.
pub const AMOUNT_CEILING: u32 = 100_000;

/// Maximum description length carried on a draft.
pub const DESCRIPTION_MAX_LEN: usize = 100;

/// A structured transaction recovered from receipt text, ready for
/// persistence by the caller. Field names on the wire match the storage
/// collaborator's contract (camelCase, `paymentMethod`).
///
/// Drafts are accumulated mutably during a single extraction pass, frozen
/// at emission, and never merged or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    /// Income or expense. Always resolved before emission.
    pub kind: TransactionKind,

    /// Positive amount, below the OCR-noise ceiling.
    pub amount: Decimal,

    /// Transaction date; the extraction run date when no pattern matched.
    pub date: NaiveDate,

    /// Canonical category, or the literal token capitalized when no
    /// normalization rule matched.
    pub category: String,

    /// Human-readable label, at most 100 characters.
    pub description: String,

    /// Canonical payment method.
    pub payment_method: String,
}

impl TransactionDraft {
    /// Validate the draft and return any issues found.
    ///
    /// Emission already guarantees the amount window; this exists for
    /// callers that want to double-check drafts before persisting them.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.amount <= Decimal::ZERO {
            issues.push("Amount is not positive".to_string());
        }

        if self.amount >= Decimal::from(AMOUNT_CEILING) {
            issues.push(format!(
                "Amount {} is at or above the sanity ceiling {}",
                self.amount, AMOUNT_CEILING
            ));
        }

        if self.description.is_empty() {
            issues.push("Empty description".to_string());
        }

        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            issues.push(format!(
                "Description exceeds {} characters",
                DESCRIPTION_MAX_LEN
            ));
        }

        if self.category.is_empty() {
            issues.push("Empty category".to_string());
        }

        issues
    }

    /// Default category for a draft of the given kind.
    pub fn default_category(kind: TransactionKind) -> &'static str {
        match kind {
            TransactionKind::Income => "Other Income",
            TransactionKind::Expense => "Other",
        }
    }
}
