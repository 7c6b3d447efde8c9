//! Structured export strategy: one independent transaction per line.
//!
//! Each qualifying line carries its fields in a fixed concatenated order
//! (type, amount, category, trailing date), which gets peeled off token by
//! token. Lines without a kind keyword or an admissible amount are skipped
//! without raising.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::transaction::{TransactionDraft, TransactionKind, PAYMENT_METHOD_OTHER};

use super::rules::patterns::KIND_PREFIX;
use super::rules::{
    any_dmy_date, detect_payment_method, leading_amount, normalize_category,
    scan_standard_categories, structured_description, take_trailing_dmy_date,
};
use super::{ensure_text, normalize_lines, TransactionExtractor};

/// Description used when token filtering leaves nothing behind.
const STRUCTURED_FALLBACK_DESCRIPTION: &str = "Imported from receipt";

/// Parser for semi-structured PDF-export text.
pub struct StructuredDocumentParser {
    run_date: NaiveDate,
}

impl StructuredDocumentParser {
    /// Create a parser stamping `run_date` on drafts without a date token.
    pub fn new(run_date: NaiveDate) -> Self {
        Self { run_date }
    }

    /// Peel one line into a draft. `next_line` is consulted only by the
    /// category and payment-method fallbacks.
    fn parse_line(&self, line: &str, next_line: Option<&str>) -> Option<TransactionDraft> {
        let lower = line.to_lowercase();
        let kind = if lower.contains("expense") {
            TransactionKind::Expense
        } else if lower.contains("income") {
            TransactionKind::Income
        } else {
            return None;
        };

        // The kind keyword is only stripped at the line start; a mid-line
        // keyword leaves the remainder unusable for the amount step below
        // and the line is skipped.
        let after_kind = KIND_PREFIX.replace(line, "").into_owned();

        // An anchored trailing date is stripped and takes priority over a
        // whole-line scan. Stripping happens on pattern match; calendar
        // validation only decides whether the token yields a date.
        let trailing = take_trailing_dmy_date(&after_kind)
            .map(|(date, rest)| (Some(date), rest.to_string()));
        let (date, remaining) = match trailing {
            Some((date, rest)) => (date.flatten(), rest),
            None => (any_dmy_date(line), after_kind),
        };

        let (amount, rest) = leading_amount(&remaining)?;

        let token = rest.trim();
        let category = if token.is_empty() {
            scan_standard_categories(line, next_line)
                .unwrap_or(TransactionDraft::default_category(kind))
                .to_string()
        } else {
            normalize_category(token, kind)
        };

        let payment_method = detect_payment_method(line, next_line)
            .unwrap_or(PAYMENT_METHOD_OTHER)
            .to_string();

        let description = match structured_description(line) {
            d if d.is_empty() => STRUCTURED_FALLBACK_DESCRIPTION.to_string(),
            d => d,
        };

        Some(TransactionDraft {
            kind,
            amount,
            date: date.unwrap_or(self.run_date),
            category,
            description,
            payment_method,
        })
    }
}

impl TransactionExtractor for StructuredDocumentParser {
    fn extract(&self, text: &str) -> Result<Vec<TransactionDraft>> {
        ensure_text(text)?;

        let lines = normalize_lines(text);
        info!("parsing structured export text ({} lines)", lines.len());

        let mut drafts = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let next_line = lines.get(i + 1).copied();
            if let Some(draft) = self.parse_line(line, next_line) {
                debug!(
                    "extracted draft from line {}: {} {} on {}",
                    i + 1,
                    draft.amount,
                    draft.category,
                    draft.date
                );
                drafts.push(draft);
            }
        }

        Ok(drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn parser() -> StructuredDocumentParser {
        StructuredDocumentParser::new(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
    }

    #[test]
    fn test_concatenated_line() {
        let drafts = parser().extract("Expense250Groceries29-07-2025").unwrap();

        assert_eq!(
            drafts,
            vec![TransactionDraft {
                kind: TransactionKind::Expense,
                amount: Decimal::from(250),
                date: NaiveDate::from_ymd_opt(2025, 7, 29).unwrap(),
                category: "Groceries".to_string(),
                description: "Imported from receipt".to_string(),
                payment_method: "Other".to_string(),
            }]
        );
    }

    #[test]
    fn test_each_qualifying_line_yields_independent_draft() {
        let text = "Expense250Groceries29-07-2025\nsome header noise\nIncome50000Salary01-08-2025";
        let drafts = parser().extract(text).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].kind, TransactionKind::Expense);
        assert_eq!(drafts[0].category, "Groceries");
        assert_eq!(drafts[1].kind, TransactionKind::Income);
        assert_eq!(drafts[1].category, "Salary");
        assert_eq!(drafts[1].amount, Decimal::from(50000));
        assert_eq!(drafts[1].date, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    }

    #[test]
    fn test_no_cross_contamination_between_lines() {
        let text = "Expense250Groceries29-07-2025\nExpense900rent28-07-2025";
        let drafts = parser().extract(text).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].category, "Groceries");
        assert_eq!(drafts[0].payment_method, "Other");
        assert_eq!(drafts[1].category, "Rent/EMI");
        assert_eq!(drafts[1].date, NaiveDate::from_ymd_opt(2025, 7, 28).unwrap());
    }

    #[test]
    fn test_line_without_kind_keyword_is_skipped() {
        let drafts = parser().extract("250Groceries29-07-2025\nhello").unwrap();
        assert!(drafts.is_empty());
    }

    #[test]
    fn test_mid_line_kind_keyword_fails_amount_step() {
        // Keyword present but not at line start: nothing is stripped, the
        // leading-amount match fails, the line is skipped.
        let drafts = parser().extract("Monthly Expense250Groceries").unwrap();
        assert!(drafts.is_empty());
    }

    #[test]
    fn test_amount_ceiling_discards_line() {
        let drafts = parser().extract("Expense100000Groceries29-07-2025").unwrap();
        assert!(drafts.is_empty());
    }

    #[test]
    fn test_payment_method_from_lookahead_line() {
        let text = "Expense250Groceries29-07-2025\nPaid by Debit Card";
        let drafts = parser().extract(text).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].payment_method, "Debit Card");
    }

    #[test]
    fn test_empty_category_token_scans_lookahead() {
        let text = "Income5000\nSalary credited for July";
        let drafts = parser().extract(text).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, "Salary");
        assert_eq!(drafts[0].date, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    }

    #[test]
    fn test_kind_dependent_token_normalization() {
        let drafts = parser().extract("Income1000gift29-07-2025").unwrap();
        assert_eq!(drafts[0].category, "Other Income");

        let drafts = parser().extract("Expense1000gift29-07-2025").unwrap();
        assert_eq!(drafts[0].category, "Other");
    }

    #[test]
    fn test_mid_line_date_scan_keeps_token_in_category() {
        // The date is found mid-line but only trailing tokens get removed,
        // so the category token still carries the date text.
        let drafts = parser()
            .extract("Expense75snacks 29-07-2025 evening")
            .unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].date, NaiveDate::from_ymd_opt(2025, 7, 29).unwrap());
        assert_eq!(drafts[0].category, "Snacks 29-07-2025 evening");
    }

    #[test]
    fn test_spaced_description_tokens_survive() {
        let text = "Expense120food lunch 29-07-2025 at mess via UPI";
        let drafts = parser().extract(text).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, "Food & Dining");
        assert_eq!(drafts[0].payment_method, "UPI");
        assert_eq!(drafts[0].description, "lunch at mess via");
    }

    #[test]
    fn test_rerun_is_identical() {
        let text = "Expense250Groceries29-07-2025\nIncome50000Salary01-08-2025";
        let first = parser().extract(text).unwrap();
        let second = parser().extract(text).unwrap();
        assert_eq!(first, second);
    }
}
