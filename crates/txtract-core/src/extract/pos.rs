//! POS receipt strategy: fold all lines into at most one expense draft.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::transaction::{TransactionDraft, TransactionKind};

use super::rules::{
    merchant_category, pos_description_candidate, AmountExtractor, DateExtractor, FieldExtractor,
};
use super::{ensure_text, normalize_lines, TransactionExtractor};

/// Description used when no line qualifies as one.
const POS_FALLBACK_DESCRIPTION: &str = "POS Receipt Transaction";

/// POS purchases are presumed digital unless the receipt says otherwise,
/// which free-form receipts never reliably do.
const POS_PAYMENT_METHOD: &str = "Card/UPI";

/// Parser for free-form point-of-sale receipt text.
///
/// A whole receipt produces at most one transaction no matter how many
/// total-like lines it contains; each line only refines the running draft.
pub struct PosReceiptParser {
    run_date: NaiveDate,
}

impl PosReceiptParser {
    /// Create a parser stamping `run_date` on drafts without a date line.
    pub fn new(run_date: NaiveDate) -> Self {
        Self { run_date }
    }
}

/// Running-best state threaded through the line fold. Fields stay absent
/// until a line provides a value; defaulting happens once, at finalization.
#[derive(Debug, Clone, Default)]
struct DraftAccumulator {
    amount: Option<Decimal>,
    date: Option<NaiveDate>,
    category: Option<&'static str>,
    description: Option<String>,
}

impl DraftAccumulator {
    /// Offer one line to every field extractor and return the next state.
    ///
    /// Override policies differ per field: amounts only grow (a grand
    /// total printed after a subtotal wins), dates and categories take the
    /// newest match, the description keeps the first hit.
    fn observe(mut self, line: &str) -> Self {
        for candidate in AmountExtractor::new().extract_all(line) {
            if self.amount.is_none_or(|current| candidate > current) {
                debug!("amount candidate {} from line {:?}", candidate, line);
                self.amount = Some(candidate);
            }
        }

        for candidate in DateExtractor::new().extract_all(line) {
            self.date = Some(candidate);
        }

        if let Some(category) = merchant_category(line) {
            self.category = Some(category);
        }

        if self.description.is_none() && pos_description_candidate(line) {
            self.description = Some(line.to_string());
        }

        self
    }

    /// Freeze the accumulator into a draft, if any amount was found.
    fn finalize(self, run_date: NaiveDate) -> Option<TransactionDraft> {
        let amount = self.amount?;

        Some(TransactionDraft {
            kind: TransactionKind::Expense,
            amount,
            date: self.date.unwrap_or(run_date),
            category: self
                .category
                .unwrap_or(TransactionDraft::default_category(TransactionKind::Expense))
                .to_string(),
            description: self
                .description
                .unwrap_or_else(|| POS_FALLBACK_DESCRIPTION.to_string()),
            payment_method: POS_PAYMENT_METHOD.to_string(),
        })
    }
}

impl TransactionExtractor for PosReceiptParser {
    fn extract(&self, text: &str) -> Result<Vec<TransactionDraft>> {
        ensure_text(text)?;

        let lines = normalize_lines(text);
        info!("parsing POS receipt text ({} lines)", lines.len());

        let accumulator = lines
            .iter()
            .fold(DraftAccumulator::default(), |acc, line| acc.observe(line));

        match accumulator.finalize(self.run_date) {
            Some(draft) => {
                debug!(
                    "extracted POS draft: {} {} on {}",
                    draft.amount, draft.category, draft.date
                );
                Ok(vec![draft])
            }
            None => {
                debug!("no admissible amount found, yielding no draft");
                Ok(Vec::new())
            }
        }
    }
}
