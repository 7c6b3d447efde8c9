//! Transaction extraction module.
//!
//! Two parsing strategies share the rule-based field extractors in
//! [`rules`]: a POS receipt accumulates at most one transaction across all
//! lines, while a structured export yields one independent transaction per
//! qualifying line. The caller picks the strategy via [`DocumentKind`].

mod pos;
mod structured;
pub mod rules;

pub use pos::PosReceiptParser;
pub use structured::StructuredDocumentParser;

use chrono::NaiveDate;

use crate::error::{ExtractError, Result};
use crate::models::transaction::{DocumentKind, TransactionDraft};

/// Trait for extraction strategies.
pub trait TransactionExtractor {
    /// Extract transaction drafts from already-recovered text.
    fn extract(&self, text: &str) -> Result<Vec<TransactionDraft>>;
}

/// Split raw text into trimmed, non-empty lines, order preserved.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Reject strings that are binary data in disguise. Heuristic mismatches
/// are absorbed downstream; this is the one structural check that fails
/// fast.
pub(crate) fn ensure_text(text: &str) -> Result<()> {
    if text.contains('\0') {
        return Err(ExtractError::InvalidInput(
            "text contains NUL bytes".to_string(),
        ));
    }
    Ok(())
}

/// Extract transaction drafts from text using the strategy for `kind`.
///
/// `run_date` is the date stamped on drafts when no date pattern matches;
/// callers hold it so that repeated runs over the same input are
/// byte-identical.
pub fn extract_transactions(
    text: &str,
    kind: DocumentKind,
    run_date: NaiveDate,
) -> Result<Vec<TransactionDraft>> {
    match kind {
        DocumentKind::PosReceipt => PosReceiptParser::new(run_date).extract(text),
        DocumentKind::StructuredExport => StructuredDocumentParser::new(run_date).extract(text),
    }
}

/// Collaborator-facing boundary: validate that the supplied bytes are
/// UTF-8 text, then extract. Non-text input fails fast.
pub fn extract_transactions_from_bytes(
    bytes: &[u8],
    kind: DocumentKind,
    run_date: NaiveDate,
) -> Result<Vec<TransactionDraft>> {
    let text = std::str::from_utf8(bytes)?;
    extract_transactions(text, kind, run_date)
}
