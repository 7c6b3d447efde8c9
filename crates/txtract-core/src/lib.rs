//! Core library for receipt transaction extraction.
//!
//! This crate provides:
//! - Line normalization for OCR- and PDF-recovered receipt text
//! - Rule-based field extraction (amounts, dates, categories, payment methods)
//! - A POS-receipt strategy (one accumulated draft per document) and a
//!   structured-export strategy (one draft per qualifying line)
//! - Transaction draft models ready for persistence by the caller
//!
//! Text recovery itself (OCR, PDF-to-text) is the caller's job; the core
//! only ever sees decoded text.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{ExtractError, Result};
pub use extract::{
    extract_transactions, extract_transactions_from_bytes, normalize_lines, PosReceiptParser,
    StructuredDocumentParser, TransactionExtractor,
};
pub use models::config::TxtractConfig;
pub use models::transaction::{DocumentKind, TransactionDraft, TransactionKind};
