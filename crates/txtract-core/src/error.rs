//! Error types for the txtract-core library.

use thiserror::Error;

/// Main error type for the extraction pipeline.
///
/// Heuristic mismatches (unparseable dates, out-of-range amounts, lines
/// with no signal) are never errors — they leave accumulators unchanged.
/// The only failures the core raises are for input that is not text at all.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 text: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    /// Input is structurally unusable as text (e.g. binary data with
    /// embedded NUL bytes handed over as a decoded string).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the txtract library.
pub type Result<T> = std::result::Result<T, ExtractError>;
