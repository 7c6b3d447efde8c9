//! Rule-based field extractors shared by both parsing strategies.

pub mod amounts;
pub mod categories;
pub mod dates;
pub mod description;
pub mod patterns;
pub mod payment;

pub use amounts::{leading_amount, AmountExtractor};
pub use categories::{merchant_category, normalize_category, scan_standard_categories};
pub use dates::{any_dmy_date, take_trailing_dmy_date, DateExtractor};
pub use description::{pos_description_candidate, structured_description};
pub use payment::detect_payment_method;

/// Trait for single-field extractors that scan one line of text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the best candidate from a line.
    fn extract(&self, line: &str) -> Option<Self::Output>;

    /// Extract all admissible candidates, in rule order.
    fn extract_all(&self, line: &str) -> Vec<Self::Output>;
}
