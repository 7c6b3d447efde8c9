//! Payment-method detection.

use crate::models::transaction::PAYMENT_METHODS;

/// Scan a line (and the immediately following line) for a known payment
/// method. First match wins; the strategy applies the "Other" default.
pub fn detect_payment_method(line: &str, next_line: Option<&str>) -> Option<&'static str> {
    let line = line.to_lowercase();
    let next = next_line.map(str::to_lowercase);

    for method in PAYMENT_METHODS {
        let needle = method.to_lowercase();
        if line.contains(&needle) || next.as_deref().is_some_and(|n| n.contains(&needle)) {
            return Some(method);
        }
    }

    None
}
