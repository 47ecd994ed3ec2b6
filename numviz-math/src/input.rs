//! Parsing of user-typed numbers.

use crate::error::{MathError, MathResult};

/// Parse one field as a finite `f64`.
///
/// Accepts surrounding whitespace, a leading `+`, and scientific notation.
/// Empty text, `NaN` and infinities are rejected.
pub fn parse_number(field: &str, text: &str) -> MathResult<f64> {
    let trimmed = text.trim();
    let invalid = || MathError::NonNumericInput {
        field: field.to_string(),
        value: text.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    // `f64::from_str` accepts "inf" and "nan", which a user never means.
    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}

/// Parse a list of fields, naming each one `<field> <index>` (1-based).
pub fn parse_numbers<S: AsRef<str>>(field: &str, texts: &[S]) -> MathResult<Vec<f64>> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| parse_number(&format!("{} {}", field, i + 1), text.as_ref()))
        .collect()
}
