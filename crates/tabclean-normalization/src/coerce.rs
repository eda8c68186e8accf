//! Conservative numeric coercion of cleaned text columns.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid numeric regex"));

/// True for plain numbers like `42`, `-3` or `10.5` (a decimal comma is accepted).
pub fn is_numeric_text(value: &str) -> bool {
    NUMERIC_TEXT.is_match(&value.trim().replace(',', "."))
}

/// Convert a text column to numbers when every non-empty value is numeric.
///
/// Returns `None` (leave the column as text) when any non-empty value does
/// not parse or when the column has no values at all.
pub fn coerce_numeric(values: &[Option<String>]) -> Option<Vec<Option<f64>>> {
    let mut numbers = Vec::with_capacity(values.len());
    let mut seen_value = false;
    for value in values {
        let Some(text) = value.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            numbers.push(None);
            continue;
        };
        if !is_numeric_text(text) {
            return None;
        }
        let number = text.replace(',', ".").parse::<f64>().ok()?;
        seen_value = true;
        numbers.push(Some(number));
    }
    seen_value.then_some(numbers)
}
