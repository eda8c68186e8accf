//! Price normalization.
//!
//! Prices use a decimal point in the output. On input, when both `.` and `,`
//! appear the right-most one is the decimal separator; a lone comma is a
//! decimal comma; repeated separators of one kind are thousands separators.

/// Format a price with exactly two decimals.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

/// Parse a price-like value such as `"R$ 1.234,50"` into a number.
fn parse_price(raw: &str) -> Option<f64> {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-'))
        .collect();
    if !kept.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let last_dot = kept.rfind('.');
    let last_comma = kept.rfind(',');
    let canonical = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if comma > dot => kept.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => kept.replace(',', ""),
        (None, Some(_)) if kept.matches(',').count() == 1 => kept.replace(',', "."),
        (None, Some(_)) => kept.replace(',', ""),
        (Some(_), None) if kept.matches('.').count() > 1 => kept.replace('.', ""),
        _ => kept,
    };
    canonical.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize a price cell to a two-decimal string.
///
/// Returns `None` when the value holds no parseable amount; callers keep the
/// original value in that case.
pub fn normalize_price(raw: &str) -> Option<String> {
    parse_price(raw).map(format_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_uses_decimal_point() {
        assert_eq!(normalize_price("R$ 10,50").as_deref(), Some("10.50"));
        assert_eq!(normalize_price("US$ 3.5").as_deref(), Some("3.50"));
        assert_eq!(normalize_price("€7").as_deref(), Some("7.00"));
    }

    #[test]
    fn handles_thousands_separators() {
        assert_eq!(normalize_price("1.234,5").as_deref(), Some("1234.50"));
        assert_eq!(normalize_price("1,234.56").as_deref(), Some("1234.56"));
        assert_eq!(normalize_price("1.234.567").as_deref(), Some("1234567.00"));
        assert_eq!(normalize_price("1,234,567").as_deref(), Some("1234567.00"));
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(normalize_price("R$ -5,00").as_deref(), Some("-5.00"));
    }

    #[test]
    fn rejects_values_without_amount() {
        assert_eq!(normalize_price("sob consulta"), None);
        assert_eq!(normalize_price("-"), None);
        assert_eq!(normalize_price("10-20"), None);
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_price(2.0), "2.00");
        assert_eq!(format_price(1.234), "1.23");
        assert_eq!(format_price(19.999), "20.00");
    }
}
