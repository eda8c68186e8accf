//! Cell cleaning: the fixed composition of text rules.

use tabclean_model::{CleaningProfile, ColumnRole};

use crate::text::{
    collapse_whitespace, filter_chars, fix_decimal_comma, is_sized_code, repair_mojibake,
    split_camel_case, strip_accents, tidy_underscores, tighten_measurements,
};

/// Per-column inputs to [`clean_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellContext {
    pub profile: CleaningProfile,
    pub role: ColumnRole,
}

impl CellContext {
    pub fn new(profile: CleaningProfile, role: ColumnRole) -> Self {
        Self { profile, role }
    }
}

/// Mojibake repair, accent removal and decimal-comma fix. Whitespace is
/// normalized to single spaces so the filter never glues words together.
fn decode_stage(raw: &str) -> String {
    let repaired = repair_mojibake(raw);
    let unaccented = strip_accents(&repaired);
    let decimal = fix_decimal_comma(&unaccented);
    collapse_whitespace(&decimal)
}

fn clean_general(text: &str) -> String {
    let text = tidy_underscores(text);
    let text = collapse_whitespace(&filter_chars(&text));
    tidy_underscores(&text).into_owned()
}

fn clean_products(text: &str, keep_underscores: bool) -> String {
    if keep_underscores || is_sized_code(text) {
        let text = collapse_whitespace(&filter_chars(text));
        return tighten_measurements(&text).into_owned();
    }
    let text = text.replace('_', " ");
    let text = collapse_whitespace(&filter_chars(&text));
    let text = split_camel_case(&text);
    tighten_measurements(&text).into_owned()
}

/// Clean one text value.
///
/// Order: mojibake repair → accent removal → decimal comma → character
/// filter → whitespace collapse → profile rules. Measurements such as `10x20`
/// survive because `x` is a letter and digits are kept. In identifier
/// columns a non-empty value never becomes empty: it falls back to the
/// decoded, whitespace-collapsed text.
pub fn clean_value(raw: &str, context: &CellContext) -> String {
    let decoded = decode_stage(raw);
    let cleaned = match context.profile {
        CleaningProfile::General => clean_general(&decoded),
        CleaningProfile::Products => {
            clean_products(&decoded, context.role == ColumnRole::Identifier)
        }
    };
    if cleaned.is_empty() && context.role == ColumnRole::Identifier && !decoded.is_empty() {
        return decoded;
    }
    cleaned
}

/// Clean a column name. A name that would become empty keeps its original text.
pub fn clean_header(raw: &str, profile: CleaningProfile) -> String {
    let cleaned = clean_value(raw, &CellContext::new(profile, ColumnRole::Text));
    if cleaned.is_empty() {
        raw.to_string()
    } else {
        cleaned
    }
}
