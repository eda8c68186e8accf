//! Stateless text transformations.
//!
//! Each function maps one string to another and can be composed freely.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters that show up when UTF-8 bytes were decoded as Latin-1 or
/// Windows-1252. Text without any of them is never touched.
const MOJIBAKE_MARKERS: [char; 3] = ['Ã', 'Â', 'â'];

/// Windows-1252 characters in the 0x80..=0x9F range and the byte each came from.
const CP1252_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

static DECIMAL_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d),(\d)").expect("valid decimal comma regex"));
static LOOSE_MEASUREMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\s*[xX]\s*(\d)").expect("valid measurement regex"));
static SIZED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*_\d+[xX]\d+$").expect("valid sized code regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel case regex"));
static UNDERSCORE_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*_\s*").expect("valid underscore regex"));

fn original_byte(ch: char) -> Option<u8> {
    if let Ok(byte) = u8::try_from(u32::from(ch)) {
        return Some(byte);
    }
    CP1252_HIGH
        .iter()
        .find(|(mapped, _)| *mapped == ch)
        .map(|(_, byte)| *byte)
}

/// Undo a UTF-8 → Latin-1/Windows-1252 mis-decode.
///
/// Every character is mapped back to the single byte it was decoded from and
/// the bytes are decoded again as UTF-8. Text without a marker character, or
/// whose bytes are not valid UTF-8, is returned unchanged.
pub fn repair_mojibake(text: &str) -> Cow<'_, str> {
    if !text.contains(MOJIBAKE_MARKERS) {
        return Cow::Borrowed(text);
    }
    let Some(bytes) = text.chars().map(original_byte).collect::<Option<Vec<u8>>>() else {
        return Cow::Borrowed(text);
    };
    match String::from_utf8(bytes) {
        Ok(repaired) => Cow::Owned(repaired),
        Err(_) => Cow::Borrowed(text),
    }
}

/// Decompose (NFKD) and drop combining marks: `"ã"` becomes `"a"`.
pub fn strip_accents(text: &str) -> String {
    text.nfkd().filter(|ch| !is_combining_mark(*ch)).collect()
}

/// Turn a decimal comma between two digits into a point.
pub fn fix_decimal_comma(text: &str) -> Cow<'_, str> {
    DECIMAL_COMMA.replace_all(text, "${1}.${2}")
}

/// Keep ASCII letters, ASCII digits, underscore and space; drop everything else.
pub fn filter_chars(text: &str) -> String {
    text.chars().filter(|ch| is_allowed(*ch)).collect()
}

/// True for the characters [`filter_chars`] keeps.
pub fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == ' '
}

/// Collapse whitespace runs to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove spaces around underscores: `"a _ b"` becomes `"a_b"`.
pub fn tidy_underscores(text: &str) -> Cow<'_, str> {
    UNDERSCORE_PADDING.replace_all(text, "_")
}

/// Insert a space at lower→upper case boundaries: `"ProdutoNovo"` → `"Produto Novo"`.
pub fn split_camel_case(text: &str) -> Cow<'_, str> {
    CAMEL_BOUNDARY.replace_all(text, "${1} ${2}")
}

/// Remove spaces inside measurements: `"10 X 20"` becomes `"10x20"`.
pub fn tighten_measurements(text: &str) -> Cow<'_, str> {
    LOOSE_MEASUREMENT.replace_all(text, "${1}x${2}")
}

/// True for product codes ending in `_<digits>x<digits>`, e.g. `CAIXA_10x20`.
pub fn is_sized_code(text: &str) -> bool {
    SIZED_CODE.is_match(text)
}
