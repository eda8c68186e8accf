//! Untyped grid read from the source file, before type inference.

use chrono::NaiveDateTime;

/// One source cell before column typing.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    /// Workbook cell that already holds a number.
    Number(f64),
    /// Workbook cell formatted as a date or date-time.
    DateTime(NaiveDateTime),
}

impl RawCell {
    /// Wrap a trimmed string, mapping blank to [`RawCell::Empty`].
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text view of the cell, formatting numbers.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => Some(tabclean_model::format_numeric(*value)),
            Self::DateTime(value) => Some(tabclean_model::format_datetime(*value)),
        }
    }
}

/// Header plus row-major cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { headers, rows }
    }

    /// Cells of column `idx`, padding short rows with empty cells.
    pub fn column_cells(&self, idx: usize) -> Vec<RawCell> {
        self.rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or(RawCell::Empty))
            .collect()
    }
}

/// Normalizes a header value: trim, drop BOM, collapse inner whitespace.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_maps_blank_to_empty() {
        assert_eq!(RawCell::from_text("   "), RawCell::Empty);
        assert_eq!(RawCell::from_text(" a "), RawCell::Text("a".to_string()));
    }

    #[test]
    fn normalize_header_collapses_whitespace() {
        assert_eq!(normalize_header("\u{feff} Nome   do  Cliente "), "Nome do Cliente");
    }
}
