//! Load-time column typing.

use chrono::NaiveDateTime;
use tabclean_model::{Column, ColumnData};

use crate::raw::RawCell;

/// Parse a cell as a plain number. Rejects `NaN`, infinities and text
/// without any digit.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Type a column from its raw cells.
///
/// The column is numeric when it has at least one value and every non-empty
/// cell is a number, and a date column when every non-empty cell is a date.
/// Any other mix keeps every cell as text.
pub fn infer_column(name: String, cells: &[RawCell]) -> Column {
    if let Some(numbers) = numeric_cells(cells) {
        return Column::numeric(name, numbers);
    }
    if let Some(dates) = date_cells(cells) {
        return Column::new(name, ColumnData::DateTime(dates));
    }
    Column::text(name, cells.iter().map(RawCell::as_text).collect())
}

fn numeric_cells(cells: &[RawCell]) -> Option<Vec<Option<f64>>> {
    let mut seen_value = false;
    let numbers = cells
        .iter()
        .map(|cell| match cell {
            RawCell::Empty => Some(None),
            RawCell::Number(value) => {
                seen_value = true;
                Some(Some(*value))
            }
            RawCell::Text(value) => {
                seen_value = true;
                parse_number(value).map(Some)
            }
            RawCell::DateTime(_) => None,
        })
        .collect::<Option<Vec<_>>>()?;
    seen_value.then_some(numbers)
}

fn date_cells(cells: &[RawCell]) -> Option<Vec<Option<NaiveDateTime>>> {
    let mut seen_value = false;
    let dates = cells
        .iter()
        .map(|cell| match cell {
            RawCell::Empty => Some(None),
            RawCell::DateTime(value) => {
                seen_value = true;
                Some(Some(*value))
            }
            RawCell::Text(_) | RawCell::Number(_) => None,
        })
        .collect::<Option<Vec<_>>>()?;
    seen_value.then_some(dates)
}
