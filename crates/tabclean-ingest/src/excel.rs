//! Workbook reading (first worksheet only).

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::raw::{RawCell, RawTable, normalize_header};

fn raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::Int(value) => RawCell::Number(*value as f64),
        Data::Float(value) => RawCell::Number(*value),
        Data::String(value) => RawCell::from_text(value),
        Data::Bool(value) => RawCell::Text(value.to_string()),
        // Durations keep their serial value.
        Data::DateTime(value) if value.is_duration() => RawCell::Number(value.as_f64()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(value) => RawCell::DateTime(value),
            None => RawCell::from_text(&cell.to_string()),
        },
        Data::DurationIso(value) => RawCell::from_text(value),
    }
}

fn header_text(cell: &Data) -> String {
    match raw_cell(cell) {
        RawCell::Empty => String::new(),
        RawCell::Text(value) => normalize_header(&value),
        RawCell::Number(value) => tabclean_model::format_numeric(value),
        RawCell::DateTime(value) => tabclean_model::format_datetime(value),
    }
}

/// Read the first worksheet into an untyped grid. The first non-blank row is the header.
pub(crate) fn read_workbook_raw(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        height = range.height(),
        width = range.width(),
        "reading worksheet"
    );

    let mut rows = range
        .rows()
        .filter(|row| row.iter().any(|cell| !raw_cell(cell).is_empty()));
    let Some(header) = rows.next() else {
        return Ok(RawTable::default());
    };
    let headers = header.iter().map(header_text).collect();
    let rows = rows
        .map(|row| row.iter().map(raw_cell).collect())
        .collect();
    Ok(RawTable::new(headers, rows))
}
