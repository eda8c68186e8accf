#![deny(unsafe_code)]

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Cell storage for one column. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Text(Vec<Option<String>>),
    Numeric(Vec<Option<f64>>),
    /// Workbook date cells. Passed through cleaning untouched.
    DateTime(Vec<Option<NaiveDateTime>>),
}

/// The tag of a [`ColumnData`] without its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Numeric,
    #[serde(rename = "datetime")]
    DateTime,
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Numeric(values) => values.len(),
            Self::DateTime(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Text(_) => ColumnKind::Text,
            Self::Numeric(_) => ColumnKind::Numeric,
            Self::DateTime(_) => ColumnKind::DateTime,
        }
    }

    /// Number of cells that hold no value (blank text counts as empty).
    pub fn empty_count(&self) -> usize {
        match self {
            Self::Text(values) => values
                .iter()
                .filter(|value| value.as_deref().is_none_or(|v| v.trim().is_empty()))
                .count(),
            Self::Numeric(values) => values.iter().filter(|value| value.is_none()).count(),
            Self::DateTime(values) => values.iter().filter(|value| value.is_none()).count(),
        }
    }

    /// Render the cell at `idx` as text; numbers use [`format_numeric`],
    /// dates [`format_datetime`].
    pub fn cell_text(&self, idx: usize) -> Option<String> {
        match self {
            Self::Text(values) => values.get(idx).cloned().flatten(),
            Self::Numeric(values) => values.get(idx).copied().flatten().map(format_numeric),
            Self::DateTime(values) => values.get(idx).copied().flatten().map(format_datetime),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self::new(name, ColumnData::Text(values))
    }

    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnData::Numeric(values))
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }
}

/// In-memory table. All columns have the same number of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    /// Build a table, checking that every column has the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let height = columns.first().map_or(0, |column| column.data.len());
        for column in &columns {
            let actual = column.data.len();
            if actual != height {
                return Err(ModelError::LengthMismatch {
                    column: column.name.clone(),
                    expected: height,
                    actual,
                });
            }
        }
        Ok(Self { columns, height })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to the columns. Cleaning steps replace cell values in
    /// place and must not change a column's length.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// Row-major text view, used by writers and tests.
    pub fn text_rows(&self) -> Vec<Vec<Option<String>>> {
        (0..self.height)
            .map(|idx| {
                self.columns
                    .iter()
                    .map(|column| column.data.cell_text(idx))
                    .collect()
            })
            .collect()
    }
}

/// ISO 8601 text for a date cell: `2023-07-14`, or `2023-07-14 08:30:00`
/// when the cell carries a time of day.
pub fn format_datetime(value: NaiveDateTime) -> String {
    if value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
