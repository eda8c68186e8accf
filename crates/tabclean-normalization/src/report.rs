//! Per-column statistics gathered while cleaning.

use serde::Serialize;
use tabclean_model::{CleaningProfile, ColumnKind, ColumnRole};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    /// Name as read from the input.
    pub source_name: String,
    /// Name after header cleaning.
    pub name: String,
    pub role: ColumnRole,
    /// Final column type.
    pub kind: ColumnKind,
    /// Cells whose text changed.
    pub changed_cells: usize,
    pub empty_cells: usize,
    /// Whether the column became numeric after cleaning.
    pub coerced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub profile: CleaningProfile,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

impl CleaningReport {
    pub fn changed_cells(&self) -> usize {
        self.columns.iter().map(|c| c.changed_cells).sum()
    }

    pub fn coerced_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.coerced).count()
    }
}
