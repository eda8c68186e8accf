//! Entry point: load one input file into a typed table.

use std::path::Path;
use std::time::Instant;

use tabclean_model::{FileFormat, Table, format::extension_of};
use tracing::{info, warn};

use crate::delimited::{SourceEncoding, read_csv_raw};
use crate::embedded::expand_embedded_csv;
use crate::error::{IngestError, Result};
use crate::excel::read_workbook_raw;
use crate::infer::infer_column;
use crate::raw::RawTable;

/// Options for [`load_table`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Fixed CSV delimiter. `None` sniffs it from the header line.
    pub delimiter: Option<u8>,
}

/// A loaded table plus what the reader learned about the source.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub format: FileFormat,
    /// Delimiter used for CSV input.
    pub delimiter: Option<u8>,
    /// Encoding used for CSV input.
    pub encoding: Option<SourceEncoding>,
    /// Whether an embedded CSV export in a workbook was split into columns.
    pub expanded: bool,
}

/// Load `path`, choosing the reader from its extension.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<LoadedTable> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let format = FileFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: extension_of(path).unwrap_or_default(),
    })?;

    let start = Instant::now();
    let (raw, delimiter, encoding) = match format {
        FileFormat::Csv => {
            let source = read_csv_raw(path, options.delimiter)?;
            (source.raw, Some(source.delimiter), Some(source.encoding))
        }
        FileFormat::Excel => (read_workbook_raw(path)?, None, None),
    };

    // A quoted comma in a CSV file is data. Only workbooks can hold a CSV
    // export pasted into one column.
    let embedded = match format {
        FileFormat::Excel => expand_embedded_csv(&raw),
        FileFormat::Csv => None,
    };
    let (raw, expanded) = match embedded {
        Some(expanded) => {
            warn!(
                path = %path.display(),
                columns = expanded.headers.len(),
                "single column held embedded CSV fields, split into columns"
            );
            (expanded, true)
        }
        None => (raw, false),
    };

    let table = type_columns(&raw)?;
    info!(
        path = %path.display(),
        format = %format,
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "input loaded"
    );
    Ok(LoadedTable {
        table,
        format,
        delimiter,
        encoding,
        expanded,
    })
}

fn type_columns(raw: &RawTable) -> Result<Table> {
    let columns = raw
        .headers
        .iter()
        .enumerate()
        .map(|(idx, name)| infer_column(name.clone(), &raw.column_cells(idx)))
        .collect();
    Ok(Table::new(columns)?)
}
