//! CSV output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tabclean_model::Table;

use crate::error::{OutputError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `table` as UTF-8 CSV with a byte-order mark. Empty cells are empty fields.
pub(crate) fn write_csv(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut buffer = BufWriter::new(file);
    buffer.write_all(UTF8_BOM).map_err(write_err)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(buffer);
    if table.width() == 0 {
        writer.flush().map_err(write_err)?;
        return Ok(());
    }
    writer.write_record(table.column_names()).map_err(csv_err)?;
    for row in table.text_rows() {
        writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or_default()))
            .map_err(csv_err)?;
    }
    writer.flush().map_err(write_err)?;
    Ok(())
}
