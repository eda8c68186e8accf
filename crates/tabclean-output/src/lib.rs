//! Output generation for cleaned tables.
//!
//! The writer is chosen from the output path's extension:
//!
//! - **CSV**: UTF-8 with a byte-order mark, configurable delimiter
//! - **XLSX**: one worksheet with a bold, frozen header row

mod common;
mod delimited;
mod error;
mod xlsx;

use std::path::Path;
use std::time::Instant;

use tabclean_model::{FileFormat, Table};
use tracing::{info, info_span};

pub use common::output_format;
pub use error::{OutputError, Result};

/// Options for [`write_table`].
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// CSV field delimiter. Ignored for workbooks.
    pub delimiter: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Write `table` to `path` and return the format used.
///
/// Missing parent directories are created. Nothing is written when the
/// extension has no writer.
pub fn write_table(table: &Table, path: &Path, options: &WriteOptions) -> Result<FileFormat> {
    let format = output_format(path)?;
    let span = info_span!("write", path = %path.display(), format = %format);
    let _guard = span.enter();
    let start = Instant::now();

    common::ensure_parent_dir(path)?;
    match format {
        FileFormat::Csv => delimited::write_csv(table, path, options.delimiter)?,
        FileFormat::Excel => xlsx::write_xlsx(table, path)?,
    }

    info!(
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "output written"
    );
    Ok(format)
}
