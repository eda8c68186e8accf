use std::fs;
use std::path::Path;

use tabclean_model::FileFormat;
use tabclean_model::format::extension_of;

use crate::error::{OutputError, Result};

/// Writer format for `path`, from its extension. Only `csv` and `xlsx` can be written.
pub fn output_format(path: &Path) -> Result<FileFormat> {
    let extension = extension_of(path).unwrap_or_default();
    match extension.as_str() {
        "csv" => Ok(FileFormat::Csv),
        "xlsx" => Ok(FileFormat::Excel),
        _ => Err(OutputError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Ensure a parent directory exists for a file path.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
