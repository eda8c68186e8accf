//! XLSX output (single worksheet).

use std::path::Path;

use chrono::{NaiveDateTime, Timelike};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use tabclean_model::{ColumnData, Table};

use crate::error::{OutputError, Result};

fn workbook_error(path: &Path, err: XlsxError) -> OutputError {
    match err {
        XlsxError::IoError(source) => OutputError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => OutputError::Workbook {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

fn is_midnight(value: &NaiveDateTime) -> bool {
    value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0
}

/// Write `table` to the first worksheet of a new workbook.
///
/// The header row is bold and frozen. Numeric columns are written as numbers,
/// date columns as dates and text columns (price columns included) as
/// strings. Empty cells are skipped.
pub(crate) fn write_xlsx(table: &Table, path: &Path) -> Result<()> {
    let err = |e| workbook_error(path, e);
    let too_large = |what: &str| OutputError::Workbook {
        path: path.to_path_buf(),
        message: format!("too many {what} for a worksheet"),
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (idx, column) in table.columns().iter().enumerate() {
        let col = ColNum::try_from(idx).map_err(|_| too_large("columns"))?;
        sheet
            .write_string_with_format(0, col, column.name.as_str(), &header)
            .map_err(err)?;

        match &column.data {
            ColumnData::Text(values) => {
                for (row, value) in values.iter().enumerate() {
                    let Some(value) = value else { continue };
                    let row = RowNum::try_from(row + 1).map_err(|_| too_large("rows"))?;
                    sheet.write_string(row, col, value.as_str()).map_err(err)?;
                }
            }
            ColumnData::Numeric(values) => {
                for (row, value) in values.iter().enumerate() {
                    let Some(value) = value else { continue };
                    let row = RowNum::try_from(row + 1).map_err(|_| too_large("rows"))?;
                    sheet.write_number(row, col, *value).map_err(err)?;
                }
            }
            ColumnData::DateTime(values) => {
                for (row, value) in values.iter().enumerate() {
                    let Some(value) = value else { continue };
                    let row = RowNum::try_from(row + 1).map_err(|_| too_large("rows"))?;
                    let format = if is_midnight(value) {
                        &date_format
                    } else {
                        &datetime_format
                    };
                    sheet
                        .write_datetime_with_format(row, col, value, format)
                        .map_err(err)?;
                }
            }
        }
    }
    sheet.set_freeze_panes(1, 0).map_err(err)?;

    workbook.save(path).map_err(err)?;
    Ok(())
}
