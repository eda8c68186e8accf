//! Tabular data ingestion for tabclean.
//!
//! This crate loads one input file into a [`tabclean_model::Table`]:
//!
//! - **CSV**: UTF-8 with a Latin-1 fallback, delimiter sniffed from the header
//! - **Workbooks**: first worksheet of an `xlsx`/`xlsm`/`xls` file
//! - **Embedded CSV**: a single-column worksheet whose cells hold comma-joined
//!   fields is split back into proper columns
//! - **Type inference**: columns whose non-empty cells are all numbers load as
//!   numeric columns, all-date worksheet columns as date columns
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{LoadOptions, load_table};
//!
//! let loaded = load_table(Path::new("clientes.csv"), &LoadOptions::default())?;
//! println!("{} rows", loaded.table.height());
//! ```

mod delimited;
mod embedded;
mod error;
mod excel;
mod infer;
mod loader;
mod raw;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{LoadOptions, LoadedTable, load_table};

// === Building blocks ===
pub use delimited::{SourceEncoding, decode_csv_bytes, sniff_delimiter};
pub use embedded::expand_embedded_csv;
pub use infer::{infer_column, parse_number};
pub use raw::{RawCell, RawTable};
