//! Shared data model for tabclean.
//!
//! A [`Table`] is an ordered list of named columns. Every column is held as a
//! homogeneous [`ColumnData`] variant: text, numeric or date.

pub mod error;
pub mod format;
pub mod profile;
pub mod role;
pub mod table;

pub use error::{ModelError, Result};
pub use format::FileFormat;
pub use profile::CleaningProfile;
pub use role::ColumnRole;
pub use table::{Column, ColumnData, ColumnKind, Table, format_datetime, format_numeric};
