//! Text normalization for tabclean tables.
//!
//! All rules are pure functions from one cell value to another; they are
//! composed in a fixed order by [`clean_value`] and applied column by column
//! by [`clean_table`].
//!
//! # Overview
//!
//! - **Text rules**: mojibake repair, accent removal, character filter,
//!   whitespace collapse
//! - **Domain rules**: price formatting, measurement patterns (`10x20`),
//!   identifier columns that keep underscores
//! - **Numeric coercion**: text columns whose cleaned values are all numbers
//!   become numeric columns
//!
//! # Example
//!
//! ```
//! use tabclean_model::{CleaningProfile, ColumnRole};
//! use tabclean_normalization::{CellContext, clean_value};
//!
//! let context = CellContext::new(CleaningProfile::General, ColumnRole::Text);
//! assert_eq!(clean_value("São   Paulo", &context), "Sao Paulo");
//! ```

mod coerce;
mod executor;
mod price;
mod report;
mod rules;

pub mod text;

// Cell-level rules
pub use price::{format_price, normalize_price};
pub use rules::{CellContext, clean_header, clean_value};

// Column-level rules
pub use coerce::{coerce_numeric, is_numeric_text};

// Table execution
pub use executor::{CleanOptions, clean_table};
pub use report::{CleaningReport, ColumnReport};
