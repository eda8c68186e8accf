//! Column roles derived from (cleaned) column names.

use serde::{Deserialize, Serialize};

const PRICE_NAMES: &[&str] = &["preco", "price", "valor"];

const IDENTIFIER_NAMES: &[&str] = &[
    "codigo", "code", "sku", "nome", "name", "cliente", "customer", "usuario", "login",
];

/// How the cleaner treats a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    #[default]
    Text,
    /// Identifier or name column: underscores survive and cleaning never
    /// empties a non-empty cell.
    Identifier,
    /// Monetary column, formatted with two decimals.
    Price,
}

impl ColumnRole {
    pub fn detect(column_name: &str) -> Self {
        let name = column_name.trim().to_lowercase();
        if PRICE_NAMES.contains(&name.as_str()) {
            return Self::Price;
        }
        if is_identifier_name(&name) {
            return Self::Identifier;
        }
        Self::Text
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Identifier => "identifier",
            Self::Price => "price",
        }
    }
}

fn is_identifier_name(name: &str) -> bool {
    if name == "id" || IDENTIFIER_NAMES.contains(&name) {
        return true;
    }
    ["id_", "id "].iter().any(|prefix| name.starts_with(prefix))
        || ["_id", " id"].iter().any(|suffix| name.ends_with(suffix))
}
