//! Rule profiles.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Fixed rule variant applied to text cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningProfile {
    /// Customer-style data: underscores are kept and tidied.
    #[default]
    General,
    /// Product catalogues: underscores become spaces (except in size codes),
    /// camelCase is split and `10 x 20` is tightened to `10x20`.
    Products,
}

impl CleaningProfile {
    /// Pick the profile from the output file name.
    ///
    /// Names containing `produtos` or `products` select [`Self::Products`].
    pub fn infer_from_output(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if name.contains("produtos") || name.contains("products") {
            Self::Products
        } else {
            Self::General
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Products => "products",
        }
    }
}
