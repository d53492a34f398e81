//! Catalog category types.

use serde::{Deserialize, Serialize};

/// A navigation category.
///
/// The category listing query only requests `name`; richer queries also
/// carry an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl Category {
    /// Sentinel category matching every product.
    pub const ALL: &'static str = "all";
}
