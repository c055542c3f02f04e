//! Product entity.

use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A catalog product ready for display.
///
/// Only available products are normalized into the catalog, so there is no
/// availability flag here. Identity for cart purposes is the exact `name`
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name, never empty.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Unit price as published by the sheet.
    pub price: Price,
    /// Image reference, or the configured placeholder.
    pub image_ref: String,
}
