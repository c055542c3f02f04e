//! Row-to-product normalization.

use tracing::debug;

use crate::catalog::Product;
use crate::price::Price;
use crate::sheet::RawRow;

/// Column holding the product name.
pub const COL_NAME: &str = "name";
/// Column holding the display description.
pub const COL_DESCRIPTION: &str = "description";
/// Column holding the unit price.
pub const COL_PRICE: &str = "price";
/// Column holding the image reference.
pub const COL_IMAGE_URL: &str = "image_url";
/// Column holding the availability token.
pub const COL_AVAILABLE: &str = "available";

/// Default image reference for products without one.
pub const DEFAULT_IMAGE_PLACEHOLDER: &str = "img/placeholder.jpg";

/// Availability token that keeps a row in the catalog.
const AVAILABLE_TOKEN: &str = "yes";

/// Maps raw sheet rows into displayable products.
///
/// Rows without a name or not marked available are dropped; everything else
/// is defaulted rather than rejected. Normalization is pure and performs no
/// I/O.
#[derive(Debug, Clone)]
pub struct Normalizer {
    image_placeholder: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            image_placeholder: DEFAULT_IMAGE_PLACEHOLDER.to_string(),
        }
    }
}

impl Normalizer {
    /// Create a normalizer with the default image placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom image placeholder for products without an image.
    pub fn with_image_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.image_placeholder = placeholder.into();
        self
    }

    /// Normalize rows into products, preserving the order of survivors.
    pub fn normalize(&self, rows: &[RawRow]) -> Vec<Product> {
        let products: Vec<Product> = rows
            .iter()
            .filter_map(|row| self.normalize_row(row))
            .collect();
        let dropped = rows.len() - products.len();
        if dropped > 0 {
            debug!(kept = products.len(), dropped, "normalized catalog rows");
        }
        products
    }

    fn normalize_row(&self, row: &RawRow) -> Option<Product> {
        let name = row.get(COL_NAME).unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        let available = row.get(COL_AVAILABLE).unwrap_or_default();
        if available.trim().to_lowercase() != AVAILABLE_TOKEN {
            return None;
        }

        let image = row.get(COL_IMAGE_URL).unwrap_or_default();
        let image_ref = if image.is_empty() {
            self.image_placeholder.clone()
        } else {
            image.to_string()
        };

        Some(Product {
            name: name.to_string(),
            description: row.get(COL_DESCRIPTION).unwrap_or_default().to_string(),
            price: Price::parse_or_zero(row.get(COL_PRICE).unwrap_or_default()),
            image_ref,
        })
    }
}
