//! Commerce error types.

use thiserror::Error;

/// Errors surfaced by storefront operations.
///
/// The cart engine itself never fails; these cover checkout preconditions
/// and the catalog boundary.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The catalog could not be fetched or read.
    #[error("Catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
}

#[cfg(feature = "fetch")]
impl From<feria_data::FetchError> for CommerceError {
    fn from(e: feria_data::FetchError) -> Self {
        CommerceError::CatalogUnavailable {
            reason: e.to_string(),
        }
    }
}
