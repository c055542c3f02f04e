//! Storefront domain logic for sheet-published catalogs.
//!
//! This crate is the core of a small storefront widget: a catalog published
//! as a spreadsheet CSV export, a shopping cart persisted to a key-value
//! boundary, and checkout as a WhatsApp deep link.
//!
//! - **Sheet**: best-effort decoding of the CSV export into raw rows
//! - **Catalog**: normalization of rows into displayable products
//! - **Cart**: the cart engine with add/remove/quantity operations
//! - **Checkout**: order formatting and messaging deep links
//!
//! # Example
//!
//! ```rust,ignore
//! use feria_commerce::prelude::*;
//! use feria_commerce::sheet;
//!
//! let rows = sheet::decode(&csv_text);
//! let products = Normalizer::new().normalize(&rows);
//!
//! let mut cart = Cart::new();
//! cart.add_product(&products[0], 2);
//!
//! let config = CheckoutConfig::new("573005970933");
//! let link = config.checkout(&mut cart)?;
//! ```
//!
//! The `fetch` feature adds [`catalog::CatalogSource`] for loading the
//! sheet over HTTP; the `storage` feature adds [`cart::CartSession`] for
//! persisting the cart across sessions.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod price;
pub mod sheet;

pub use error::CommerceError;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::price::Price;

    // Sheet
    pub use crate::sheet::RawRow;

    // Catalog
    pub use crate::catalog::{Normalizer, Product};
    #[cfg(feature = "fetch")]
    pub use crate::catalog::CatalogSource;

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSnapshot, PersistedCart};
    #[cfg(feature = "storage")]
    pub use crate::cart::{CartSession, CART_KEY};

    // Checkout
    pub use crate::checkout::CheckoutConfig;
}
