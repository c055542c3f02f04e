//! Key-value persistence for storefront state.
//!
//! Provides a small typed API over the platform key-value store with
//! automatic JSON serialization. The conventional use is a single `"cart"`
//! key holding the persisted cart lines.
//!
//! # Example
//!
//! ```rust,ignore
//! use feria_store::Store;
//!
//! let store = Store::open_default()?;
//!
//! // Store a value
//! store.set("cart", &persisted)?;
//!
//! // Retrieve a value
//! let persisted: Option<PersistedCart> = store.get("cart")?;
//!
//! // Delete a value
//! store.delete("cart")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::{Store, DEFAULT_STORE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
