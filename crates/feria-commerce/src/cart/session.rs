//! Cart persistence over the key-value store.

use tracing::warn;

use feria_store::Store;

use crate::cart::{Cart, CartSnapshot, PersistedCart};
use crate::catalog::Product;
use crate::checkout::CheckoutConfig;
use crate::error::CommerceError;
use crate::price::Price;

/// Storage key conventionally used for the cart.
pub const CART_KEY: &str = "cart";

/// A cart bound to a persistence key.
///
/// The persisted snapshot is restored at open and rewritten after every
/// mutation. Persistence failures are logged and never fail the cart
/// operation itself; the in-memory cart simply stays ahead of the snapshot
/// until the next successful write.
pub struct CartSession {
    store: Store,
    key: String,
    cart: Cart,
}

impl CartSession {
    /// Open a session, restoring any persisted cart under `key`.
    ///
    /// Missing or unreadable data opens as an empty cart.
    pub fn open(store: Store, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match store.get::<PersistedCart>(&key) {
            Ok(Some(persisted)) => Cart::from_persistable(persisted),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable cart snapshot");
                Cart::new()
            }
        };
        Self { store, key, cart }
    }

    /// Open a session under the conventional cart key.
    pub fn open_default(store: Store) -> Self {
        Self::open(store, CART_KEY)
    }

    /// Add an item and persist. See [`Cart::add_item`].
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
        quantity: i64,
    ) -> i64 {
        let resulting = self.cart.add_item(name, unit_price, image_ref, quantity);
        self.persist();
        resulting
    }

    /// Add a normalized product and persist.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> i64 {
        let resulting = self.cart.add_product(product, quantity);
        self.persist();
        resulting
    }

    /// Remove a line and persist. No-op indices are not re-persisted.
    pub fn remove_item(&mut self, index: usize) -> bool {
        let removed = self.cart.remove_item(index);
        if removed {
            self.persist();
        }
        removed
    }

    /// Adjust a line quantity and persist.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Option<i64> {
        let quantity = self.cart.change_quantity(index, delta);
        if quantity.is_some() {
            self.persist();
        }
        quantity
    }

    /// Empty the cart and delete the stored snapshot.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.delete_snapshot();
    }

    /// The underlying cart, read-only.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Owned read-only view for display layers.
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Produce the order link and apply the post-checkout policy, keeping
    /// the stored snapshot in step with the outcome.
    pub fn checkout(&mut self, config: &CheckoutConfig) -> Result<String, CommerceError> {
        let link = config.checkout(&mut self.cart)?;
        if self.cart.is_empty() {
            self.delete_snapshot();
        } else {
            self.persist();
        }
        Ok(link)
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(&self.key, &self.cart.to_persistable()) {
            warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }

    fn delete_snapshot(&self) {
        if let Err(e) = self.store.delete(&self.key) {
            warn!(key = %self.key, error = %e, "failed to delete cart snapshot");
        }
    }
}
