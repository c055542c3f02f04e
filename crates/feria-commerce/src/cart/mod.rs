//! Shopping cart module.
//!
//! The cart engine itself is storage-agnostic; enable the `storage` feature
//! for a session wrapper that persists across opens.

mod cart;
#[cfg(feature = "storage")]
mod session;

pub use cart::{Cart, CartLine, CartSnapshot, PersistedCart};
#[cfg(feature = "storage")]
pub use session::{CartSession, CART_KEY};
