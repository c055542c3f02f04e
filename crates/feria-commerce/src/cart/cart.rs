//! Cart engine and line items.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::price::Price;

/// One aggregated cart entry, keyed by product name.
///
/// Name, price, and image are copied from the product at add-time and are
/// not re-synced if the catalog later changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product name, the line's identity.
    pub name: String,
    /// Unit price at add-time.
    pub unit_price: Price,
    /// Image reference at add-time.
    pub image_ref: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(
        name: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity: clamp_quantity(quantity),
        }
    }

    /// Line total at the current quantity.
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// The shopping cart: ordered lines plus a derived total.
///
/// Lines keep insertion order and hold at most one entry per name. The
/// total is recomputed from the lines after every mutation, never adjusted
/// incrementally, so the two cannot drift apart. All mutation goes through
/// the methods here; invalid indices are recoverable no-ops rather than
/// panics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: Price,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging with an existing line of the same name.
    ///
    /// Quantities below 1 are treated as 1. Returns the resulting quantity
    /// for the affected line, for confirmation feedback.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
        quantity: i64,
    ) -> i64 {
        let name = name.into();
        let quantity = clamp_quantity(quantity);
        let resulting = match self.lines.iter_mut().find(|line| line.name == name) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                line.quantity
            }
            None => {
                self.lines
                    .push(CartLine::new(name, unit_price, image_ref, quantity));
                quantity
            }
        };
        self.recompute_total();
        resulting
    }

    /// Add a normalized product.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> i64 {
        self.add_item(
            product.name.clone(),
            product.price,
            product.image_ref.clone(),
            quantity,
        )
    }

    /// Remove the line at `index`.
    ///
    /// Out-of-range indices leave the cart unchanged and return `false`.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.lines.len() {
            warn!(index, lines = self.lines.len(), "remove on missing cart line");
            return false;
        }
        self.lines.remove(index);
        self.recompute_total();
        true
    }

    /// Adjust the quantity of the line at `index` by `delta`, flooring the
    /// result at 1. Quantity changes never remove a line.
    ///
    /// Returns the new quantity, or `None` for an out-of-range index.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Option<i64> {
        let line_count = self.lines.len();
        let Some(line) = self.lines.get_mut(index) else {
            warn!(index, lines = line_count, "quantity change on missing cart line");
            return None;
        };
        line.quantity = clamp_quantity(line.quantity.saturating_add(delta));
        let quantity = line.quantity;
        self.recompute_total();
        Some(quantity)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute_total();
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The derived total.
    pub fn total(&self) -> Price {
        self.total
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Owned read-only view for display layers.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total,
        }
    }

    /// Serializable form for the persistence boundary.
    ///
    /// The total is deliberately not included; it is a pure function of the
    /// lines and is recomputed on restore.
    pub fn to_persistable(&self) -> PersistedCart {
        PersistedCart {
            lines: self.lines.clone(),
        }
    }

    /// Restore a cart from its persisted form.
    ///
    /// Stored quantities are re-coerced to at least 1 and the total is
    /// recomputed, never trusted from storage.
    pub fn from_persistable(persisted: PersistedCart) -> Self {
        let mut cart = Self {
            lines: persisted.lines,
            total: Price::zero(),
        };
        for line in &mut cart.lines {
            line.quantity = clamp_quantity(line.quantity);
        }
        cart.recompute_total();
        cart
    }

    /// Format the order summary: one `{name} x{qty} - ${amount}` line per
    /// cart line, plus a trailing total line.
    ///
    /// An empty cart is an error; callers must not check out without lines.
    pub fn format_order_summary(&self) -> Result<String, CommerceError> {
        if self.lines.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let mut summary: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{} x{} - {}",
                    line.name,
                    line.quantity,
                    line.line_total().display()
                )
            })
            .collect();
        summary.push(format!("Total: {}", self.total.display()));
        Ok(summary.join("\n"))
    }

    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(|line| line.line_total()).sum();
    }
}

/// Read-only cart view handed to display layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Derived total at snapshot time.
    pub total: Price,
}

/// Persisted cart form: the line sequence only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersistedCart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
}

fn clamp_quantity(quantity: i64) -> i64 {
    quantity.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64) -> Product {
        Product {
            name: name.to_string(),
            description: String::new(),
            price: Price::new(price),
            image_ref: "img/placeholder.jpg".to_string(),
        }
    }

    #[test]
    fn test_add_item_creates_line() {
        let mut cart = Cart::new();
        let quantity = cart.add_item("Yogurt", Price::new(5000.0), "img/yogurt.jpg", 1);
        assert_eq!(quantity, 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total(), Price::new(5000.0));
    }

    #[test]
    fn test_add_same_name_merges_lines() {
        let mut cart = Cart::new();
        cart.add_item("X", Price::new(10.0), "img", 1);
        let quantity = cart.add_item("X", Price::new(10.0), "img", 1);
        assert_eq!(quantity, 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Price::new(20.0));
    }

    #[test]
    fn test_add_item_name_is_case_sensitive() {
        let mut cart = Cart::new();
        cart.add_item("Yogurt", Price::new(10.0), "img", 1);
        cart.add_item("yogurt", Price::new(10.0), "img", 1);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_add_item_clamps_quantity_to_one() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("A", Price::new(10.0), "img", 0), 1);
        assert_eq!(cart.add_item("B", Price::new(10.0), "img", -3), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_product_copies_fields() {
        let mut cart = Cart::new();
        cart.add_product(&product("Arepa", 2000.0), 2);
        let line = &cart.lines()[0];
        assert_eq!(line.name, "Arepa");
        assert_eq!(line.unit_price, Price::new(2000.0));
        assert_eq!(line.image_ref, "img/placeholder.jpg");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_remove_item_recomputes_total() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 1);
        cart.add_item("B", Price::new(2000.0), "img", 1);
        assert!(cart.remove_item(0));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].name, "B");
        assert_eq!(cart.total(), Price::new(2000.0));
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 1);
        let before = cart.clone();
        assert!(!cart.remove_item(5));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_change_quantity_applies_delta() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 1);
        assert_eq!(cart.change_quantity(0, 2), Some(3));
        assert_eq!(cart.total(), Price::new(3000.0));
        assert_eq!(cart.change_quantity(0, -1), Some(2));
        assert_eq!(cart.total(), Price::new(2000.0));
    }

    #[test]
    fn test_change_quantity_floors_at_one() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 1);
        assert_eq!(cart.change_quantity(0, -5), Some(1));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total(), Price::new(1000.0));
    }

    #[test]
    fn test_change_quantity_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 1);
        let before = cart.clone();
        assert_eq!(cart.change_quantity(3, 1), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets_total() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 2);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_total_always_equals_sum_of_lines() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1500.0), "img", 2);
        cart.add_item("B", Price::new(2000.0), "img", 1);
        cart.change_quantity(0, 3);
        cart.remove_item(1);
        cart.add_item("C", Price::new(500.0), "img", 4);
        let expected: Price = cart.lines().iter().map(|l| l.line_total()).sum();
        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 2);
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.lines, cart.lines());
        assert_eq!(snapshot.total, cart.total());
    }

    #[test]
    fn test_persist_round_trip() {
        let mut cart = Cart::new();
        cart.add_item("Yogurt", Price::new(5000.0), "img/yogurt.jpg", 2);
        cart.add_item("Arepa", Price::new(2000.0), "img/arepa.jpg", 1);

        let restored = Cart::from_persistable(cart.to_persistable());
        assert_eq!(restored.lines(), cart.lines());
        assert_eq!(restored.total(), cart.total());
    }

    #[test]
    fn test_persisted_form_has_no_total() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::new(1000.0), "img", 1);
        let json = serde_json::to_value(cart.to_persistable()).unwrap();
        assert!(json.get("total").is_none());
        assert_eq!(json["lines"][0]["name"], "A");
    }

    #[test]
    fn test_restore_coerces_stored_quantities() {
        let persisted: PersistedCart = serde_json::from_str(
            r#"{"lines":[{"name":"A","unit_price":1000.0,"image_ref":"img","quantity":0}]}"#,
        )
        .unwrap();
        let cart = Cart::from_persistable(persisted);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total(), Price::new(1000.0));
    }

    #[test]
    fn test_order_summary_format() {
        let mut cart = Cart::new();
        cart.add_item("Yogurt", Price::new(5000.0), "img", 2);
        cart.add_item("Arepa", Price::new(2000.0), "img", 1);
        let summary = cart.format_order_summary().unwrap();
        assert_eq!(
            summary,
            "Yogurt x2 - $10000\nArepa x1 - $2000\nTotal: $12000"
        );
    }

    #[test]
    fn test_order_summary_empty_cart_is_error() {
        let cart = Cart::new();
        assert!(matches!(
            cart.format_order_summary(),
            Err(CommerceError::EmptyCart)
        ));
    }
}
