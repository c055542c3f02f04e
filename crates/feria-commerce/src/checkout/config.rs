//! Checkout configuration and link building.

use serde::Deserialize;

use crate::cart::Cart;
use crate::catalog::Product;
use crate::checkout::link;
use crate::error::CommerceError;

/// Default deep-link base for the messaging service.
pub const DEFAULT_BASE_URL: &str = "https://wa.me";
/// Default greeting prepended to order messages.
pub const DEFAULT_GREETING: &str = "Hola, quiero hacer este pedido:";
/// Default template for single-product inquiries.
pub const DEFAULT_INQUIRY_TEMPLATE: &str = "Hola, quiero información del producto: {product}";
/// Placeholder replaced by the product name in inquiry templates.
pub const PRODUCT_PLACEHOLDER: &str = "{product}";

/// Checkout behavior: destination, message shape, and post-checkout policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Destination phone number, international digits-only form.
    pub phone: String,
    /// Deep-link base URL.
    pub base_url: String,
    /// Whether a successful checkout empties the cart.
    pub clear_on_checkout: bool,
    /// Line prepended to the order summary; empty disables it.
    pub greeting: String,
    /// Message template for per-product inquiries.
    pub inquiry_template: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            phone: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            clear_on_checkout: true,
            greeting: DEFAULT_GREETING.to_string(),
            inquiry_template: DEFAULT_INQUIRY_TEMPLATE.to_string(),
        }
    }
}

impl CheckoutConfig {
    /// Config for a destination number with default policies.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Use a custom deep-link base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set whether checkout clears the cart afterward.
    pub fn with_clear_on_checkout(mut self, clear: bool) -> Self {
        self.clear_on_checkout = clear;
        self
    }

    /// Use a custom greeting; an empty string disables it.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Use a custom inquiry template containing `{product}`.
    pub fn with_inquiry_template(mut self, template: impl Into<String>) -> Self {
        self.inquiry_template = template.into();
        self
    }

    /// Deep link carrying the formatted order for `cart`.
    ///
    /// Fails with `EmptyCart` when there is nothing to order.
    pub fn order_link(&self, cart: &Cart) -> Result<String, CommerceError> {
        let summary = cart.format_order_summary()?;
        let message = if self.greeting.is_empty() {
            summary
        } else {
            format!("{}\n{}", self.greeting, summary)
        };
        Ok(link::message_link(&self.base_url, &self.phone, &message))
    }

    /// Deep link asking about a single product.
    pub fn inquiry_link(&self, product: &Product) -> String {
        let message = self
            .inquiry_template
            .replace(PRODUCT_PLACEHOLDER, &product.name);
        link::message_link(&self.base_url, &self.phone, &message)
    }

    /// Produce the order link, then apply the post-checkout policy.
    ///
    /// No response is awaited from the messaging service; success is
    /// assumed once the link is produced.
    pub fn checkout(&self, cart: &mut Cart) -> Result<String, CommerceError> {
        let link = self.order_link(cart)?;
        if self.clear_on_checkout {
            cart.clear();
        }
        Ok(link)
    }
}
