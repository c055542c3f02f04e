//! Checkout: order formatting policy and messaging deep links.

mod config;
mod link;

pub use config::{
    CheckoutConfig, DEFAULT_BASE_URL, DEFAULT_GREETING, DEFAULT_INQUIRY_TEMPLATE,
    PRODUCT_PLACEHOLDER,
};
pub use link::{encode_message, message_link};
