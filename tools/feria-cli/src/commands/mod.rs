//! CLI command implementations.

pub mod inquiry;
pub mod order;
pub mod preview;

use clap::Args;

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Path to a CSV sheet export.
    pub file: String,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Path to a CSV sheet export.
    pub file: String,

    /// Item to add, as NAME or NAME:QTY.
    #[arg(short, long, value_name = "ITEM")]
    pub add: Vec<String>,

    /// WhatsApp number to send the order to (overrides config).
    #[arg(short, long)]
    pub number: Option<String>,
}

/// Arguments for the inquiry command.
#[derive(Args)]
pub struct InquiryArgs {
    /// Path to a CSV sheet export.
    pub file: String,

    /// Product name exactly as it appears in the catalog.
    pub product: String,

    /// WhatsApp number to ask (overrides config).
    #[arg(short, long)]
    pub number: Option<String>,
}
