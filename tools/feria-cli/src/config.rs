//! CLI configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

use feria_commerce::checkout::CheckoutConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path))
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Image shown for products without one.
    #[serde(default)]
    pub image_placeholder: Option<String>,
}
