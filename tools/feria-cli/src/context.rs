//! CLI execution context.

use anyhow::{bail, Context as _, Result};

use feria_commerce::catalog::{Normalizer, Product};
use feria_commerce::checkout::CheckoutConfig;
use feria_commerce::sheet;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            // Try to find config in current directory or parent directories
            None => Self::find_config().unwrap_or_default(),
        };

        Ok(Self { config, output })
    }

    /// Find config file in directory tree.
    fn find_config() -> Option<CliConfig> {
        let config_names = ["feria.toml", ".feria.toml"];

        let mut current = std::env::current_dir().ok()?;
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Normalizer configured from the config file.
    pub fn normalizer(&self) -> Normalizer {
        match &self.config.catalog.image_placeholder {
            Some(placeholder) => Normalizer::new().with_image_placeholder(placeholder),
            None => Normalizer::new(),
        }
    }

    /// Read a sheet export from disk and normalize it into products.
    pub fn load_catalog(&self, path: &str) -> Result<Vec<Product>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sheet file: {}", path))?;
        let rows = sheet::decode(&text);
        self.output.debug(&format!("decoded {} data rows", rows.len()));
        Ok(self.normalizer().normalize(&rows))
    }

    /// Checkout config with an optional number override applied.
    pub fn checkout_config(&self, number: Option<&str>) -> Result<CheckoutConfig> {
        let mut config = self.config.checkout.clone();
        if let Some(number) = number {
            config.phone = number.to_string();
        }
        if config.phone.is_empty() {
            bail!("No WhatsApp number configured; set checkout.phone in feria.toml or pass --number");
        }
        Ok(config)
    }
}
