//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoe_commerce::release::DEFAULT_NEW_RELEASE_DAYS;
use shoe_commerce::{Currency, ReleaseWindow};

/// Configuration file (`shoecard.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardConfig {
    /// Release window settings.
    #[serde(default)]
    pub release: ReleaseConfig,

    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CardConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Window used to decide whether a shoe is newly released.
    pub fn release_window(&self) -> ReleaseWindow {
        ReleaseWindow::days(self.release.new_release_days)
    }

    /// Currency that listing prices are denominated in.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.catalog.currency)
            .context("Invalid [catalog] currency in config")
    }
}

/// Release window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Days after release during which a shoe is tagged "Just released!".
    #[serde(default = "default_new_release_days")]
    pub new_release_days: u32,
}

fn default_new_release_days() -> u32 {
    DEFAULT_NEW_RELEASE_DAYS
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            new_release_days: default_new_release_days(),
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// ISO currency code for listing prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Generate a default shoecard.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# shoecard configuration

[release]
# Shoes released within this many days are tagged "Just released!"
new_release_days = {days}

[catalog]
# Currency of listing prices (amounts are in minor units, e.g. cents)
currency = "{currency}"
"#,
        days = DEFAULT_NEW_RELEASE_DAYS,
        currency = default_currency()
    )
}
