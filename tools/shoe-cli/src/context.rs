//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shoe_commerce::ShoeListing;
use tracing::debug;

use crate::config::CardConfig;
use crate::output::Output;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["shoecard.toml", ".shoecard.toml", "shoecard.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CardConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CardConfig::load(path)?
        } else {
            Self::find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest file wins; a file that exists but fails to load is an
    /// error rather than a silent fallback to defaults.
    fn find_config(start: &Path) -> Result<Option<CardConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    debug!(path = %config_path.display(), "found config file");
                    let config = CardConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some(config));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Read a JSON array of listing records.
    pub fn load_listings(&self, path: &str) -> Result<Vec<ShoeListing>> {
        let full = self.resolve_path(path);
        let content = std::fs::read_to_string(&full)
            .with_context(|| format!("Failed to read listings file: {}", full.display()))?;

        let currency = self.config.currency()?;
        let listings = ShoeListing::parse_json_array(&content, currency)
            .with_context(|| format!("Invalid listings in {}", full.display()))?;

        self.output
            .debug(&format!("Loaded {} listings from {}", listings.len(), full.display()));
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("shoecard.toml"),
            "[release]\nnew_release_days = 14\n\n[catalog]\ncurrency = \"EUR\"\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("listings");
        std::fs::create_dir(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.release.new_release_days, 14);
        assert_eq!(config.catalog.currency, "EUR");
    }

    #[test]
    fn test_find_config_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("shoecard.toml"),
            "[release]\nnew_release_days = \"14\"\n\n[catalog]\ncurrency = \"EUR\"\n",
        )
        .unwrap();

        let err = Context::find_config(temp_dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
