//! CLI command implementations.

pub mod config;
pub mod render;
pub mod variant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use shoe_commerce::parse_release_date;

// ============================================================================
// Render Command
// ============================================================================

#[derive(Args)]
pub struct RenderArgs {
    /// JSON file holding an array of listings
    pub listings: String,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Evaluate release recency at this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub now: Option<String>,

    /// Wrap the grid in a complete HTML document
    #[arg(long)]
    pub document: bool,
}

// ============================================================================
// Variant Command
// ============================================================================

#[derive(Args)]
pub struct VariantArgs {
    /// JSON file holding an array of listings
    pub listings: String,

    /// Evaluate release recency at this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub now: Option<String>,
}

// ============================================================================
// Config Command
// ============================================================================

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default shoecard.toml
    Init {
        /// Output path
        #[arg(default_value = "shoecard.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Reference time for recency checks; the current time unless overridden.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => parse_release_date(s).with_context(|| format!("Invalid --now value: {}", s)),
        None => Ok(Utc::now()),
    }
}
