//! Catalog types and formatting rules for shoe listings.
//!
//! This crate provides the data side of a listing card:
//!
//! - **Catalog**: `ShoeListing` and its wire form `ListingRecord`
//! - **Money**: minor-unit amounts with per-currency formatting
//! - **Release**: the "just released" recency window
//! - **Text**: count labels such as "3 Colors"
//!
//! # Example
//!
//! ```rust
//! use shoe_commerce::prelude::*;
//!
//! let price = Money::new(12999, Currency::USD);
//! assert_eq!(format_price(price), "$129.99");
//! assert_eq!(pluralize("Color", 1), "1 Color");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod release;
pub mod text;

pub mod catalog;

pub use catalog::{ListingRecord, ReleaseDateInput, ShoeListing};
pub use error::CommerceError;
pub use ids::ShoeSlug;
pub use money::{format_price, Currency, Money};
pub use release::{parse_release_date, ReleaseWindow};
pub use text::pluralize;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{ListingRecord, ReleaseDateInput, ShoeListing};
    pub use crate::error::CommerceError;
    pub use crate::ids::ShoeSlug;
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::release::{parse_release_date, ReleaseWindow};
    pub use crate::text::pluralize;
}
