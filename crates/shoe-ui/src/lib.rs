//! Listing card view for the shoe catalog.
//!
//! This crate turns a [`ShoeListing`](shoe_commerce::ShoeListing) into a
//! visual tree:
//!
//! - `DisplayVariant` - new-release / on-sale / default selection
//! - `render_shoe_card` / `render_listing_card` - the card itself
//! - `render_listing_grid` - a grid of cards
//! - `Node` - the tree, with HTML serialization
//! - `ShoeCard` - a Leptos component (feature `leptos`)
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use shoe_commerce::prelude::*;
//! use shoe_ui::render_listing_card;
//!
//! let listing = ShoeListing::new(
//!     ShoeSlug::new("pegasus").unwrap(),
//!     "Nike Air Zoom Pegasus",
//!     "/assets/pegasus.jpg",
//!     Money::new(16500, Currency::USD),
//!     Utc::now(),
//!     3,
//! );
//!
//! let html = render_listing_card(&listing, Utc::now(), ReleaseWindow::default()).to_html();
//! assert!(html.contains("Just released!"));
//! ```

pub mod card;
pub mod grid;
pub mod node;
pub mod primitives;
pub mod tokens;
pub mod variant;

#[cfg(feature = "leptos")]
mod component;

pub use card::{render_listing_card, render_shoe_card, CardStyle};
pub use grid::render_listing_grid;
pub use node::{Element, Node};
pub use variant::DisplayVariant;

#[cfg(feature = "leptos")]
pub use component::{ShoeCard, ShoeCardProps};
