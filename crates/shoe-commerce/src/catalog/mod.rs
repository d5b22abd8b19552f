//! Shoe catalog module.
//!
//! Contains the listing record shown on product cards.

mod listing;

pub use listing::{ListingRecord, ReleaseDateInput, ShoeListing};
