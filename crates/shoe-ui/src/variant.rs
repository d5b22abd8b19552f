//! Display variant selection.
//!
//! A card is shown in exactly one of three states. A shoe can be both
//! discounted and recently released; the sale state wins in that case, never
//! the reverse.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shoe_commerce::{Money, ReleaseWindow, ShoeListing};
use std::fmt;
use tracing::debug;

use crate::tokens::{Color, GRAY_700, PRIMARY, SECONDARY};

/// Which presentation a listing card uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    NewRelease,
    OnSale,
    Default,
}

impl DisplayVariant {
    /// Pick the variant from the sale price and release date.
    pub fn resolve(
        sale_price: Option<Money>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
        window: ReleaseWindow,
    ) -> Self {
        if sale_price.is_some() {
            DisplayVariant::OnSale
        } else if window.is_new(release_date, now) {
            DisplayVariant::NewRelease
        } else {
            DisplayVariant::Default
        }
    }

    /// Pick the variant for a listing.
    pub fn for_listing(listing: &ShoeListing, now: DateTime<Utc>, window: ReleaseWindow) -> Self {
        let variant = Self::resolve(listing.sale_price, listing.release_date, now, window);
        debug!(slug = %listing.slug, variant = %variant, "resolved display variant");
        variant
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayVariant::NewRelease => "new-release",
            DisplayVariant::OnSale => "on-sale",
            DisplayVariant::Default => "default",
        }
    }

    pub fn tag_text(&self) -> Option<&'static str> {
        match self {
            DisplayVariant::NewRelease => Some("Just released!"),
            DisplayVariant::OnSale => Some("Sale"),
            DisplayVariant::Default => None,
        }
    }

    pub fn tag_color(&self) -> Option<Color> {
        match self {
            DisplayVariant::NewRelease => Some(SECONDARY),
            DisplayVariant::OnSale => Some(PRIMARY),
            DisplayVariant::Default => None,
        }
    }

    /// `text-decoration` for the base price.
    pub fn price_decoration(&self) -> &'static str {
        match self {
            DisplayVariant::OnSale => "line-through",
            DisplayVariant::NewRelease | DisplayVariant::Default => "none",
        }
    }

    /// `color` for the base price.
    pub fn price_color(&self) -> &'static str {
        match self {
            DisplayVariant::OnSale => GRAY_700.as_css(),
            DisplayVariant::NewRelease | DisplayVariant::Default => "inherit",
        }
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
