//! Listing grid.

use chrono::{DateTime, Utc};
use shoe_commerce::{ReleaseWindow, ShoeListing};
use tracing::debug;

use crate::card::render_listing_card;
use crate::node::{Element, Node};

/// Render every listing as a card, in input order.
pub fn render_listing_grid(
    listings: &[ShoeListing],
    now: DateTime<Utc>,
    window: ReleaseWindow,
) -> Node {
    debug!(count = listings.len(), window_days = window.days, "rendering listing grid");

    listings
        .iter()
        .fold(Element::new("div").class("shoe-grid"), |grid, listing| {
            grid.child(render_listing_card(listing, now, window))
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shoe_commerce::{Currency, Money, ShoeSlug};

    fn shoe(slug: &str) -> ShoeListing {
        ShoeListing::new(
            ShoeSlug::new(slug).unwrap(),
            slug.to_uppercase(),
            format!("/assets/{}.jpg", slug),
            Money::new(10000, Currency::USD),
            Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
            1,
        )
    }

    #[test]
    fn test_grid_keeps_order() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let grid = render_listing_grid(&[shoe("b"), shoe("a")], now, ReleaseWindow::default());
        let el = grid.as_element().unwrap();
        assert!(el.has_class("shoe-grid"));
        let hrefs: Vec<_> = el
            .children
            .iter()
            .filter_map(|c| c.as_element())
            .filter_map(|c| c.get_attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/shoe/b", "/shoe/a"]);
    }

    #[test]
    fn test_empty_grid() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let grid = render_listing_grid(&[], now, ReleaseWindow::default());
        assert_eq!(grid.to_html(), r#"<div class="shoe-grid"></div>"#);
    }
}
