//! Shoe listing card renderer.

use chrono::{DateTime, Utc};
use shoe_commerce::{format_price, pluralize, ReleaseWindow, ShoeListing};

use crate::node::{Element, Node};
use crate::primitives::{spacer, visually_hidden};
use crate::tokens::{Color, Weight, GRAY_700, GRAY_900, PRIMARY, WHITE};
use crate::variant::DisplayVariant;

/// Space between the image and the text rows.
pub const IMAGE_GAP_PX: u32 = 12;

/// Label read to assistive technology before the sale price.
pub const SALE_PRICE_LABEL: &str = "Sale price: ";

pub(crate) const LINK_STYLES: &[(&str, &str)] =
    &[("text-decoration", "none"), ("color", "inherit")];

pub(crate) const IMAGE_WRAPPER_STYLES: &[(&str, &str)] = &[("position", "relative")];

pub(crate) const TAG_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("padding", "6px 10px"),
    ("font-size", "0.875rem"),
    ("font-weight", "600"),
    ("right", "-8px"),
    ("top", "12px"),
    ("border-radius", "2px"),
];

pub(crate) const IMAGE_STYLES: &[(&str, &str)] =
    &[("width", "100%"), ("border-radius", "16px 16px 8px 8px")];

pub(crate) const ROW_STYLES: &[(&str, &str)] = &[
    ("font-size", "1rem"),
    ("display", "flex"),
    ("justify-content", "space-between"),
    ("position", "relative"),
];

pub(crate) const SALE_PRICE_STYLES: &[(&str, &str)] =
    &[("position", "absolute"), ("right", "0"), ("top", "1.4rem")];

/// Presentation attributes derived from a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub variant: DisplayVariant,
    pub tag_text: Option<&'static str>,
    pub tag_color: Option<Color>,
}

impl CardStyle {
    pub fn from_variant(variant: DisplayVariant) -> Self {
        Self {
            variant,
            tag_text: variant.tag_text(),
            tag_color: variant.tag_color(),
        }
    }

    pub fn is_on_sale(&self) -> bool {
        self.variant == DisplayVariant::OnSale
    }
}

/// Resolve the variant for `listing` and render its card.
pub fn render_listing_card(
    listing: &ShoeListing,
    now: DateTime<Utc>,
    window: ReleaseWindow,
) -> Node {
    let variant = DisplayVariant::for_listing(listing, now, window);
    render_shoe_card(listing, &CardStyle::from_variant(variant))
}

/// Render a card for an already resolved style.
///
/// The whole card is a link to `/shoe/{slug}`. The badge exists only when
/// the style carries tag text, and the sale price only for the on-sale
/// variant with a sale price to show.
pub fn render_shoe_card(listing: &ShoeListing, style: &CardStyle) -> Node {
    let image_wrapper = Element::new("div")
        .class("shoe-card__image-wrapper")
        .styles(IMAGE_WRAPPER_STYLES)
        .maybe_child(render_tag(style))
        .child(
            Element::new("img")
                .class("shoe-card__image")
                .attr("alt", "")
                .attr("src", listing.image_src.as_str())
                .styles(IMAGE_STYLES),
        );

    let price = Element::new("span")
        .class("shoe-card__price")
        .style("text-decoration", style.variant.price_decoration())
        .style("color", style.variant.price_color())
        .text(format_price(listing.price));

    let sale_price = match (style.is_on_sale(), listing.sale_price) {
        (true, Some(sale)) => Some(
            Element::new("span")
                .class("shoe-card__sale-price")
                .styles(SALE_PRICE_STYLES)
                .style("font-weight", Weight::Medium)
                .style("color", PRIMARY)
                .child(visually_hidden(Node::text(SALE_PRICE_LABEL)))
                .text(format_price(sale)),
        ),
        _ => None,
    };

    let price_row = Element::new("div")
        .class("shoe-card__row")
        .styles(ROW_STYLES)
        .child(
            Element::new("h3")
                .class("shoe-card__name")
                .style("font-weight", Weight::Medium)
                .style("color", GRAY_900)
                .text(listing.name.as_str()),
        )
        .child(price)
        .maybe_child(sale_price);

    let color_row = Element::new("div")
        .class("shoe-card__row")
        .styles(ROW_STYLES)
        .child(
            Element::new("p")
                .class("shoe-card__color-info")
                .style("color", GRAY_700)
                .text(pluralize("Color", listing.num_of_colors)),
        );

    Element::new("a")
        .class("shoe-card")
        .attr("href", listing.href())
        .attr("data-variant", style.variant.as_str())
        .styles(LINK_STYLES)
        .child(
            Element::new("article")
                .class("shoe-card__wrapper")
                .child(image_wrapper)
                .child(spacer(IMAGE_GAP_PX))
                .child(price_row)
                .child(color_row),
        )
        .into()
}

fn render_tag(style: &CardStyle) -> Option<Element> {
    let text = style.tag_text?;
    let mut tag = Element::new("div").class("shoe-card__tag").styles(TAG_STYLES);
    if let Some(color) = style.tag_color {
        tag = tag.style("background-color", color);
    }
    Some(tag.style("color", WHITE).text(text))
}
