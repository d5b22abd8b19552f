//! Leptos listing card.
//!
//! Emits the same markup as [`crate::card::render_shoe_card`], for apps
//! that mount cards through Leptos instead of serializing the tree.
//! Pass `now` to pin the variant to a point in time; without it the card
//! reads the clock when it is built.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use shoe_commerce::{format_price, pluralize, ReleaseWindow, ShoeListing};

use crate::card::{
    CardStyle, IMAGE_GAP_PX, IMAGE_STYLES, IMAGE_WRAPPER_STYLES, LINK_STYLES, ROW_STYLES,
    SALE_PRICE_LABEL, SALE_PRICE_STYLES, TAG_STYLES,
};
use crate::node::inline_css;
use crate::primitives::{spacer_css, VISUALLY_HIDDEN_STYLES};
use crate::tokens::{Weight, GRAY_700, GRAY_900, PRIMARY, WHITE};
use crate::variant::DisplayVariant;

#[component]
pub fn ShoeCard(
    listing: ShoeListing,
    #[prop(optional)] window: ReleaseWindow,
    #[prop(optional)] now: Option<DateTime<Utc>>,
) -> impl IntoView {
    let now = now.unwrap_or_else(Utc::now);
    let variant = DisplayVariant::for_listing(&listing, now, window);
    let style = CardStyle::from_variant(variant);

    let tag = style.tag_text.map(|text| {
        let mut css = inline_css(TAG_STYLES);
        if let Some(color) = style.tag_color {
            css.push_str(&format!(" background-color: {};", color));
        }
        css.push_str(&format!(" color: {};", WHITE));
        view! { <div class="shoe-card__tag" style=css>{text}</div> }
    });

    let sale_price = match (style.is_on_sale(), listing.sale_price) {
        (true, Some(sale)) => {
            let css = format!(
                "{} font-weight: {}; color: {};",
                inline_css(SALE_PRICE_STYLES),
                Weight::Medium,
                PRIMARY
            );
            let hidden_css = inline_css(VISUALLY_HIDDEN_STYLES);
            let amount = format_price(sale);
            Some(view! {
                <span class="shoe-card__sale-price" style=css>
                    <span class="visually-hidden" style=hidden_css>{SALE_PRICE_LABEL}</span>
                    {amount}
                </span>
            })
        }
        _ => None,
    };

    let href = listing.href();
    let variant_name = variant.as_str();
    let link_css = inline_css(LINK_STYLES);
    let wrapper_css = inline_css(IMAGE_WRAPPER_STYLES);
    let image_css = inline_css(IMAGE_STYLES);
    let spacer = spacer_css(IMAGE_GAP_PX);
    let price_row_css = inline_css(ROW_STYLES);
    let color_row_css = price_row_css.clone();
    let name_css = format!("font-weight: {}; color: {};", Weight::Medium, GRAY_900);
    let price_css = format!(
        "text-decoration: {}; color: {};",
        variant.price_decoration(),
        variant.price_color()
    );
    let color_css = format!("color: {};", GRAY_700);
    let price = format_price(listing.price);
    let colors = pluralize("Color", listing.num_of_colors);
    let ShoeListing { name, image_src, .. } = listing;

    view! {
        <a class="shoe-card" href=href data-variant=variant_name style=link_css>
            <article class="shoe-card__wrapper">
                <div class="shoe-card__image-wrapper" style=wrapper_css>
                    {tag}
                    <img class="shoe-card__image" alt="" src=image_src style=image_css/>
                </div>
                <span class="spacer" style=spacer></span>
                <div class="shoe-card__row" style=price_row_css>
                    <h3 class="shoe-card__name" style=name_css>{name}</h3>
                    <span class="shoe-card__price" style=price_css>{price}</span>
                    {sale_price}
                </div>
                <div class="shoe-card__row" style=color_row_css>
                    <p class="shoe-card__color-info" style=color_css>{colors}</p>
                </div>
            </article>
        </a>
    }
}
