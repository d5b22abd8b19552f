//! Variant command.

use anyhow::Result;
use serde::Serialize;
use shoe_commerce::{format_price, ShoeListing};
use shoe_ui::DisplayVariant;

use super::{resolve_now, VariantArgs};
use crate::context::Context;
use crate::output::variant_badge;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariantRow {
    slug: String,
    variant: DisplayVariant,
    tag: Option<&'static str>,
    price: String,
    sale_price: Option<String>,
}

impl VariantRow {
    fn new(listing: &ShoeListing, variant: DisplayVariant) -> Self {
        Self {
            slug: listing.slug.to_string(),
            variant,
            tag: variant.tag_text(),
            price: format_price(listing.price),
            sale_price: listing.sale_price.map(format_price),
        }
    }
}

pub fn run(args: VariantArgs, ctx: &Context) -> Result<()> {
    let listings = ctx.load_listings(&args.listings)?;
    let now = resolve_now(args.now.as_deref())?;
    let window = ctx.config.release_window();

    let rows: Vec<VariantRow> = listings
        .iter()
        .map(|l| VariantRow::new(l, DisplayVariant::for_listing(l, now, window)))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Listing variants");
    ctx.output.kv("Evaluated at", &now.to_rfc3339());
    ctx.output.kv("Release window", &format!("{} days", window.days));
    println!();

    let slug_width = rows.iter().map(|r| r.slug.len()).max().unwrap_or(4).max(4);
    ctx.output
        .table_row(&["SLUG", "VARIANT", "PRICE"], &[slug_width, 11, 10]);
    for row in &rows {
        let price = match &row.sale_price {
            Some(sale) => format!("{} -> {}", row.price, sale),
            None => row.price.clone(),
        };
        let badge = variant_badge(row.variant, 11);
        ctx.output.table_row(
            &[row.slug.as_str(), badge.as_str(), price.as_str()],
            &[slug_width, 0, 0],
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shoe_commerce::{Currency, Money, ShoeSlug};

    #[test]
    fn test_variant_row_json() {
        let listing = ShoeListing::new(
            ShoeSlug::new("pegasus").unwrap(),
            "Pegasus",
            "/p.jpg",
            Money::new(12000, Currency::USD),
            Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
            1,
        )
        .with_sale_price(Money::new(9000, Currency::USD));

        let row = VariantRow::new(&listing, DisplayVariant::OnSale);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["slug"], "pegasus");
        assert_eq!(json["variant"], "on-sale");
        assert_eq!(json["tag"], "Sale");
        assert_eq!(json["price"], "$120.00");
        assert_eq!(json["salePrice"], "$90.00");
        assert!(json.get("sale_price").is_none());
    }
}
