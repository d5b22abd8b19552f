//! Listing card data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CommerceError;
use crate::ids::ShoeSlug;
use crate::money::{Currency, Money};
use crate::release::{parse_release_date, release_date_from_millis};

/// Everything a listing card needs to display one shoe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeListing {
    /// Unique slug, also used for the detail link.
    pub slug: ShoeSlug,
    /// Display name.
    pub name: String,
    /// Product image URI.
    pub image_src: String,
    /// Base price.
    pub price: Money,
    /// Discounted price, present only when the shoe is on sale.
    pub sale_price: Option<Money>,
    /// When the shoe was released.
    pub release_date: DateTime<Utc>,
    /// Number of colorways available.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Create a listing at full price.
    pub fn new(
        slug: ShoeSlug,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        release_date: DateTime<Utc>,
        num_of_colors: u32,
    ) -> Self {
        Self {
            slug,
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    /// Set a sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Detail page link for this listing.
    pub fn href(&self) -> String {
        self.slug.detail_path()
    }

    /// Check if a sale price is present.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Build a listing from its wire form, pricing amounts in `currency`.
    pub fn from_record(record: ListingRecord, currency: Currency) -> Result<Self, CommerceError> {
        let slug = ShoeSlug::new(record.slug)?;

        if record.price < 0 {
            return Err(CommerceError::NegativeAmount {
                slug: slug.into_inner(),
                field: "price",
                amount: record.price,
            });
        }

        if let Some(sale) = record.sale_price {
            if sale < 0 {
                return Err(CommerceError::NegativeAmount {
                    slug: slug.into_inner(),
                    field: "salePrice",
                    amount: sale,
                });
            }
            if sale >= record.price {
                warn!(
                    slug = %slug,
                    price = record.price,
                    sale_price = sale,
                    "sale price is not below base price"
                );
            }
        }

        Ok(Self {
            release_date: record.release_date.to_datetime()?,
            slug,
            name: record.name,
            image_src: record.image_src,
            price: Money::new(record.price, currency),
            sale_price: record.sale_price.map(|cents| Money::new(cents, currency)),
            num_of_colors: record.num_of_colors,
        })
    }

    /// Parse a JSON array of listing records.
    pub fn parse_json_array(json: &str, currency: Currency) -> Result<Vec<Self>, CommerceError> {
        let records: Vec<ListingRecord> = serde_json::from_str(json)?;
        records
            .into_iter()
            .map(|record| Self::from_record(record, currency))
            .collect()
    }
}

/// Listing as it arrives from a catalog feed.
///
/// Prices are integer minor units; the currency is supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: i64,
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: ReleaseDateInput,
    #[serde(default)]
    pub num_of_colors: u32,
}

/// Release date in either of the forms catalog feeds use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReleaseDateInput {
    /// Unix epoch milliseconds.
    Millis(i64),
    /// RFC 3339 timestamp or `YYYY-MM-DD` date.
    Text(String),
}

impl ReleaseDateInput {
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, CommerceError> {
        match self {
            ReleaseDateInput::Millis(ms) => release_date_from_millis(*ms),
            ReleaseDateInput::Text(s) => parse_release_date(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> ListingRecord {
        ListingRecord {
            slug: "tech-challenge-777".to_string(),
            name: "NikeCourt Tech Challenge 20".to_string(),
            image_src: "/assets/tech-challenge-777.jpg".to_string(),
            price: 16500,
            sale_price: None,
            release_date: ReleaseDateInput::Text("2020-01-01".to_string()),
            num_of_colors: 2,
        }
    }

    #[test]
    fn test_from_record() {
        let listing = ShoeListing::from_record(record(), Currency::USD).unwrap();
        assert_eq!(listing.slug.as_str(), "tech-challenge-777");
        assert_eq!(listing.price, Money::new(16500, Currency::USD));
        assert_eq!(listing.sale_price, None);
        assert_eq!(
            listing.release_date,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(listing.href(), "/shoe/tech-challenge-777");
        assert!(!listing.is_on_sale());
    }

    #[test]
    fn test_from_record_with_sale() {
        let mut r = record();
        r.sale_price = Some(12999);
        let listing = ShoeListing::from_record(r, Currency::USD).unwrap();
        assert_eq!(listing.sale_price, Some(Money::new(12999, Currency::USD)));
        assert!(listing.is_on_sale());
    }

    #[test]
    fn test_from_record_rejects_negative_price() {
        let mut r = record();
        r.price = -1;
        let err = ShoeListing::from_record(r, Currency::USD).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::NegativeAmount { field: "price", amount: -1, .. }
        ));
    }

    #[test]
    fn test_from_record_rejects_negative_sale_price() {
        let mut r = record();
        r.sale_price = Some(-500);
        let err = ShoeListing::from_record(r, Currency::USD).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::NegativeAmount { field: "salePrice", .. }
        ));
    }

    #[test]
    fn test_from_record_rejects_blank_slug() {
        let mut r = record();
        r.slug = String::new();
        assert!(matches!(
            ShoeListing::from_record(r, Currency::USD),
            Err(CommerceError::InvalidSlug(_))
        ));
    }

    #[test]
    fn test_parse_json_array() {
        let json = r#"[
            {
                "slug": "pegasus",
                "name": "Nike Air Zoom Pegasus",
                "imageSrc": "/assets/pegasus.jpg",
                "price": 12000,
                "releaseDate": 1577836800000,
                "numOfColors": 1
            },
            {
                "slug": "react-infinity",
                "name": "Nike React Infinity Run",
                "imageSrc": "/assets/react-infinity.jpg",
                "price": 16000,
                "salePrice": 14000,
                "releaseDate": "2019-06-01T00:00:00Z",
                "numOfColors": 4
            }
        ]"#;

        let listings = ShoeListing::parse_json_array(json, Currency::USD).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(
            listings[0].release_date,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(listings[1].sale_price.map(|m| m.amount_cents), Some(14000));
        assert_eq!(listings[1].num_of_colors, 4);
    }

    #[test]
    fn test_parse_json_array_bad_date() {
        let json = r#"[{"slug":"x","name":"X","imageSrc":"/x.jpg","price":1,"releaseDate":"soon"}]"#;
        assert!(matches!(
            ShoeListing::parse_json_array(json, Currency::USD),
            Err(CommerceError::InvalidReleaseDate(_))
        ));
    }

    #[test]
    fn test_parse_json_array_malformed() {
        assert!(matches!(
            ShoeListing::parse_json_array("{", Currency::USD),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
