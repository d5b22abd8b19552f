//! Newtype identifier for catalog entries.
//!
//! The slug is the only identity a listing carries; it doubles as the last
//! path segment of the detail page.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// URL slug identifying a shoe (e.g. `"tech-challenge-777"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeSlug(String);

impl ShoeSlug {
    /// Create a slug, rejecting empty or whitespace-only input.
    ///
    /// No other validation happens here: characters that are unsafe in a
    /// path segment are passed through untouched.
    pub fn new(slug: impl Into<String>) -> Result<Self, CommerceError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(CommerceError::InvalidSlug(slug));
        }
        Ok(Self(slug))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Detail page route for this shoe.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.0)
    }
}

impl fmt::Display for ShoeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ShoeSlug {
    type Error = CommerceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for ShoeSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_creation() {
        let slug = ShoeSlug::new("tech-challenge-777").unwrap();
        assert_eq!(slug.as_str(), "tech-challenge-777");
    }

    #[test]
    fn test_slug_rejects_blank() {
        assert_eq!(
            ShoeSlug::new("  "),
            Err(CommerceError::InvalidSlug("  ".to_string()))
        );
        assert!(ShoeSlug::try_from("").is_err());
    }

    #[test]
    fn test_detail_path_is_not_escaped() {
        let slug = ShoeSlug::new("air max/90").unwrap();
        assert_eq!(slug.detail_path(), "/shoe/air max/90");
    }

    #[test]
    fn test_slug_display() {
        let slug = ShoeSlug::new("react-infinity").unwrap();
        assert_eq!(format!("{}", slug), "react-infinity");
    }
}
