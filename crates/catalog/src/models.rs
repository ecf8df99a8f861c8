use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;

/// A currency amount held as whole cents.
///
/// Serialized as decimal dollars (`24.99`) so the JSON matches what a
/// storefront displays, while comparisons stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a dollar amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative or non-finite input.
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() || dollars < 0.0 {
            return None;
        }
        Some(Self((dollars * 100.0).round() as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Money::from_dollars(dollars)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {dollars}")))
    }
}

/// A book listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: String,
    pub title: String,
    /// Display name of the author; matches `Author::name` when the author has a profile
    pub author: String,
    pub description: String,
    pub price: Money,
    /// List price before discount, if the book is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Average review score between 0.0 and 5.0
    pub rating: f32,
    pub review_count: u32,
    /// Name of one of the catalog's categories
    pub category: String,
    pub isbn: String,
    pub publisher: String,
    pub published_date: Date,
    pub pages: u32,
    pub language: String,
    pub cover_image: String,
    pub in_stock: bool,
    pub featured: bool,
    pub bestseller: bool,
    pub new_release: bool,
}

/// A browsable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Stored count shown in the directory; not derived from the book list
    pub book_count: u32,
}

/// An author profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub image: String,
    /// Stored count shown in the directory; not derived from the book list
    pub book_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rounds_to_nearest_cent() {
        assert_eq!(Money::from_dollars(24.99), Some(Money::from_cents(2499)));
        assert_eq!(Money::from_dollars(0.005), Some(Money::from_cents(1)));
        assert_eq!(Money::from_dollars(-1.0), None);
        assert_eq!(Money::from_dollars(f64::NAN), None);
    }

    #[test]
    fn money_displays_as_dollars() {
        assert_eq!(Money::from_cents(2499).to_string(), "$24.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
    }

    #[test]
    fn money_serializes_as_decimal() {
        let json = serde_json::to_string(&Money::from_cents(2299)).unwrap();
        assert_eq!(json, "22.99");

        let parsed: Money = serde_json::from_str("28.99").unwrap();
        assert_eq!(parsed, Money::from_cents(2899));
        assert!(serde_json::from_str::<Money>("-3.0").is_err());
    }
}
