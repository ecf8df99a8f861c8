//! Browse-view filtering and ordering over the catalog.
//!
//! A book is shown iff every active predicate holds. Predicates left at
//! their defaults (empty text, no categories, unbounded price, flags off)
//! do not restrict anything.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Book, Money};

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Relevance,
    #[serde(rename = "price-low")]
    PriceAscending,
    #[serde(rename = "price-high")]
    PriceDescending,
    #[serde(rename = "rating")]
    RatingDescending,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "title")]
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Relevance,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
        SortKey::Newest,
        SortKey::Title,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::RatingDescending => "rating",
            SortKey::Newest => "newest",
            SortKey::Title => "title",
        }
    }

    /// Parse a wire name, falling back to relevance for anything unknown.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

/// Inclusive price bounds. `max: None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: Money,
    pub max: Option<Money>,
}

impl PriceRange {
    pub const UNBOUNDED: PriceRange = PriceRange {
        min: Money::ZERO,
        max: None,
    };

    pub fn new(min: Money, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// A range no price satisfies.
    pub fn unsatisfiable() -> Self {
        Self {
            min: Money::from_cents(1),
            max: Some(Money::ZERO),
        }
    }

    /// Build from untrusted dollar bounds.
    ///
    /// A missing or negative minimum is zero; an infinite maximum is no bound.
    /// A NaN or `+inf` minimum, and a negative or NaN maximum, can never be met.
    pub fn from_dollars(min: Option<f64>, max: Option<f64>) -> Self {
        let min = match min {
            None => Money::ZERO,
            Some(min) if min.is_nan() || min == f64::INFINITY => return Self::unsatisfiable(),
            Some(min) => Money::from_dollars(min).unwrap_or(Money::ZERO),
        };
        match max {
            None => Self::new(min, None),
            Some(max) if max == f64::INFINITY => Self::new(min, None),
            Some(max) => match Money::from_dollars(max) {
                Some(max) => Self::new(min, Some(max)),
                None => Self::unsatisfiable(),
            },
        }
    }

    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min == Money::ZERO && self.max.is_none()
    }
}

/// The user's current browse selections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    pub text: String,
    pub categories: BTreeSet<String>,
    pub price: PriceRange,
    pub in_stock_only: bool,
    pub bestsellers_only: bool,
    pub new_releases_only: bool,
    pub sort: SortKey,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.categories.insert(name.into());
        self
    }

    pub fn price(mut self, range: PriceRange) -> Self {
        self.price = range;
        self
    }

    pub fn in_stock_only(mut self, enabled: bool) -> Self {
        self.in_stock_only = enabled;
        self
    }

    pub fn bestsellers_only(mut self, enabled: bool) -> Self {
        self.bestsellers_only = enabled;
        self
    }

    pub fn new_releases_only(mut self, enabled: bool) -> Self {
        self.new_releases_only = enabled;
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = key;
        self
    }

    /// Whether `book` satisfies every active predicate.
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_text(book)
            && (self.categories.is_empty() || self.categories.contains(&book.category))
            && self.price.contains(book.price)
            && (!self.in_stock_only || book.in_stock)
            && (!self.bestsellers_only || book.bestseller)
            && (!self.new_releases_only || book.new_release)
    }

    fn matches_text(&self, book: &Book) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        [&book.title, &book.author, &book.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter `books` by `criteria`, then order them by its sort key.
///
/// Equal keys keep their catalog order.
pub fn run<'a>(books: &'a [Book], criteria: &Criteria) -> Vec<&'a Book> {
    let mut matched: Vec<&Book> = books.iter().filter(|book| criteria.matches(book)).collect();

    match criteria.sort {
        SortKey::Relevance => {}
        SortKey::PriceAscending => matched.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDescending => matched.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDescending => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => matched.sort_by(|a, b| b.published_date.cmp(&a.published_date)),
        SortKey::Title => matched.sort_by_cached_key(|book| book.title.to_lowercase()),
    }

    tracing::debug!(
        total = books.len(),
        matched = matched.len(),
        sort = criteria.sort.as_str(),
        "catalog query evaluated"
    );

    matched
}
