use bookhaven_catalog::{Book, Criteria, Discount, PriceRange, SortKey};
use serde::{Deserialize, Serialize};

/// Query string accepted by the browse listing.
///
/// Every field is optional; an omitted field does not restrict the listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrowseParams {
    /// Free-text search over title, author, and description
    pub q: Option<String>,
    /// Comma-separated category names
    pub categories: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub bestsellers: Option<bool>,
    pub new_releases: Option<bool>,
    /// Sort key wire name; unknown names keep catalog order
    pub sort: Option<String>,
}

impl BrowseParams {
    pub fn into_criteria(self) -> Criteria {
        let categories = self
            .categories
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Criteria {
            text: self.q.unwrap_or_default(),
            categories,
            price: PriceRange::from_dollars(self.min_price, self.max_price),
            in_stock_only: self.in_stock.unwrap_or(false),
            bestsellers_only: self.bestsellers.unwrap_or(false),
            new_releases_only: self.new_releases.unwrap_or(false),
            sort: self
                .sort
                .as_deref()
                .map(SortKey::parse_or_default)
                .unwrap_or_default(),
        }
    }
}

/// Result page of the browse listing.
#[derive(Debug, Serialize)]
pub struct BrowseResponse<'a> {
    /// Size of the whole catalog
    pub total: usize,
    /// Number of books matching the criteria
    pub count: usize,
    pub sort: SortKey,
    pub books: Vec<&'a Book>,
}

/// A single book with the values its detail page derives from it.
#[derive(Debug, Serialize)]
pub struct BookDetail<'a> {
    pub book: &'a Book,
    pub discount: Option<Discount>,
    pub related: Vec<&'a Book>,
}
