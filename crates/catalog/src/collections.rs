//! Category pages: a real category or one of the flagged collections.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::Book;

/// Slugs that name a flagged subset rather than a category record.
pub const SPECIAL_COLLECTIONS: [&str; 3] = ["bestsellers", "new-releases", "featured"];

/// Books gathered under one category page.
#[derive(Debug, Clone, Serialize)]
pub struct Collection<'a> {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub books: Vec<&'a Book>,
}

/// Live figures for a collection's member books.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub in_stock: usize,
    /// Mean rating rounded to one decimal; zero for an empty collection
    pub average_rating: f32,
}

impl Collection<'_> {
    pub fn stats(&self) -> CollectionStats {
        CollectionStats::of(&self.books)
    }
}

impl CollectionStats {
    pub fn of(books: &[&Book]) -> Self {
        let total = books.len();
        let in_stock = books.iter().filter(|book| book.in_stock).count();
        let average_rating = if total == 0 {
            0.0
        } else {
            let sum: f64 = books.iter().map(|book| f64::from(book.rating)).sum();
            ((sum / total as f64) * 10.0).round() as f32 / 10.0
        };

        Self {
            total,
            in_stock,
            average_rating,
        }
    }
}

impl Catalog {
    /// Resolve a category page slug.
    pub fn collection(&self, slug: &str) -> Option<Collection<'_>> {
        let (title, description, books) = match slug {
            "bestsellers" => (
                "Bestsellers".to_string(),
                "The most popular books loved by readers worldwide".to_string(),
                self.bestsellers(),
            ),
            "new-releases" => (
                "New Releases".to_string(),
                "Fresh arrivals and latest publications".to_string(),
                self.new_releases(),
            ),
            "featured" => (
                "Featured Books".to_string(),
                "Hand-picked selections from our editorial team".to_string(),
                self.featured(),
            ),
            _ => {
                let category = self.category_by_slug(slug)?;
                (
                    category.name.clone(),
                    category.description.clone(),
                    self.books_in_category(&category.name),
                )
            }
        };

        Some(Collection {
            slug: slug.to_string(),
            title,
            description,
            books,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_category_slug() {
        let collection = Catalog::seeded().collection("science-fiction").unwrap();
        assert_eq!(collection.title, "Science Fiction");
        assert_eq!(collection.books.len(), 1);
        assert_eq!(collection.books[0].id, "2");
    }

    #[test]
    fn resolves_special_collections() {
        let catalog = Catalog::seeded();
        for slug in SPECIAL_COLLECTIONS {
            let collection = catalog.collection(slug).unwrap();
            assert!(!collection.books.is_empty(), "{slug}");
        }
        assert_eq!(catalog.collection("bestsellers").unwrap().title, "Bestsellers");
    }

    #[test]
    fn unknown_slug_is_absent() {
        assert!(Catalog::seeded().collection("poetry").is_none());
    }

    #[test]
    fn stats_average_rounds_to_one_decimal() {
        let featured = Catalog::seeded().collection("featured").unwrap();
        let stats = featured.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_stock, 3);
        // (4.8 + 4.6 + 4.7) / 3 = 4.7
        assert!((stats.average_rating - 4.7).abs() < 1e-6);

        let bestsellers = Catalog::seeded().collection("bestsellers").unwrap();
        // (4.8 + 4.9) / 2 = 4.85
        assert!((bestsellers.stats().average_rating - 4.9).abs() < 1e-6);
    }

    #[test]
    fn empty_collection_stats_are_zero() {
        let stats = CollectionStats::of(&[]);
        assert_eq!(
            stats,
            CollectionStats {
                total: 0,
                in_stock: 0,
                average_rating: 0.0
            }
        );
    }
}
