use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{Author, Book, Category};
use crate::{seed, slug};

static SEEDED: Lazy<Catalog> = Lazy::new(|| Catalog {
    books: seed::books(),
    categories: seed::categories(),
    authors: seed::authors(),
});

/// Reasons a set of records cannot form a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate book id '{0}'")]
    DuplicateId(String),

    #[error("book '{id}' has an original price below its price")]
    NegativeDiscount { id: String },

    #[error("book '{id}' references unknown category '{category}'")]
    UnknownCategory { id: String, category: String },
}

/// Read-only collection of books, categories, and authors.
///
/// Every accessor borrows from the catalog; nothing here mutates it after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    categories: Vec<Category>,
    authors: Vec<Author>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness, discounts, and category references.
    pub fn new(
        books: Vec<Book>,
        categories: Vec<Category>,
        authors: Vec<Author>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            books,
            categories,
            authors,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog loaded from the built-in sample records.
    pub fn seeded() -> &'static Catalog {
        &SEEDED
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let known_categories: HashSet<&str> =
            self.categories.iter().map(|c| c.name.as_str()).collect();
        let mut seen = HashSet::with_capacity(self.books.len());

        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
            if book.original_price.is_some_and(|original| original < book.price) {
                return Err(CatalogError::NegativeDiscount {
                    id: book.id.clone(),
                });
            }
            if !known_categories.contains(book.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    id: book.id.clone(),
                    category: book.category.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Books whose category name matches exactly.
    pub fn books_in_category(&self, category: &str) -> Vec<&Book> {
        self.books_where(|book| book.category == category)
    }

    /// Books whose author name matches exactly.
    pub fn books_by_author(&self, author: &str) -> Vec<&Book> {
        self.books_where(|book| book.author == author)
    }

    pub fn featured(&self) -> Vec<&Book> {
        self.books_where(|book| book.featured)
    }

    pub fn bestsellers(&self) -> Vec<&Book> {
        self.books_where(|book| book.bestseller)
    }

    pub fn new_releases(&self) -> Vec<&Book> {
        self.books_where(|book| book.new_release)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| slug::slugify(&category.name) == slug)
    }

    pub fn author(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.name == name)
    }

    pub fn author_by_slug(&self, slug: &str) -> Option<&Author> {
        self.authors
            .iter()
            .find(|author| slug::slugify(&author.name) == slug)
    }

    /// Authors whose name or biography contains `query`, ignoring case.
    pub fn search_authors(&self, query: &str) -> Vec<&Author> {
        let needle = query.to_lowercase();
        self.authors
            .iter()
            .filter(|author| {
                author.name.to_lowercase().contains(&needle)
                    || author.bio.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Other books sharing the category or the author of `book`, in catalog order.
    pub fn related(&self, book: &Book, limit: usize) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|other| {
                other.id != book.id
                    && (other.category == book.category || other.author == book.author)
            })
            .take(limit)
            .collect()
    }

    fn books_where(&self, predicate: impl Fn(&Book) -> bool) -> Vec<&Book> {
        self.books.iter().filter(|book| predicate(book)).collect()
    }
}
