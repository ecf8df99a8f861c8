//! In-memory bookstore catalog: seeded records, lookups, and the browse query engine.

pub mod catalog;
pub mod collections;
pub mod models;
pub mod pricing;
pub mod query;
pub mod slug;

mod seed;

pub use catalog::{Catalog, CatalogError};
pub use collections::{Collection, CollectionStats};
pub use models::{Author, Book, Category, Money};
pub use pricing::Discount;
pub use query::{Criteria, PriceRange, SortKey};
