pub mod models;

use async_trait::async_trait;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use bookhaven_catalog::{query, Book, Catalog, Discount};
use bookhaven_http::error::AppError;
use bookhaven_kernel::{settings::CatalogSettings, InitCtx, Module};
use serde_json::json;

use models::{BookDetail, BrowseParams, BrowseResponse};

/// Browse listing, flagged shelves, and book detail pages
pub struct BooksModule {
    state: BooksState,
}

#[derive(Clone)]
struct BooksState {
    catalog: &'static Catalog,
    related_limit: usize,
    featured_limit: usize,
}

impl BooksModule {
    pub fn new(catalog: &'static Catalog, settings: &CatalogSettings) -> Self {
        Self {
            state: BooksState {
                catalog,
                related_limit: settings.related_limit,
                featured_limit: settings.featured_limit,
            },
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = self.state.catalog.books().len(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(browse))
            .route("/featured", get(featured))
            .route("/bestsellers", get(bestsellers))
            .route("/new-releases", get(new_releases))
            .route("/{id}", get(book_detail))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book_list = json!({
            "description": "Books in catalog order",
            "content": {
                "application/json": {
                    "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } }
                }
            }
        });

        Some(json!({
            "paths": {
                "": {
                    "get": {
                        "summary": "Browse the catalog",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "q", "in": "query", "schema": { "type": "string" } },
                            { "name": "categories", "in": "query", "description": "Comma-separated category names", "schema": { "type": "string" } },
                            { "name": "min_price", "in": "query", "schema": { "type": "number" } },
                            { "name": "max_price", "in": "query", "schema": { "type": "number" } },
                            { "name": "in_stock", "in": "query", "schema": { "type": "boolean" } },
                            { "name": "bestsellers", "in": "query", "schema": { "type": "boolean" } },
                            { "name": "new_releases", "in": "query", "schema": { "type": "boolean" } },
                            {
                                "name": "sort",
                                "in": "query",
                                "schema": {
                                    "type": "string",
                                    "enum": ["relevance", "price-low", "price-high", "rating", "newest", "title"]
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching books",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BrowseResponse" }
                                    }
                                }
                            },
                            "422": {
                                "description": "Malformed query string",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/featured": {
                    "get": { "summary": "Featured books", "tags": ["Books"], "responses": { "200": book_list.clone() } }
                },
                "/bestsellers": {
                    "get": { "summary": "Bestsellers", "tags": ["Books"], "responses": { "200": book_list.clone() } }
                },
                "/new-releases": {
                    "get": { "summary": "New releases", "tags": ["Books"], "responses": { "200": book_list } }
                },
                "/{id}": {
                    "get": {
                        "summary": "Book detail",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Book with discount and related titles",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookDetail" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "description": { "type": "string" },
                            "price": { "type": "number" },
                            "original_price": { "type": "number" },
                            "rating": { "type": "number" },
                            "review_count": { "type": "integer" },
                            "category": { "type": "string" },
                            "isbn": { "type": "string" },
                            "publisher": { "type": "string" },
                            "published_date": { "type": "string", "format": "date" },
                            "pages": { "type": "integer" },
                            "language": { "type": "string" },
                            "cover_image": { "type": "string" },
                            "in_stock": { "type": "boolean" },
                            "featured": { "type": "boolean" },
                            "bestseller": { "type": "boolean" },
                            "new_release": { "type": "boolean" }
                        },
                        "required": ["id", "title", "author", "price", "category"]
                    },
                    "BrowseResponse": {
                        "type": "object",
                        "properties": {
                            "total": { "type": "integer" },
                            "count": { "type": "integer" },
                            "sort": { "type": "string" },
                            "books": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } }
                        },
                        "required": ["total", "count", "sort", "books"]
                    },
                    "BookDetail": {
                        "type": "object",
                        "properties": {
                            "book": { "$ref": "#/components/schemas/Book" },
                            "discount": {
                                "type": ["object", "null"],
                                "properties": {
                                    "savings": { "type": "number" },
                                    "percent": { "type": "integer" }
                                }
                            },
                            "related": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } }
                        },
                        "required": ["book", "related"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

async fn browse(
    State(state): State<BooksState>,
    params: Result<Query<BrowseParams>, QueryRejection>,
) -> Result<Json<BrowseResponse<'static>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        AppError::validation(
            vec![json!({ "field": "query", "error": rejection.body_text() })],
            "invalid browse query",
        )
    })?;

    let criteria = params.into_criteria();
    let books = query::run(state.catalog.books(), &criteria);

    Ok(Json(BrowseResponse {
        total: state.catalog.books().len(),
        count: books.len(),
        sort: criteria.sort,
        books,
    }))
}

async fn featured(State(state): State<BooksState>) -> Json<Vec<&'static Book>> {
    let mut books = state.catalog.featured();
    books.truncate(state.featured_limit);
    Json(books)
}

async fn bestsellers(State(state): State<BooksState>) -> Json<Vec<&'static Book>> {
    Json(state.catalog.bestsellers())
}

async fn new_releases(State(state): State<BooksState>) -> Json<Vec<&'static Book>> {
    Json(state.catalog.new_releases())
}

async fn book_detail(
    State(state): State<BooksState>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail<'static>>, AppError> {
    let book = state
        .catalog
        .book(&id)
        .ok_or_else(|| AppError::not_found(format!("book '{id}' not found")))?;

    Ok(Json(BookDetail {
        book,
        discount: Discount::of(book),
        related: state.catalog.related(book, state.related_limit),
    }))
}

/// Create a new instance of the books module
pub fn create_module(
    catalog: &'static Catalog,
    settings: &CatalogSettings,
) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(catalog, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        BooksModule::new(Catalog::seeded(), &CatalogSettings::default()).routes()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(books: &Value) -> Vec<&str> {
        books
            .as_array()
            .unwrap()
            .iter()
            .map(|book| book["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn browse_without_params_lists_everything() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 6);
        assert_eq!(body["count"], 6);
        assert_eq!(body["sort"], "relevance");
        assert_eq!(ids(&body["books"]), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[tokio::test]
    async fn browse_applies_filters_and_sort() {
        let (status, body) = get_json("/?min_price=25&max_price=30&sort=price-high").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(ids(&body["books"]), vec!["6", "4"]);

        let (_, body) = get_json("/?categories=Mystery%20%26%20Thriller,Romance").await;
        assert_eq!(ids(&body["books"]), vec!["3", "4"]);

        let (_, body) = get_json("/?q=Quantum").await;
        assert_eq!(ids(&body["books"]), vec!["2"]);
    }

    #[tokio::test]
    async fn browse_with_no_matches_is_empty_not_error() {
        let (status, body) = get_json("/?bestsellers=true&new_releases=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert_eq!(body["total"], 6);
    }

    #[tokio::test]
    async fn non_finite_min_price_matches_nothing() {
        for uri in ["/?min_price=inf", "/?min_price=NaN"] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["count"], 0, "{uri}");
            assert_eq!(body["total"], 6, "{uri}");
        }
    }

    #[tokio::test]
    async fn malformed_query_is_rejected() {
        let (status, body) = get_json("/?max_price=cheap").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn flagged_shelves() {
        let (_, body) = get_json("/featured").await;
        assert_eq!(ids(&body), vec!["1", "2", "3"]);

        let (_, body) = get_json("/bestsellers").await;
        assert_eq!(ids(&body), vec!["1", "4"]);

        let (_, body) = get_json("/new-releases").await;
        assert_eq!(ids(&body), vec!["2", "5"]);
    }

    #[tokio::test]
    async fn detail_includes_discount() {
        let (status, body) = get_json("/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["book"]["title"], "The Midnight Garden");
        assert_eq!(body["book"]["price"], 24.99);
        assert_eq!(body["book"]["published_date"], "2024-01-15");
        assert_eq!(body["discount"]["percent"], 17);
        assert_eq!(body["discount"]["savings"], 5.0);
        assert_eq!(body["related"], serde_json::json!([]));

        let (_, body) = get_json("/2").await;
        assert!(body["discount"].is_null());
    }

    #[tokio::test]
    async fn missing_book_is_404() {
        let (status, body) = get_json("/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["message"], "book '999' not found");
    }
}
