use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use bookhaven_catalog::{slug::slugify, Catalog, Category, Collection, CollectionStats};
use bookhaven_http::error::AppError;
use bookhaven_kernel::{InitCtx, Module};
use serde::Serialize;
use serde_json::json;

/// Category directory and per-category pages, including the flagged collections
pub struct CategoriesModule {
    catalog: &'static Catalog,
}

impl CategoriesModule {
    pub const fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}

#[derive(Debug, Serialize)]
struct CategoryEntry<'a> {
    #[serde(flatten)]
    category: &'a Category,
    slug: String,
}

#[derive(Debug, Serialize)]
struct CategoryPage<'a> {
    #[serde(flatten)]
    collection: Collection<'a>,
    stats: CollectionStats,
}

#[async_trait]
impl Module for CategoriesModule {
    fn name(&self) -> &'static str {
        "categories"
    }

    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            categories = self.catalog.categories().len(),
            "categories module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_categories))
            .route("/{slug}", get(category_page))
            .with_state(self.catalog)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "": {
                    "get": {
                        "summary": "List categories",
                        "tags": ["Categories"],
                        "responses": {
                            "200": {
                                "description": "Every category with its slug",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Category" } }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{slug}": {
                    "get": {
                        "summary": "Category page",
                        "description": "Resolves a category slug or one of bestsellers, new-releases, featured",
                        "tags": ["Categories"],
                        "parameters": [
                            { "name": "slug", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Books in the collection with live statistics",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/CategoryPage" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Unknown category",
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
                    "Category": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "slug": { "type": "string" },
                            "description": { "type": "string" },
                            "image": { "type": "string" },
                            "book_count": { "type": "integer" }
                        },
                        "required": ["id", "name", "slug"]
                    },
                    "CategoryPage": {
                        "type": "object",
                        "properties": {
                            "slug": { "type": "string" },
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "books": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } },
                            "stats": {
                                "type": "object",
                                "properties": {
                                    "total": { "type": "integer" },
                                    "in_stock": { "type": "integer" },
                                    "average_rating": { "type": "number" }
                                }
                            }
                        }
                    }
                }
            }
        }))
    }
}

async fn list_categories(State(catalog): State<&'static Catalog>) -> Json<Vec<CategoryEntry<'static>>> {
    let entries = catalog
        .categories()
        .iter()
        .map(|category| CategoryEntry {
            category,
            slug: slugify(&category.name),
        })
        .collect();
    Json(entries)
}

async fn category_page(
    State(catalog): State<&'static Catalog>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryPage<'static>>, AppError> {
    let collection = catalog
        .collection(&slug)
        .ok_or_else(|| AppError::not_found(format!("category '{slug}' not found")))?;
    let stats = collection.stats();

    Ok(Json(CategoryPage { collection, stats }))
}

/// Create a new instance of the categories module
pub fn create_module(catalog: &'static Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(CategoriesModule::new(catalog))
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

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = CategoriesModule::new(Catalog::seeded())
            .routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_categories_with_slugs() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);

        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[2]["name"], "Mystery & Thriller");
        assert_eq!(categories[2]["slug"], "mystery-thriller");
        // stored count, independent of the six seeded books
        assert_eq!(categories[0]["book_count"], 234);
    }

    #[tokio::test]
    async fn category_page_has_books_and_stats() {
        let (status, body) = get_json("/romance").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Romance");
        assert_eq!(body["books"].as_array().unwrap().len(), 1);
        assert_eq!(body["stats"]["total"], 1);
        assert_eq!(body["stats"]["in_stock"], 1);
    }

    #[tokio::test]
    async fn special_collection_page() {
        let (status, body) = get_json("/new-releases").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "New Releases");
        assert_eq!(body["stats"]["total"], 2);
    }

    #[tokio::test]
    async fn unknown_category_is_404() {
        let (status, body) = get_json("/poetry").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "category 'poetry' not found");
    }
}
