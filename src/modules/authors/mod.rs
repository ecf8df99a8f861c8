use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use bookhaven_catalog::{slug::slugify, Author, Book, Catalog};
use bookhaven_http::error::AppError;
use bookhaven_kernel::{InitCtx, Module};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Author directory with search and per-author pages
pub struct AuthorsModule {
    catalog: &'static Catalog,
}

impl AuthorsModule {
    pub const fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize)]
struct AuthorEntry<'a> {
    #[serde(flatten)]
    author: &'a Author,
    slug: String,
}

#[derive(Debug, Serialize)]
struct AuthorPage<'a> {
    author: AuthorEntry<'a>,
    books: Vec<&'a Book>,
}

impl<'a> AuthorEntry<'a> {
    fn new(author: &'a Author) -> Self {
        Self {
            author,
            slug: slugify(&author.name),
        }
    }
}

#[async_trait]
impl Module for AuthorsModule {
    fn name(&self) -> &'static str {
        "authors"
    }

    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            authors = self.catalog.authors().len(),
            "authors module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(search_authors))
            .route("/{slug}", get(author_page))
            .with_state(self.catalog)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "": {
                    "get": {
                        "summary": "List or search authors",
                        "tags": ["Authors"],
                        "parameters": [
                            {
                                "name": "q",
                                "in": "query",
                                "description": "Case-insensitive match on name or biography",
                                "schema": { "type": "string" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching authors",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Author" } }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{slug}": {
                    "get": {
                        "summary": "Author page",
                        "tags": ["Authors"],
                        "parameters": [
                            { "name": "slug", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Author profile and their books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "author": { "$ref": "#/components/schemas/Author" },
                                                "books": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } }
                                            }
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "Author not found",
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
                    "Author": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "slug": { "type": "string" },
                            "bio": { "type": "string" },
                            "image": { "type": "string" },
                            "book_count": { "type": "integer" },
                            "website": { "type": "string", "format": "uri" }
                        },
                        "required": ["id", "name", "slug"]
                    }
                }
            }
        }))
    }
}

async fn search_authors(
    State(catalog): State<&'static Catalog>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<AuthorEntry<'static>>> {
    let authors = catalog
        .search_authors(&params.q)
        .into_iter()
        .map(AuthorEntry::new)
        .collect();
    Json(authors)
}

async fn author_page(
    State(catalog): State<&'static Catalog>,
    Path(slug): Path<String>,
) -> Result<Json<AuthorPage<'static>>, AppError> {
    let author = catalog
        .author_by_slug(&slug)
        .ok_or_else(|| AppError::not_found(format!("author '{slug}' not found")))?;

    Ok(Json(AuthorPage {
        author: AuthorEntry::new(author),
        books: catalog.books_by_author(&author.name),
    }))
}

/// Create a new instance of the authors module
pub fn create_module(catalog: &'static Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorsModule::new(catalog))
}
