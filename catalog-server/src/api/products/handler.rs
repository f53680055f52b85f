//! Product API Handlers
//!
//! Thin dispatcher: extract, call the catalog service, return. Error
//! kinds bubble up to `AppError::into_response` untranslated.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Product, ProductRecord};
use crate::services::CatalogService;
use crate::services::hypermedia::{PagedProducts, ProductView};
use crate::utils::{AppJson, AppResult, validation};

fn catalog(state: &ServerState) -> CatalogService {
    CatalogService::new(state.primary.clone(), state.feed.clone())
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

fn default_page_size() -> usize {
    20
}

/// POST /saveDB - ingest the external feed into the primary store
pub async fn ingest(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = catalog(&state).ingest_from_feed().await?;
    Ok(Json(products))
}

/// POST /products - persist a batch of products
pub async fn create(
    State(state): State<ServerState>,
    AppJson(records): AppJson<Vec<ProductRecord>>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    validation::check_all(records.iter())?;
    let saved = catalog(&state).create_many(records).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /products - paginated listing with hypermedia links
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<PagedProducts>> {
    let page = catalog(&state).list_page(params.page, params.size).await?;
    Ok(Json(page))
}

/// GET /products/{id} - single product with a list-navigation link
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductView>> {
    let view = catalog(&state).get_one(&id).await?;
    Ok(Json(view))
}

/// PUT /products/{id} - full overwrite of name and value
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(record): AppJson<ProductRecord>,
) -> AppResult<Json<Product>> {
    validation::check(&record)?;
    let updated = catalog(&state).update(&id, record).await?;
    Ok(Json(updated))
}

/// DELETE /products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<&'static str> {
    catalog(&state).delete(&id).await?;
    Ok("Product deleted successfully.")
}
