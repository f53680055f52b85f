//! API route modules
//!
//! - [`health`] - liveness check
//! - [`products`] - product CRUD and feed ingestion

pub mod health;
pub mod products;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
