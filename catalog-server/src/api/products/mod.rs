//! Product API module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/saveDB", post(handler::ingest))
        .route("/products", get(handler::list).post(handler::create))
        .route(
            "/products/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
