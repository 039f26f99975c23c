//! Route registration.

mod catalog;
mod common;

pub use catalog::{breeder_routes, cat_routes, dog_routes};
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Entity payloads are a few hundred bytes.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: common routes at the root, catalog routes under `/api`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(dog_routes(state.dogs.clone()))
        .merge(cat_routes(state.cats.clone()))
        .merge(breeder_routes(state.breeders.clone()));

    Router::new()
        .merge(common_routes(state))
        .nest("/api", api)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
