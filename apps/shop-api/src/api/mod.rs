//! API routes module

pub mod categories;
pub mod products;

use axum::Router;

/// Versioned API routes; mounted under `/api` by the server
pub fn routes() -> Router {
    Router::new().nest(
        "/v1",
        Router::new()
            .nest("/products", products::router())
            .nest("/categories", categories::router()),
    )
}
