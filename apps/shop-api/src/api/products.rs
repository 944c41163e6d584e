//! Products API routes

use axum::Router;
use domain_products::{handlers, InMemoryProductRepository, ProductService};

/// Create products router
pub fn router() -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}
