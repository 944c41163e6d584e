//! Categories API routes

use axum::Router;
use domain_categories::{handlers, CategoryService, InMemoryCategoryRepository};

/// Create categories router
pub fn router() -> Router {
    let repository = InMemoryCategoryRepository::new();
    let service = CategoryService::new(repository);
    handlers::router(service)
}
