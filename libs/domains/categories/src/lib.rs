//! Categories Domain
//!
//! Product categories with the same handler/service/repository layering and
//! HTTP status policy as the products domain.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod serializers;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{Category, CategoryFilter, CreateCategoryReq, ListCategoryReq, UpdateCategoryReq};
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use serializers::{CategoryResponse, ListCategoryRes};
pub use service::CategoryService;
