//! Products Domain
//!
//! Product catalogue: creation, lookup, filtered listing and partial updates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, decode + validate, envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Existence and uniqueness rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, requests, filters
//! └─────────────┘
//! ```
//!
//! [`serializers`] projects entities into the client-facing shapes.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod serializers;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProductReq, ListProductReq, Product, ProductFilter, ProductOrderBy, UpdateProductReq,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use serializers::{ListProductRes, ProductResponse};
pub use service::ProductService;
