//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`response`]**: the uniform `{data, message, error}` envelope
//! - **[`errors`]**: `AppError` and its envelope rendering
//! - **[`validation`]**: struct validation and field-error formatting
//! - **[`extractors`]**: `ValidatedJson` / `ValidatedQuery`
//! - **[`pagination`]**: page/limit metadata
//! - **[`server`]**: router assembly, health, graceful shutdown
//! - **[`http`]**: CORS and security headers
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config, &Environment::Development)?;
//!     create_production_app(router, &config, std::time::Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod pagination;
pub mod response;
pub mod server;
pub mod validation;

pub use errors::AppError;
pub use extractors::{ValidatedJson, ValidatedQuery};
pub use pagination::Pagination;
pub use response::{ApiResponse, prepare_response};
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
    shutdown_signal,
};
pub use validation::{field_errors, validate_struct};
