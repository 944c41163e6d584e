//! Custom extractors for Axum handlers.
//!
//! Both extractors decode and then validate, rejecting with an
//! [`AppError`](crate::errors::AppError) so failures render the standard envelope.

pub mod validated_json;
pub mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
