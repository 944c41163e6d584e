use axum::BoxError;

use super::{AppError, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> AppError {
    AppError::NotFound(messages::NOT_FOUND_RESOURCE.to_string())
}

/// Turns errors raised by tower middleware (timeouts) into envelope responses.
///
/// Used with `axum::error_handling::HandleErrorLayer`.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::RequestTimeout
    } else {
        tracing::error!("Unhandled middleware error: {}", err);
        AppError::InternalServerError(err.to_string())
    }
}
