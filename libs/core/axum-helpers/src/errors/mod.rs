pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::response;
use crate::validation::field_errors;

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders the standard envelope (see [`crate::response`]):
///
/// | Variant | Status | `message` | `error` |
/// |---|---|---|---|
/// | `JsonExtractorRejection` | 400 | "Invalid parameters" | rejection text |
/// | `QueryExtractorRejection` | 400 | "Invalid parameters" | rejection text |
/// | `ValidationError` | 400 | "Invalid parameters" | field errors |
/// | `BadRequest` | 400 | the given text | - |
/// | `NotFound` | 404 | the given text | - |
/// | `RequestTimeout` | 408 | "Request timed out" | - |
/// | `InternalServerError` | 500 | "Something went wrong" | the given detail |
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Request Timeout")]
    RequestTimeout,

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("Failed to decode request body: {}", e.body_text());
                response::error(status, e.body_text(), messages::INVALID_PARAMETERS)
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!("Failed to parse request query: {}", e.body_text());
                response::error(status, e.body_text(), messages::INVALID_PARAMETERS)
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {}", e);
                response::error_with_details(
                    status,
                    messages::INVALID_PARAMETERS,
                    field_errors(&e),
                )
            }
            AppError::BadRequest(msg) => response::message(status, msg),
            AppError::NotFound(msg) => response::message(status, msg),
            AppError::RequestTimeout => {
                tracing::warn!("Request exceeded its deadline");
                response::message(status, messages::REQUEST_TIMEOUT)
            }
            AppError::InternalServerError(detail) => {
                response::error(status, detail, messages::SOMETHING_WENT_WRONG)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
    }

    async fn into_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_uses_text_as_message() {
        let (status, body) = into_parts(AppError::BadRequest("Product not found".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"data": null, "message": "Product not found"}));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail_behind_generic_message() {
        let (status, body) =
            into_parts(AppError::InternalServerError("name taken".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Something went wrong");
        assert_eq!(body["error"], "name taken");
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_details() {
        let err = Sample { name: String::new() }.validate().unwrap_err();
        let (status, body) = into_parts(AppError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid parameters");
        assert_eq!(body["error"]["name"][0]["code"], "length");
    }

    #[tokio::test]
    async fn test_timeout_status() {
        let (status, body) = into_parts(AppError::RequestTimeout).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body["message"], "Request timed out");
    }
}
