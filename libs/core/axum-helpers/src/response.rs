//! Uniform JSON envelope for every response body.
//!
//! Every body this service writes has the same shape:
//!
//! ```json
//! { "data": <payload | null>, "message": "OK", "error": <optional detail> }
//! ```
//!
//! Two ways to produce it coexist and render identically:
//!
//! - build the envelope directly with [`prepare_response`] (or
//!   [`ApiResponse::ok`]) and return it, it implements `IntoResponse` with 200;
//! - call [`json`] / [`error`] / [`error_with_details`] to pick the status code
//!   and get an `axum::response::Response` back.

use std::fmt::Display;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::messages;

/// Response envelope.
///
/// `data` is always present in the output (as `null` when absent); `error` is
/// omitted unless there is something to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub error: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope with the standard "OK" message.
    pub fn ok(data: T) -> Self {
        prepare_response(Some(data), messages::OK, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Build an envelope from its parts.
pub fn prepare_response<T>(
    data: Option<T>,
    message: impl Into<String>,
    error: Option<Value>,
) -> ApiResponse<T> {
    ApiResponse {
        data,
        message: message.into(),
        error,
    }
}

/// Write `data` inside an "OK" envelope with the given status.
pub fn json<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(ApiResponse::ok(data))).into_response()
}

/// Write an error envelope: `data` is null, `message` is the client-facing
/// summary and `error` carries the underlying error text.
pub fn error(status: StatusCode, err: impl Display, message: &str) -> Response {
    let body: ApiResponse<Value> =
        prepare_response(None, message, Some(Value::String(err.to_string())));
    (status, Json(body)).into_response()
}

/// Write an error envelope with structured details (e.g. validation field errors).
pub fn error_with_details(status: StatusCode, message: &str, details: Value) -> Response {
    let body: ApiResponse<Value> = prepare_response(None, message, Some(details));
    (status, Json(body)).into_response()
}

/// Write an envelope whose only content is a message.
pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    let body: ApiResponse<Value> = prepare_response(None, message, None);
    (status, Json(body)).into_response()
}
