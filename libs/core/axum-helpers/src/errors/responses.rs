//! Reusable OpenAPI response types for consistent API documentation.

#[allow(unused_imports)]
use serde_json::json;
use serde::Serialize;
use utoipa::{ToResponse, ToSchema};

/// Shape of every error body (`data` is always null).
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub error: Option<serde_json::Value>,
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the service rejected the lookup",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "Product not found: 0190c5a3-7b1e-7d2a-9a41-5c1f3e0d9b77"
    })
)]
pub struct BadRequestResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body/query or validation failure",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "Invalid parameters",
        "error": {
            "name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct InvalidParametersResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "Something went wrong",
        "error": "Product with name 'Mug' already exists"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);
