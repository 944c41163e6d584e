//! HTTP handlers for Products API
//!
//! Reads (get, list) report service failures as 400 with the error text as
//! the message; writes (create, update) report them as 500 "Something went
//! wrong". Decode and validation failures are 400 "Invalid parameters" for
//! every route and never reach the service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, InvalidParametersResponse},
    response, ApiResponse, AppError, Pagination, ValidatedJson, ValidatedQuery,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProductReq, ListProductReq, ProductOrderBy, UpdateProductReq};
use crate::repository::ProductRepository;
use crate::serializers::{to_response_list, ListProductRes, ProductResponse};
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_product_by_id, list_products, create_product, update_product),
    components(
        schemas(
            ProductResponse,
            ListProductRes,
            CreateProductReq,
            UpdateProductReq,
            ProductOrderBy,
            Pagination
        ),
        responses(BadRequestResponse, InvalidParametersResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product_by_id).put(update_product))
        .with_state(shared_service)
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn get_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ProductResponse>, AppError> {
    let product = service.get_product_by_id(&id).await.map_err(|err| {
        tracing::error!("Failed to get product detail: {}", err);
        err.into_read_error()
    })?;

    Ok(ApiResponse::ok(ProductResponse::from(product)))
}

/// List products with optional filters, ordering and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListProductReq),
    responses(
        (status = 200, description = "One page of products", body = ApiResponse<ListProductRes>),
        (status = 400, response = InvalidParametersResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(req): ValidatedQuery<ListProductReq>,
) -> Result<ApiResponse<ListProductRes>, AppError> {
    let (products, pagination) = service.list_products(&req).await.map_err(|err| {
        tracing::error!("Failed to get list products: {}", err);
        err.into_read_error()
    })?;

    Ok(ApiResponse::ok(ListProductRes {
        products: to_response_list(products),
        pagination,
    }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProductReq,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, response = InvalidParametersResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(req): ValidatedJson<CreateProductReq>,
) -> Result<Response, AppError> {
    let product = service.create(&req).await.map_err(|err| {
        tracing::error!("Failed to create product: {}", err);
        err.into_write_error()
    })?;

    Ok(response::json(
        StatusCode::OK,
        vec![ProductResponse::from(product)],
    ))
}

/// Update a product; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    request_body = UpdateProductReq,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, response = InvalidParametersResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateProductReq>,
) -> Result<Response, AppError> {
    let product = service.update(&id, &req).await.map_err(|err| {
        tracing::error!("Failed to update product: {}", err);
        err.into_write_error()
    })?;

    Ok(response::json(
        StatusCode::OK,
        vec![ProductResponse::from(product)],
    ))
}
