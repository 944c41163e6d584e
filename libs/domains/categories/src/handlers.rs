//! HTTP handlers for Categories API

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

use crate::models::{CreateCategoryReq, ListCategoryReq, UpdateCategoryReq};
use crate::repository::CategoryRepository;
use crate::serializers::{to_response_list, CategoryResponse, ListCategoryRes};
use crate::service::CategoryService;

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(get_category_by_id, list_categories, create_category, update_category),
    components(
        schemas(
            CategoryResponse,
            ListCategoryRes,
            CreateCategoryReq,
            UpdateCategoryReq,
            Pagination
        ),
        responses(BadRequestResponse, InvalidParametersResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Categories", description = "Product category endpoints")
    )
)]
pub struct ApiDoc;

/// Create the categories router
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", get(get_category_by_id).put(update_category))
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID (UUID)")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponse>),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn get_category_by_id<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<CategoryResponse>, AppError> {
    let category = service.get_category_by_id(&id).await.map_err(|err| {
        tracing::error!("Failed to get category detail: {}", err);
        err.into_read_error()
    })?;

    Ok(ApiResponse::ok(category.into()))
}

#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    params(ListCategoryReq),
    responses(
        (status = 200, description = "One page of categories", body = ApiResponse<ListCategoryRes>),
        (status = 400, response = InvalidParametersResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedQuery(req): ValidatedQuery<ListCategoryReq>,
) -> Result<ApiResponse<ListCategoryRes>, AppError> {
    let (categories, pagination) = service.list_categories(&req).await.map_err(|err| {
        tracing::error!("Failed to list categories: {}", err);
        err.into_read_error()
    })?;

    Ok(ApiResponse::ok(ListCategoryRes {
        categories: to_response_list(categories),
        pagination,
    }))
}

#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategoryReq,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 400, response = InvalidParametersResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(req): ValidatedJson<CreateCategoryReq>,
) -> Result<Response, AppError> {
    let category = service.create(&req).await.map_err(|err| {
        tracing::error!("Failed to create category: {}", err);
        err.into_write_error()
    })?;

    Ok(response::json(
        StatusCode::OK,
        vec![CategoryResponse::from(category)],
    ))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID (UUID)")
    ),
    request_body = UpdateCategoryReq,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 400, response = InvalidParametersResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateCategoryReq>,
) -> Result<Response, AppError> {
    let category = service.update(&id, &req).await.map_err(|err| {
        tracing::error!("Failed to update category: {}", err);
        err.into_write_error()
    })?;

    Ok(response::json(
        StatusCode::OK,
        vec![CategoryResponse::from(category)],
    ))
}
