use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::ProductDto;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Mount point of [`router`]
pub const BASE_PATH: &str = "/Main";
pub const TAG: &str = "Products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(find_all, find_by_id, create, update, delete),
    components(
        schemas(ProductDto),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog CRUD")
    )
)]
pub struct ApiDoc;

/// Product routes, relative to [`BASE_PATH`]
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(find_all).post(create).put(update))
        .route("/{id}", get(find_by_id).delete(delete))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products, possibly empty", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_all<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductDto>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a product. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 200, description = "Created product with its assigned id", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// Replace an existing product, identified by the body's `id`
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.update_product(input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = bool),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn delete<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<bool>> {
    if service.delete_product(id).await {
        Ok(Json(true))
    } else {
        Err(ProductError::DeleteFailed(id))
    }
}
