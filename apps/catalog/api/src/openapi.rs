use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "CRUD API for the product catalog"
    ),
    nest(
        (path = domain_products::handlers::BASE_PATH, api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
