use axum::{Router, routing::get};
use domain_products::handlers::BASE_PATH;

pub mod health;
pub mod products;

/// Application routes. Docs and middleware are layered on by `create_router`.
///
/// Every sub-router has its state applied, so the result is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(BASE_PATH, products::router(state))
}

/// `/ready`, backed by a real database ping
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
