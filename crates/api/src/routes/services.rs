use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Service routes mounted at `/services`.
///
/// ```text
/// GET /          -> list_services
/// GET /{slug}    -> get_service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_services))
        .route("/{slug}", get(services::get_service))
}
