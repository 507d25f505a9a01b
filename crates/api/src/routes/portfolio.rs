//! Route definitions for the portfolio (case studies).

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Portfolio routes mounted at `/portfolio`.
///
/// ```text
/// GET /                -> list_case_studies
/// GET /featured        -> list_featured
/// GET /filters         -> list_filters
/// GET /{slug}          -> get_case_study
/// GET /{slug}/related  -> list_related
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list_case_studies))
        .route("/featured", get(portfolio::list_featured))
        .route("/filters", get(portfolio::list_filters))
        .route("/{slug}", get(portfolio::get_case_study))
        .route("/{slug}/related", get(portfolio::list_related))
}
