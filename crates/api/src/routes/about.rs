use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// About-page routes mounted at `/about`.
///
/// ```text
/// GET /team       -> list_team
/// GET /process    -> list_process_steps
/// GET /values     -> list_company_values
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/team", get(about::list_team))
        .route("/process", get(about::list_process_steps))
        .route("/values", get(about::list_company_values))
}
