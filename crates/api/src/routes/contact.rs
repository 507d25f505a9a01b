use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes mounted at `/contact`.
///
/// ```text
/// POST /           -> submit_lead
/// GET  /options    -> list_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit_lead))
        .route("/options", get(contact::list_options))
}
