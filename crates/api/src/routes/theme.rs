use axum::routing::{get, post};
use axum::Router;

use crate::handlers::theme;
use crate::state::AppState;

/// Color scheme routes mounted at `/theme`.
///
/// ```text
/// GET  /          -> get_theme
/// PUT  /          -> update_theme
/// POST /toggle    -> toggle_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(theme::get_theme).put(theme::update_theme))
        .route("/toggle", post(theme::toggle_theme))
}
