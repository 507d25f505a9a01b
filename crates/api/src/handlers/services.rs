//! Handlers for the services page.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use bob2build_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.services(),
    })
    .into_response())
}

/// GET /api/v1/services/{slug}
pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let service = state.catalog.find_service(&slug).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Service",
            key: slug.clone(),
        })
    })?;

    Ok(Json(DataResponse { data: service }).into_response())
}
