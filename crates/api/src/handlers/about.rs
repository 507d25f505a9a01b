use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/about/team
pub async fn list_team(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.team_members(),
    })
    .into_response())
}

/// GET /api/v1/about/process
pub async fn list_process_steps(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.process_steps(),
    })
    .into_response())
}

/// GET /api/v1/about/values
pub async fn list_company_values(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.company_values(),
    })
    .into_response())
}
