use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use bob2build_core::theme::ColorScheme;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: ColorScheme,
}

/// GET /api/v1/theme
pub async fn get_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ThemeBody {
            theme: state.theme.current(),
        },
    }))
}

/// PUT /api/v1/theme
pub async fn update_theme(
    State(state): State<AppState>,
    Json(input): Json<ThemeBody>,
) -> AppResult<impl IntoResponse> {
    let theme = state.theme.set(input.theme)?;
    Ok(Json(DataResponse {
        data: ThemeBody { theme },
    }))
}

/// POST /api/v1/theme/toggle
pub async fn toggle_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let theme = state.theme.toggle()?;
    Ok(Json(DataResponse {
        data: ThemeBody { theme },
    }))
}
