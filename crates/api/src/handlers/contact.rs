//! Handlers for the contact form.
//!
//! The server re-runs the same validation the form runs client-side, then
//! hands the lead to the configured [`LeadSink`](bob2build_relay::LeadSink).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use bob2build_core::error::CoreError;
use bob2build_core::lead::{option_sets, LeadSubmission};
use bob2build_core::submission::SubmitStatus;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmissionOutcome {
    pub status: SubmitStatus,
}

/// GET /api/v1/contact/options
pub async fn list_options() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: option_sets(),
    }))
}

/// POST /api/v1/contact
///
/// Validate the lead and relay it. All field violations are returned
/// together; nothing is relayed unless every field passes.
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> AppResult<impl IntoResponse> {
    if let Err(violations) = lead.check() {
        tracing::debug!(fields = violations.len(), "Contact lead rejected by validation");
        return Err(AppError::Core(CoreError::InvalidFields(violations)));
    }

    state
        .lead_sink
        .deliver(&lead)
        .await
        .map_err(|source| AppError::Submission {
            source,
            contact_email: state.config.contact_email.clone(),
        })?;

    tracing::info!(
        project_type = %lead.project_type,
        budget = %lead.budget,
        timeline = %lead.timeline,
        "Contact lead submitted",
    );

    Ok(Json(DataResponse {
        data: SubmissionOutcome {
            status: SubmitStatus::Success,
        },
    }))
}
