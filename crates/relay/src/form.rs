//! Contact form presentation state.
//!
//! [`ContactForm`] owns the field values and the [`SubmitStatus`] of one
//! form instance. A submission validates every field, makes one delivery
//! attempt, and lands on `Success` (fields cleared) or `Error` (fields kept).
//! The outcome resets to `Idle` on its own after the reset delay, or
//! immediately when the visitor edits a field.

use std::sync::Arc;
use std::time::Duration;

use bob2build_core::lead::LeadSubmission;
use bob2build_core::submission::{SubmitStatus, STATUS_RESET_DELAY};
use bob2build_core::validation::FieldViolation;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::client::LeadSink;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// One or more fields broke their rule; nothing was sent.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldViolation>),

    /// A previous submission has not finished yet.
    #[error("A submission is already in flight")]
    InFlight,
}

struct FormState {
    fields: LeadSubmission,
    status: SubmitStatus,
    /// Bumped on every status change a pending reset must not override.
    generation: u64,
    pending_reset: Option<CancellationToken>,
}

impl FormState {
    fn cancel_reset(&mut self) {
        if let Some(token) = self.pending_reset.take() {
            token.cancel();
        }
    }

    fn return_to_idle(&mut self) {
        self.cancel_reset();
        self.status = SubmitStatus::Idle;
        self.generation += 1;
    }
}

pub struct ContactForm {
    sink: Arc<dyn LeadSink>,
    reset_delay: Duration,
    state: Arc<Mutex<FormState>>,
}

impl ContactForm {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self::with_reset_delay(sink, STATUS_RESET_DELAY)
    }

    pub fn with_reset_delay(sink: Arc<dyn LeadSink>, reset_delay: Duration) -> Self {
        Self {
            sink,
            reset_delay,
            state: Arc::new(Mutex::new(FormState {
                fields: LeadSubmission::default(),
                status: SubmitStatus::Idle,
                generation: 0,
                pending_reset: None,
            })),
        }
    }

    pub async fn status(&self) -> SubmitStatus {
        self.state.lock().await.status
    }

    /// Snapshot of the current field values.
    pub async fn fields(&self) -> LeadSubmission {
        self.state.lock().await.fields.clone()
    }

    /// Apply a user edit. Editing dismisses a visible success or error.
    pub async fn edit(&self, apply: impl FnOnce(&mut LeadSubmission)) {
        let mut state = self.state.lock().await;
        apply(&mut state.fields);
        if state.status.is_outcome() {
            state.return_to_idle();
        }
    }

    /// Dismiss a visible outcome without touching the fields.
    pub async fn dismiss(&self) {
        let mut state = self.state.lock().await;
        if state.status.is_outcome() {
            state.return_to_idle();
        }
    }

    /// Validate and deliver the current fields.
    ///
    /// Returns the outcome status. The reset back to `Idle` happens later on
    /// a background timer; this call never waits for it.
    pub async fn submit(&self) -> Result<SubmitStatus, FormError> {
        let (lead, generation) = {
            let mut state = self.state.lock().await;
            if state.status.is_in_flight() {
                return Err(FormError::InFlight);
            }
            state.fields.check().map_err(FormError::Invalid)?;

            state.cancel_reset();
            state.status = SubmitStatus::Submitting;
            state.generation += 1;
            (state.fields.clone(), state.generation)
        };

        let result = self.sink.deliver(&lead).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Contact form submission failed");
        }

        let status = SubmitStatus::from_delivery(&result);
        let mut state = self.state.lock().await;
        state.status = status;
        if status == SubmitStatus::Success {
            state.fields.clear();
        }
        state.pending_reset = Some(self.schedule_reset(generation));

        Ok(status)
    }

    /// Spawn the single-shot timer that returns an outcome to `Idle`.
    fn schedule_reset(&self, generation: u64) -> CancellationToken {
        let token = CancellationToken::new();
        let cancel = token.clone();
        let state = Arc::clone(&self.state);
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let mut state = state.lock().await;
                    if state.generation == generation && state.status.is_outcome() {
                        state.status = SubmitStatus::Idle;
                        state.pending_reset = None;
                    }
                }
            }
        });

        token
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_lock() {
            state.cancel_reset();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
