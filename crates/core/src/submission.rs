//! Contact form submission status.
//!
//! The status moves `Idle -> Submitting -> {Success, Error}` and then back
//! to `Idle` once the outcome banner is dismissed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a success or error outcome stays visible before resetting.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// A request is in flight; the submit control must be disabled.
    pub fn is_in_flight(self) -> bool {
        self == SubmitStatus::Submitting
    }

    /// A terminal outcome that will auto-reset to `Idle`.
    pub fn is_outcome(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }

    /// Status after the delivery attempt finished.
    pub fn from_delivery<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            SubmitStatus::Success
        } else {
            SubmitStatus::Error
        }
    }
}
