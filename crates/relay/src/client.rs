//! Relay of contact leads to the external form-processing endpoint.
//!
//! [`FormRelay`] sends a JSON-encoded [`LeadSubmission`] to a fixed URL via
//! HTTP POST. Exactly one attempt is made per submission: the visitor
//! retries by submitting again.

use std::time::Duration;

use async_trait::async_trait;
use bob2build_core::lead::LeadSubmission;
use reqwest::header::ACCEPT;

/// HTTP request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for lead delivery failures.
///
/// Callers treat both variants the same way; the split only exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay answered with a non-2xx status code.
    #[error("Form relay returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// LeadSink
// ---------------------------------------------------------------------------

/// Destination for validated leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, lead: &LeadSubmission) -> Result<(), RelayError>;
}

// ---------------------------------------------------------------------------
// FormRelay
// ---------------------------------------------------------------------------

/// Posts leads to an external form relay.
pub struct FormRelay {
    client: reqwest::Client,
    url: String,
}

impl FormRelay {
    /// Create a relay client for `url` with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LeadSink for FormRelay {
    /// Execute a single POST request and check the response status.
    async fn deliver(&self, lead: &LeadSubmission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Form relay rejected lead");
            return Err(RelayError::HttpStatus(status.as_u16()));
        }

        tracing::info!(
            project_type = %lead.project_type,
            budget = %lead.budget,
            "Lead delivered to form relay"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
