use std::sync::Arc;

use bob2build_core::catalog::Catalog;
use bob2build_relay::LeadSink;

use crate::config::ServerConfig;
use crate::theme::ThemeSettings;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Immutable site content.
    pub catalog: Arc<Catalog>,
    /// Destination for validated contact leads.
    pub lead_sink: Arc<dyn LeadSink>,
    /// Site color scheme.
    pub theme: Arc<ThemeSettings>,
}
