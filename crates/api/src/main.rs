use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bob2build_api::config::ServerConfig;
use bob2build_api::router::build_app_router;
use bob2build_api::state::AppState;
use bob2build_api::theme::ThemeSettings;
use bob2build_core::catalog::Catalog;
use bob2build_core::theme::FileThemeStore;
use bob2build_relay::FormRelay;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bob2build_api=debug,bob2build_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Catalog ---
    let catalog = Catalog::load().expect("Embedded catalog data is invalid");
    tracing::info!(
        case_studies = catalog.case_studies().len(),
        services = catalog.services().len(),
        team_members = catalog.team_members().len(),
        "Catalog loaded"
    );

    // --- Form relay ---
    let relay = FormRelay::new(config.relay.url.clone(), config.relay.timeout())
        .expect("Failed to build form relay HTTP client");
    tracing::info!(url = %relay.url(), "Form relay configured");

    // --- Theme ---
    let theme = ThemeSettings::load(
        Box::new(FileThemeStore::new(config.theme_file.clone())),
        config.default_theme,
    );
    tracing::info!(theme = theme.current().as_str(), "Color scheme initialised");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
        lead_sink: Arc::new(relay),
        theme: Arc::new(theme),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolve on Ctrl-C, or SIGTERM on Unix, so in-flight relay posts finish
/// before the process exits.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
        "SIGINT"
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let signal = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal, "Shutting down, draining open requests");
}
