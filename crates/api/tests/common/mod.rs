#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bob2build_core::catalog::Catalog;
use bob2build_core::lead::LeadSubmission;
use bob2build_core::theme::{ColorScheme, MemoryThemeStore};
use bob2build_relay::{LeadSink, RelayError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bob2build_api::config::{RelayConfig, ServerConfig};
use bob2build_api::router::build_app_router;
use bob2build_api::state::AppState;
use bob2build_api::theme::ThemeSettings;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        relay: RelayConfig {
            url: "http://127.0.0.1:9/unused".to_string(),
            timeout_secs: 1,
        },
        contact_email: "hello@bob2build.com".to_string(),
        theme_file: PathBuf::from("unused-theme.json"),
        default_theme: ColorScheme::Light,
    }
}

/// Lead sink that records deliveries instead of sending them.
#[derive(Default)]
pub struct StubSink {
    pub delivered: Mutex<Vec<LeadSubmission>>,
    pub fail: bool,
}

impl StubSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

#[async_trait]
impl LeadSink for StubSink {
    async fn deliver(&self, lead: &LeadSubmission) -> Result<(), RelayError> {
        self.delivered.lock().unwrap().push(lead.clone());
        if self.fail {
            Err(RelayError::HttpStatus(503))
        } else {
            Ok(())
        }
    }
}

/// Build the full application router around the given lead sink.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(sink: Arc<StubSink>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(Catalog::load().unwrap()),
        lead_sink: sink,
        theme: Arc::new(ThemeSettings::load(
            Box::new(MemoryThemeStore::new()),
            ColorScheme::Light,
        )),
    };
    build_app_router(state, &config)
}

/// Build a test app whose sink is never expected to be called.
pub fn build_default_app() -> Router {
    build_test_app(Arc::new(StubSink::default()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
