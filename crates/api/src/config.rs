use std::path::PathBuf;
use std::time::Duration;

use bob2build_core::theme::ColorScheme;
use bob2build_relay::client::DEFAULT_REQUEST_TIMEOUT;

/// Relay endpoint used when `FORM_RELAY_URL` is not set.
pub const DEFAULT_FORM_RELAY_URL: &str = "https://formsubmit.co/ajax/hello@bob2build.com";

/// Contact address shown when a submission fails.
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@bob2build.com";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Contact form relay settings.
    pub relay: RelayConfig,
    /// Fallback address quoted in the submission error banner.
    pub contact_email: String,
    /// File the site color scheme is persisted to.
    pub theme_file: PathBuf,
    /// Scheme used when nothing has been saved yet.
    pub default_theme: ColorScheme,
}

/// Where and how contact leads are relayed.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                          |
    /// |---------------------------|--------------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                        |
    /// | `PORT`                    | `3000`                                           |
    /// | `CORS_ORIGINS`            | `http://localhost:3001`                          |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                             |
    /// | `FORM_RELAY_URL`          | `https://formsubmit.co/ajax/hello@bob2build.com` |
    /// | `FORM_RELAY_TIMEOUT_SECS` | `10`                                             |
    /// | `CONTACT_EMAIL`           | `hello@bob2build.com`                            |
    /// | `THEME_FILE`              | `data/theme.json`                                |
    /// | `DEFAULT_THEME`           | `light`                                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3001".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let relay = RelayConfig {
            url: std::env::var("FORM_RELAY_URL").unwrap_or_else(|_| DEFAULT_FORM_RELAY_URL.into()),
            timeout_secs: std::env::var("FORM_RELAY_TIMEOUT_SECS")
                .map(|v| v.parse().expect("FORM_RELAY_TIMEOUT_SECS must be a valid u64"))
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT.as_secs()),
        };

        let contact_email =
            std::env::var("CONTACT_EMAIL").unwrap_or_else(|_| DEFAULT_CONTACT_EMAIL.into());

        let theme_file = std::env::var("THEME_FILE")
            .unwrap_or_else(|_| "data/theme.json".into())
            .into();

        let default_theme: ColorScheme = std::env::var("DEFAULT_THEME")
            .unwrap_or_else(|_| "light".into())
            .parse()
            .expect("DEFAULT_THEME must be 'light' or 'dark'");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            relay,
            contact_email,
            theme_file,
            default_theme,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
