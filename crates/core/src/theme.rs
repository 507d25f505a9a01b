//! Site color scheme and its persistence seam.
//!
//! The scheme is read once at startup and written through on every change.
//! Storage is behind [`ThemeStore`] so the server can use a settings file
//! while tests use memory.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl FromStr for ColorScheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(CoreError::Validation(format!(
                "Unknown color scheme '{other}'. Valid: [\"light\", \"dark\"]"
            ))),
        }
    }
}

/// Persistence adapter for the color scheme.
pub trait ThemeStore: Send + Sync {
    /// Return the saved scheme, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<ColorScheme>, CoreError>;

    fn save(&self, scheme: ColorScheme) -> Result<(), CoreError>;
}

/// On-disk document written by [`FileThemeStore`].
#[derive(Debug, Serialize, Deserialize)]
struct ThemeDocument {
    theme: ColorScheme,
}

/// Stores the scheme as `{"theme":"dark"}` in a JSON file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ColorScheme>, CoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::Internal(format!(
                    "Failed to read theme file {}: {e}",
                    self.path.display()
                )))
            }
        };

        let doc: ThemeDocument = serde_json::from_str(&raw).map_err(|e| {
            CoreError::Internal(format!(
                "Malformed theme file {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(Some(doc.theme))
    }

    fn save(&self, scheme: ColorScheme) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Internal(format!(
                    "Failed to create theme directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let body = serde_json::to_string(&ThemeDocument { theme: scheme })
            .map_err(|e| CoreError::Internal(format!("Failed to encode theme: {e}")))?;

        std::fs::write(&self.path, body).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to write theme file {}: {e}",
                self.path.display()
            ))
        })
    }
}

/// Keeps the scheme in memory only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Mutex<Option<ColorScheme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(scheme: ColorScheme) -> Self {
        Self {
            saved: Mutex::new(Some(scheme)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ColorScheme>, CoreError> {
        let saved = self
            .saved
            .lock()
            .map_err(|_| CoreError::Internal("Theme store lock poisoned".into()))?;
        Ok(*saved)
    }

    fn save(&self, scheme: ColorScheme) -> Result<(), CoreError> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| CoreError::Internal("Theme store lock poisoned".into()))?;
        *saved = Some(scheme);
        Ok(())
    }
}
