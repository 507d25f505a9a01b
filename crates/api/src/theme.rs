//! Process-wide site color scheme.
//!
//! Read once from the [`ThemeStore`] at startup, then written through on
//! every change.

use std::sync::{PoisonError, RwLock};

use bob2build_core::error::CoreError;
use bob2build_core::theme::{ColorScheme, ThemeStore};

pub struct ThemeSettings {
    current: RwLock<ColorScheme>,
    store: Box<dyn ThemeStore>,
}

impl ThemeSettings {
    /// Load the saved scheme, falling back to `default` if nothing was saved
    /// or the saved value cannot be read.
    pub fn load(store: Box<dyn ThemeStore>, default: ColorScheme) -> Self {
        let initial = match store.load() {
            Ok(Some(saved)) => {
                tracing::info!(theme = saved.as_str(), "Loaded saved color scheme");
                saved
            }
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(error = %e, default = default.as_str(), "Could not load saved color scheme, using default");
                default
            }
        };

        Self {
            current: RwLock::new(initial),
            store,
        }
    }

    pub fn current(&self) -> ColorScheme {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist and apply `scheme`. Unchanged values are not rewritten.
    pub fn set(&self, scheme: ColorScheme) -> Result<ColorScheme, CoreError> {
        self.update(|_| scheme)
    }

    /// Flip between light and dark.
    pub fn toggle(&self) -> Result<ColorScheme, CoreError> {
        self.update(ColorScheme::toggle)
    }

    /// Compute the next scheme from the current one under the write lock.
    fn update(
        &self,
        next: impl FnOnce(ColorScheme) -> ColorScheme,
    ) -> Result<ColorScheme, CoreError> {
        let mut current = self
            .current
            .write()
            .map_err(|_| CoreError::Internal("Theme lock poisoned".into()))?;

        let scheme = next(*current);
        if *current != scheme {
            self.store.save(scheme)?;
            *current = scheme;
            tracing::info!(theme = scheme.as_str(), "Color scheme changed");
        }
        Ok(scheme)
    }
}
