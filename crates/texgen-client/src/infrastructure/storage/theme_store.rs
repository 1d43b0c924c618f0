//! `ThemeStore` implementations.
//!
//! The file store keeps the theme in a one-key TOML file:
//!
//! ```toml
//! theme = "dark"
//! ```
//!
//! A missing file means the user never picked a theme.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use texgen_core::Theme;

use crate::application::theme_toggle::{ThemeStore, ThemeStoreError};

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Persists the theme to a TOML file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ThemeStoreError {
        ThemeStoreError::Io { path: self.path.clone(), source }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let file: ThemeFile = toml::from_str(&content)
                    .map_err(|e| ThemeStoreError::Malformed(e.to_string()))?;
                Ok(Some(file.theme))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let content = toml::to_string(&ThemeFile { theme })
            .map_err(|e| ThemeStoreError::Malformed(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), %theme, "theme saved");
        Ok(())
    }
}

/// Keeps the theme in memory; used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { theme: Mutex::new(Some(theme)) }
    }

    /// Forgets the stored theme.
    pub fn clear(&self) {
        *self.theme.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Ok(*self.theme.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        *self.theme.lock().unwrap_or_else(PoisonError::into_inner) = Some(theme);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
