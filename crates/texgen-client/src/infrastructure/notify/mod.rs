//! Desktop implementations of the optional page capabilities.
//!
//! - [`TracingNotifier`] turns toasts into log events, so a headless run
//!   still records every success and failure notification.
//! - [`CatalogLocalizer`] answers translation lookups from a flat TOML
//!   catalog:
//!
//! ```toml
//! generating = "Generuji..."
//! generate-texture = "Generovat texturu"
//! theme-dark = "Tmavý"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::application::capabilities::{Localizer, Notifier, ToastKind};

/// Logs toasts instead of drawing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn toast(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Success => info!(kind = kind.as_str(), "{message}"),
            ToastKind::Error => error!(kind = kind.as_str(), "{message}"),
        }
    }
}

/// Errors loading a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Translations keyed by UI text key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLocalizer {
    entries: HashMap<String, String>,
}

impl CatalogLocalizer {
    /// Parses a flat `key = "text"` TOML table.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, String> = toml::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for CatalogLocalizer {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
