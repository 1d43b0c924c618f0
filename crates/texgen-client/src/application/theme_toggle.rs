//! ThemeManager: the light/dark theme toggle of the page.
//!
//! The active theme is the stored one if the user ever picked one, otherwise
//! the system preference.  Every application of a theme persists it, so the
//! next page load starts where the user left off.
//!
//! Input sources that change the theme:
//!
//! - a click on the floating toggle button → [`ThemeManager::toggle`]
//! - the `Ctrl/Cmd + Shift + T` shortcut   → [`is_toggle_shortcut`] then `toggle`
//! - a system preference change            → [`ThemeManager::on_system_change`]

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use texgen_core::{Theme, ToggleButtonState};

use super::capabilities::Localizer;

/// Errors reading or writing the persisted theme.
#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme file I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed theme file: {0}")]
    Malformed(String),
}

/// Persistence of the user's theme choice (the page's local storage).
pub trait ThemeStore: Send + Sync {
    /// The stored theme, or `None` if the user never picked one.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// Everything the page shows for the active theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePresentation {
    /// Value of the document's `data-theme` attribute.
    pub data_theme: &'static str,
    pub icon_class: &'static str,
    pub label: String,
    pub aria_label: String,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// `Ctrl + Shift + T` or `Cmd + Shift + T`.
///
/// With Shift held the browser reports the key as upper-case `T`.
pub fn is_toggle_shortcut(chord: &KeyChord) -> bool {
    (chord.ctrl || chord.meta) && chord.shift && chord.key == "T"
}

/// Owns the active theme and keeps the store and the toggle button in sync.
pub struct ThemeManager {
    store: Arc<dyn ThemeStore>,
    localizer: Option<Arc<dyn Localizer>>,
    current: Theme,
}

impl ThemeManager {
    /// Picks the initial theme (stored, else `system`) and applies it.
    ///
    /// A store that cannot be read counts as empty.
    pub fn new(
        store: Arc<dyn ThemeStore>,
        localizer: Option<Arc<dyn Localizer>>,
        system: Theme,
    ) -> Result<Self, ThemeStoreError> {
        let stored = store.load().unwrap_or_else(|e| {
            warn!("ignoring unreadable theme store: {e}");
            None
        });
        let initial = stored.unwrap_or(system);
        debug!(%initial, from_store = stored.is_some(), "initial theme chosen");

        let mut manager = Self { store, localizer, current: initial };
        manager.apply(initial)?;
        Ok(manager)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Makes `theme` active, persists it, and returns what the page shows.
    pub fn apply(&mut self, theme: Theme) -> Result<ThemePresentation, ThemeStoreError> {
        self.current = theme;
        self.store.save(theme)?;
        info!(%theme, "theme applied");
        Ok(self.presentation())
    }

    /// Switches to the other theme.
    pub fn toggle(&mut self) -> Result<ThemePresentation, ThemeStoreError> {
        self.apply(self.current.toggled())
    }

    /// Follows a system preference change unless the user picked a theme.
    ///
    /// Returns the new presentation when the theme was applied.
    pub fn on_system_change(
        &mut self,
        system: Theme,
    ) -> Result<Option<ThemePresentation>, ThemeStoreError> {
        if self.store.load()?.is_some() {
            debug!(%system, "system theme changed; stored choice wins");
            return Ok(None);
        }
        self.apply(system).map(Some)
    }

    /// Presentation of the active theme, localized when possible.
    pub fn presentation(&self) -> ThemePresentation {
        let button = self.current.toggle_button();
        ThemePresentation {
            data_theme: self.current.as_str(),
            icon_class: button.icon_class,
            label: self.text(button.label_key),
            aria_label: self.text(button.aria_label_key),
        }
    }

    fn text(&self, key: &str) -> String {
        self.localizer
            .as_ref()
            .and_then(|l| l.translate(key))
            .unwrap_or_else(|| ToggleButtonState::fallback_text(key).to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
