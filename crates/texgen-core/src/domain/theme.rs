//! Light/dark colour theme.
//!
//! The page carries a `data-theme` attribute that is either `light` or `dark`.
//! A floating toggle button flips it; its icon, label and accessible name
//! always describe the *current* theme and the action a click performs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two supported colour themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value written to the document's `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Maps a `prefers-color-scheme: dark` media query result to a theme.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Presentation of the toggle button while this theme is active.
    pub fn toggle_button(self) -> ToggleButtonState {
        match self {
            Theme::Dark => ToggleButtonState {
                icon_class: "fas fa-moon",
                label_key: "theme-dark",
                aria_label_key: "switch-to-light",
            },
            Theme::Light => ToggleButtonState {
                icon_class: "fas fa-sun",
                label_key: "theme-light",
                aria_label_key: "switch-to-dark",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored or user-supplied theme name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// What the toggle button shows for the active theme.
///
/// `label_key` and `aria_label_key` are translation keys; see
/// [`ToggleButtonState::fallback_text`] for the built-in texts used when no
/// translation is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButtonState {
    pub icon_class: &'static str,
    pub label_key: &'static str,
    pub aria_label_key: &'static str,
}

impl ToggleButtonState {
    /// Built-in text for one of the toggle button translation keys.
    ///
    /// Unknown keys are returned unchanged.
    pub fn fallback_text(key: &str) -> &str {
        match key {
            "theme-dark" => "Tmavý",
            "theme-light" => "Světlý",
            "switch-to-light" => "Přepnout na světlý režim",
            "switch-to-dark" => "Přepnout na tmavý režim",
            other => other,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
