//! Optional page capabilities injected into the application layer.
//!
//! The page may or may not provide a translation function and a toast
//! (transient notification) function.  Instead of probing for globals, the
//! use cases receive them as optional trait objects in [`Capabilities`] and
//! fall back to built-in behaviour when one is absent:
//!
//! | Capability  | Absent behaviour                                      |
//! |-------------|-------------------------------------------------------|
//! | `Localizer` | built-in English (or Czech for the theme toggle) text |
//! | `Notifier`  | success: nothing; error: the view's blocking alert    |

use std::fmt;
use std::sync::Arc;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Translates UI text keys into the page language.
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    /// Returns the translation of `key`, or `None` if the key is unknown.
    fn translate(&self, key: &str) -> Option<String>;
}

/// Shows transient, non-blocking notifications.
pub trait Notifier: Send + Sync {
    fn toast(&self, message: &str, kind: ToastKind);
}

/// A translatable UI text: its key plus the text used without a localizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub key: &'static str,
    pub fallback: &'static str,
}

/// Texts used by the texture generator.
pub mod texts {
    use super::UiText;

    pub const GENERATING: UiText = UiText { key: "generating", fallback: "Generating..." };
    pub const GENERATE_TEXTURE: UiText =
        UiText { key: "generate-texture", fallback: "Generate Texture" };
    pub const VIEW: UiText = UiText { key: "view", fallback: "View" };
    pub const DOWNLOAD: UiText = UiText { key: "download", fallback: "Download" };
    pub const TEXTURE_GENERATED: UiText =
        UiText { key: "texture-generated", fallback: "Texture generated successfully!" };
}

/// The optional capabilities a page provides.
#[derive(Clone, Default)]
pub struct Capabilities {
    pub localizer: Option<Arc<dyn Localizer>>,
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl Capabilities {
    /// No localizer and no notifier: every fallback applies.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Resolves `text` through the localizer, or its fallback.
    pub fn text(&self, text: UiText) -> String {
        self.translate_or(text.key, text.fallback)
    }

    /// Resolves `key` through the localizer, or returns `fallback`.
    pub fn translate_or(&self, key: &str, fallback: &str) -> String {
        self.localizer
            .as_ref()
            .and_then(|l| l.translate(key))
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("localizer", &self.localizer.is_some())
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}
