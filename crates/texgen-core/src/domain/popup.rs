//! Image zoom popup.
//!
//! Clicking a thumbnail shows it enlarged in an overlay.  The overlay closes
//! when the user clicks the backdrop (class `popup`) or the close cross
//! (class `popup-close`), or presses `Escape`.  Clicks on the enlarged image
//! itself keep it open.

use tracing::debug;

/// Classes whose elements close the popup when clicked.
const CLOSING_CLASSES: [&str; 2] = ["popup", "popup-close"];

/// A click inside the popup overlay, described by the clicked element's classes.
#[derive(Debug, Clone, Copy)]
pub struct PopupClick<'a> {
    pub target_classes: &'a [&'a str],
}

/// Visibility and current image of the zoom popup.
#[derive(Debug, Default)]
pub struct ZoomPopup {
    visible: bool,
    image_src: Option<String>,
}

impl ZoomPopup {
    /// Creates a hidden popup with no image.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The source of the image currently shown (or last shown).
    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    /// Shows the popup with the clicked thumbnail's source.
    pub fn open(&mut self, src: impl Into<String>) {
        let src = src.into();
        debug!(%src, "zoom popup opened");
        self.image_src = Some(src);
        self.visible = true;
    }

    /// Closes the popup if the click landed on the backdrop or close button.
    ///
    /// Returns `true` if the popup was closed by this click.
    pub fn on_click(&mut self, click: PopupClick<'_>) -> bool {
        let closes = click
            .target_classes
            .iter()
            .any(|class| CLOSING_CLASSES.contains(class));
        if closes && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    /// Handles a document-level key press; `Escape` always hides the popup.
    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" {
            self.visible = false;
        }
    }
}
