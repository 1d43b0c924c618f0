//! Collapsible side navigation.
//!
//! The side navigation starts collapsed (icons only).  Toggling it adds or
//! removes the `expanded` class on both the navigation panel and the main
//! content so the layout shifts in step.  `Escape` collapses an open panel.

use tracing::debug;

/// Class added to the side navigation and the main content when expanded.
pub const EXPANDED_CLASS: &str = "expanded";

/// Key that collapses an expanded navigation panel.
pub const ESCAPE_KEY: &str = "Escape";

/// Which elements should carry [`EXPANDED_CLASS`] after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavClasses {
    pub sidenav_expanded: bool,
    pub main_expanded: bool,
}

/// Open/closed state of the side navigation, owned by one page instance.
#[derive(Debug, Default)]
pub struct SideNav {
    open: bool,
}

impl SideNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the panel and returns the classes to apply.
    pub fn toggle(&mut self) -> NavClasses {
        self.open = !self.open;
        debug!(open = self.open, "side navigation toggled");
        self.classes()
    }

    /// Handles a document-level key press.
    ///
    /// Returns the new classes if the key collapsed the panel, `None` if the
    /// key was ignored.
    pub fn on_key(&mut self, key: &str) -> Option<NavClasses> {
        if key == ESCAPE_KEY && self.open {
            Some(self.toggle())
        } else {
            None
        }
    }

    /// Classes matching the current state.
    pub fn classes(&self) -> NavClasses {
        NavClasses {
            sidenav_expanded: self.open,
            main_expanded: self.open,
        }
    }
}
