//! Application layer use cases for the client.
//!
//! # What use cases does the client have?
//!
//! - **`generate_texture`** – The form-driven request client.  Validates the
//!   five parameter inputs, posts them to `/calculate`, and renders the
//!   generated texture or the failure.  The page is reached through the
//!   `FormView` trait and the server through `GenerationTransport`, both
//!   injected at construction time.
//!
//! - **`theme_toggle`** – Picks, applies and persists the light/dark theme and
//!   computes what the floating toggle button shows.
//!
//! - **`capabilities`** – The optional translation and toast ports shared by
//!   both use cases, with their built-in fallbacks.

pub mod capabilities;
pub mod generate_texture;
pub mod theme_toggle;

pub use capabilities::{texts, Capabilities, Localizer, Notifier, ToastKind, UiText};
pub use generate_texture::{
    EventKind, EventOutcome, EventTarget, FormView, GenerationTransport, SubmitControlState,
    SubmitOutcome, TextureGenerated, TextureGenerator, TextureResult, TransportError,
    TransportResponse, UiEvent,
};
pub use theme_toggle::{
    is_toggle_shortcut, KeyChord, ThemeManager, ThemePresentation, ThemeStore, ThemeStoreError,
};
