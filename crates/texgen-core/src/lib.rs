//! # texgen-core
//!
//! Shared library for the Texture Generator client containing the form field
//! rules, the wire types of the texture-generation endpoint, and the small
//! UI state machines (theme, side navigation, zoom popup).
//!
//! It has zero dependencies on HTTP clients, async runtimes, or a browser
//! document, so every rule in here can be tested in isolation.
//!
//! # Architecture overview (for beginners)
//!
//! The Texture Generator web page lets a user enter five parameters of a
//! reaction-diffusion simulation and asks a server to render the resulting
//! texture.  This crate is the pure foundation of the client.  It defines:
//!
//! - **`domain`** – The five form fields and their validators, plus the
//!   peripheral page behaviours: the light/dark [`Theme`], the collapsible
//!   [`SideNav`], and the image [`ZoomPopup`].
//!
//! - **`protocol`** – What travels over HTTP: the JSON request body sent to
//!   `POST /calculate` and the JSON response the server answers with.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `texgen_core::FieldId` instead of `texgen_core::domain::fields::FieldId`.
pub use domain::fields::{FieldId, FieldRule, FieldSpec, Validation};
pub use domain::navigation::{NavClasses, SideNav};
pub use domain::popup::{PopupClick, ZoomPopup};
pub use domain::theme::{Theme, ThemeParseError, ToggleButtonState};
pub use protocol::messages::{
    cache_busted_url, CalculateResponse, GenerationRequest, CALCULATE_PATH, UNKNOWN_ERROR,
};
