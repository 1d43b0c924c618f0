//! texgen-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does texgen-client do? (for beginners)
//!
//! The Texture Generator page has a form with five inputs: the stiffness `K`,
//! the maximum simulation time, the time step, and two colours.  When the
//! user clicks "Generate Texture", the client:
//!
//! 1. Validates every input and marks the invalid ones inline.
//! 2. Sends the raw values as JSON to the server's `POST /calculate`.
//! 3. Shows the rendered texture with "view" and "download" actions, or
//!    reports the server's error message.
//! 4. Announces each new texture to whoever subscribed to it.
//!
//! The page itself is abstracted behind the `FormView` trait, so the same
//! code runs against the in-memory `HeadlessForm` from tests and from the
//! `texgen` command-line tool.

/// Application layer: the texture generator and theme use cases.
pub mod application;

/// Infrastructure layer: HTTP, headless form, notifications, and storage.
pub mod infrastructure;
