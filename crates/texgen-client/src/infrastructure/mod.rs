//! Infrastructure layer for the client.
//!
//! Contains the adapters behind the application layer's ports.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `texgen_core`, but MUST NOT be imported by the `application` layer outside
//! of tests.
//!
//! # Sub-modules
//!
//! - **`http`** – `reqwest` implementation of `GenerationTransport`.
//! - **`form`** – `HeadlessForm`, the in-memory `FormView` used by the CLI and
//!   by tests.
//! - **`notify`** – Log-backed `Notifier` and TOML-catalog `Localizer`.
//! - **`storage`** – TOML configuration file and theme persistence.

pub mod form;
pub mod http;
pub mod notify;
pub mod storage;
