//! Storage infrastructure: configuration and theme persistence.
//!
//! - **`config`** – Reads and writes the TOML configuration file from the
//!   platform-appropriate directory, with defaults for a first run.
//! - **`theme_store`** – `ThemeStore` implementations: a small TOML file (the
//!   desktop stand-in for the page's local storage) and an in-memory store.

pub mod config;
pub mod theme_store;

pub use config::{ClientConfig, ConfigError};
pub use theme_store::{FileThemeStore, MemoryThemeStore};
