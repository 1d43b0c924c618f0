//! JSON bodies exchanged with the texture-generation endpoint.
//!
//! # Message flow
//!
//! ```text
//! Client → Server:  POST /calculate   {"K":"1.0","t_max":"10.0","delta_t":"0.1",
//!                                      "color1":"#0000ff","color2":"#ff0000"}
//! Server → Client:  2xx               {"image_url":"/static/images/texture.png"}
//!                   4xx / 5xx         {"error":"render failed"}
//! ```
//!
//! Success and failure are told apart by the HTTP status, not by which key is
//! present.  The request values stay raw text: the server does the numeric
//! parsing, so the client never rounds or reformats what the user typed.

use serde::{Deserialize, Serialize};

use crate::domain::fields::FieldId;

/// Path of the texture-generation endpoint, relative to the server base URL.
pub const CALCULATE_PATH: &str = "/calculate";

/// Message used when a failed response carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Request body of `POST /calculate`.
///
/// # Serde representation
///
/// ```json
/// {"K":"1.0","t_max":"10.0","delta_t":"0.1","color1":"#0000ff","color2":"#ff0000"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Stiffness coefficient, sent under the upper-case key `K`.
    #[serde(rename = "K")]
    pub k: String,
    pub t_max: String,
    pub delta_t: String,
    pub color1: String,
    pub color2: String,
}

impl GenerationRequest {
    /// Builds a request from a lookup of each field's raw text.
    ///
    /// Returns `None` if any field has no value.
    pub fn from_fields<F>(mut value_of: F) -> Option<Self>
    where
        F: FnMut(FieldId) -> Option<String>,
    {
        Some(Self {
            k: value_of(FieldId::Stiffness)?,
            t_max: value_of(FieldId::MaxTime)?,
            delta_t: value_of(FieldId::TimeStep)?,
            color1: value_of(FieldId::Color1)?,
            color2: value_of(FieldId::Color2)?,
        })
    }

    /// The raw text carried for `field`.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Stiffness => &self.k,
            FieldId::MaxTime => &self.t_max,
            FieldId::TimeStep => &self.delta_t,
            FieldId::Color1 => &self.color1,
            FieldId::Color2 => &self.color2,
        }
    }
}

/// Response body of `POST /calculate`.
///
/// Both fields are optional so that any JSON object deserialises; which one
/// matters depends on the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// URL of the rendered texture (success responses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Human-readable failure reason (error responses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculateResponse {
    /// The failure message to show the user, falling back to [`UNKNOWN_ERROR`].
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}

/// Appends a cache-busting query parameter to `url`.
///
/// The server renders every texture to the same file name, so without a
/// changing query string the browser would show the previous image from its
/// cache.
///
/// # Example
///
/// ```rust
/// use texgen_core::cache_busted_url;
///
/// assert_eq!(cache_busted_url("/img/1.png", 1700000000000), "/img/1.png?1700000000000");
/// assert_eq!(cache_busted_url("/img?id=1", 42), "/img?id=1&42");
/// ```
pub fn cache_busted_url(url: &str, timestamp_ms: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{timestamp_ms}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
