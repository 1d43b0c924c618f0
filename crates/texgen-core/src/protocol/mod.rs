//! Protocol module containing the JSON bodies of the texture-generation endpoint.

pub mod messages;

pub use messages::*;
