//! Domain entities for the Texture Generator client.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from HTTP libraries, storage, or a browser document.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the domain answers questions such as "is `10` a valid stiffness?",
//! "which classes does the side navigation carry once expanded?" or "does a
//! click on this element close the zoom popup?".  The application layer in
//! `texgen-client` turns those answers into mutations of a form view.

/// The five texture parameters and their validators.
///
/// See [`fields::FieldSpec`] for the main type.
pub mod fields;

/// Collapsible side navigation state.
pub mod navigation;

/// Image zoom popup state.
pub mod popup;

/// Light/dark theme and the toggle button presentation.
pub mod theme;
