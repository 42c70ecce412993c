//! Decoration catalog for boxgroup layouts.
//!
//! Layout only needs to know how thick a decorative frame is on each side.
//! This crate maps decoration names to those insets:
//!
//! - [`DecorationCatalog`] is the boundary the layout engine calls into
//! - [`ThemeCatalog`] resolves names against a [`Theme`] and caches the result
//! - [`UniformCatalog`] gives every decoration the same insets
//!
//! # Example
//!
//! ```
//! use boxgroup_decor::{DecorationCatalog, Theme, ThemeCatalog};
//! use boxgroup_core::Insets;
//!
//! let catalog = ThemeCatalog::new(Theme::dark());
//! assert_eq!(catalog.insets("Groove"), Insets::uniform(8));
//! ```

mod catalog;
mod theme;

pub use catalog::{DecorationCatalog, ThemeCatalog, UniformCatalog, DEFAULT_DECORATION_INSETS};
pub use theme::{DecorationLibrary, Theme};
