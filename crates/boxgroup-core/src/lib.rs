//! Core types and errors for the boxgroup layout engine.
//!
//! This crate provides the foundational types used across all other boxgroup crates:
//! - Axis and alignment vocabulary for groups and their children
//! - Integer geometry (insets, bounds) shared by layout and rendering
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;

pub use glam::{IVec2, UVec2};
