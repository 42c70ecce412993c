//! Error types for the boxgroup engine.

use crate::types::{Axis, NodeId};
use thiserror::Error;

/// Errors while building or laying out a group tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unknown node {id}")]
    UnknownNode { id: NodeId },

    #[error("Node {id} is content, not a group")]
    NotAGroup { id: NodeId },

    #[error("Node {id} is a group, not content")]
    NotContent { id: NodeId },

    #[error("Node {id} is already placed in group {parent}")]
    AlreadyPlaced { id: NodeId, parent: NodeId },

    #[error("Placing {id} would make a group contain itself")]
    CycleDetected { id: NodeId },

    #[error("Layout of {id} does not fit in the i32 coordinate range")]
    Overflow { id: NodeId },

    #[error("Group {group} has no child at index {index}")]
    NoSuchChild { group: NodeId, index: usize },

    #[error("Requested {axis} size {requested} is below the minimum {minimum}")]
    NegativeSlack {
        axis: Axis,
        requested: u32,
        minimum: u32,
    },
}

/// Errors while loading decoration themes.
#[derive(Debug, Error)]
pub enum DecorationError {
    #[error("Invalid theme description: {reason}")]
    InvalidTheme { reason: String },

    #[error("Undefined decoration library: {name}")]
    MissingLibrary { name: String },
}
