//! Box-model layout for nested groups of rectangular content.
//!
//! A tree of groups lays its children out along a horizontal or vertical
//! axis. Each child carries an alignment, a border and an optional
//! decoration whose frame thickness comes from a [`DecorationCatalog`].
//!
//! # Architecture
//!
//! 1. **Minimum size**: bottom-up, sums along the group axis and takes the
//!    maximum across it, floored by the group's explicit minimum
//! 2. **Expand**: top-down, hands the slack between a group's size and its
//!    content to the children with exact integer remainders
//! 3. **Position**: top-down, always started from the root of the tree
//!
//! Authored data (the tree) is never rewritten by a layout pass; expansion
//! and positions live in a separate [`ComputedLayout`].
//!
//! # Example
//!
//! ```
//! use boxgroup_core::{Axis, Axes, UVec2};
//! use boxgroup_decor::UniformCatalog;
//! use boxgroup_layout::{LayoutEngine, Placement};
//!
//! let mut engine = LayoutEngine::new(UniformCatalog::default());
//! let row = engine.add_group(Axis::Horizontal, UVec2::new(72, 0));
//! for width in [10, 20, 30] {
//!     let leaf = engine.add_content(UVec2::new(width, 10));
//!     engine.place(row, leaf, Placement::new())?;
//! }
//! engine.expand(row, Axes::HORIZONTAL)?;
//! assert_eq!(engine.size(row), Some(UVec2::new(72, 10)));
//! # Ok::<(), boxgroup_core::LayoutError>(())
//! ```

mod engine;
mod expand;
mod measure;
mod position;
mod slack;
mod snapshot;
mod tree;

pub use boxgroup_decor::DecorationCatalog;
pub use engine::{ComputedLayout, LayoutEngine, LayoutOptions, SlackPolicy};
pub use slack::{distribute_aligned, distribute_symmetric, Share};
pub use snapshot::{LayoutSnapshot, NodeSnapshot, SnapshotKind};
pub use tree::{ChildEntry, ContentNode, Group, LayoutNode, LayoutTree, Measurable, NodeKind, Placement};
