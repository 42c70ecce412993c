//! Layout tree data structures.
//!
//! The tree is an arena: nodes are addressed by [`NodeId`] and a node's
//! parent is stored as an id, never as an owning link.

use boxgroup_core::{Alignment, Axis, Bounds, Insets, LayoutError, NodeId};
use glam::UVec2;

/// Anything that can report the smallest footprint it fits in.
pub trait Measurable {
    fn min_size(&self) -> UVec2;
}

impl Measurable for UVec2 {
    fn min_size(&self) -> UVec2 {
        *self
    }
}

impl Measurable for (u32, u32) {
    fn min_size(&self) -> UVec2 {
        UVec2::new(self.0, self.1)
    }
}

impl Measurable for Bounds {
    fn min_size(&self) -> UVec2 {
        self.size()
    }
}

/// A leaf: a rectangle of fixed intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentNode {
    pub size: UVec2,
}

impl Measurable for ContentNode {
    fn min_size(&self) -> UVec2 {
        self.size
    }
}

/// A child slot in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub node: NodeId,
    pub alignment: Alignment,
    pub decoration: Option<String>,
    /// Authored border (left, right, top, bottom). Expansion never rewrites it.
    pub border: Insets,
}

/// A composite node laying out its children along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub axis: Axis,
    /// Author-supplied floor on the group size
    pub min_size: UVec2,
    /// Children in insertion order
    pub entries: Vec<ChildEntry>,
}

impl Group {
    pub fn new(axis: Axis, min_size: UVec2) -> Self {
        Self {
            axis,
            min_size,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_decorations(&self) -> bool {
        self.entries.iter().any(|entry| entry.decoration.is_some())
    }
}

/// Options for placing a child: alignment, decoration and border.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub alignment: Alignment,
    pub decoration: Option<String>,
    pub border: Insets,
}

impl Placement {
    /// Centered, undecorated, no border.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the decoration name.
    pub fn with_decoration(mut self, name: impl Into<String>) -> Self {
        self.decoration = Some(name.into());
        self
    }

    /// Set the border.
    pub fn with_border(mut self, border: impl Into<Insets>) -> Self {
        self.border = border.into();
        self
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Content(ContentNode),
    Group(Group),
}

/// A node in the layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    /// Unique ID for this node
    pub id: NodeId,
    /// Optional name for debugging
    pub label: Option<String>,
    pub kind: NodeKind,
    /// Group this node is placed in (None for a root)
    pub parent: Option<NodeId>,
}

impl LayoutNode {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group(_))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match &self.kind {
            NodeKind::Group(group) => Some(group),
            NodeKind::Content(_) => None,
        }
    }
}

/// The authored group tree.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// Create an empty layout tree.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached node and return its id.
    pub fn add(&mut self, kind: NodeKind, label: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(LayoutNode {
            id,
            label,
            kind,
            parent: None,
        });
        id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        self.nodes.get(id.index()).ok_or(LayoutError::UnknownNode { id })
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, LayoutError> {
        self.nodes.get_mut(id.index()).ok_or(LayoutError::UnknownNode { id })
    }

    /// Get a group by ID, failing for content nodes.
    pub fn group(&self, id: NodeId) -> Result<&Group, LayoutError> {
        self.get(id)?.as_group().ok_or(LayoutError::NotAGroup { id })
    }

    pub fn is_group(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, LayoutNode::is_group)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.get(id).ok().and_then(|node| node.label.as_deref())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).ok().and_then(|node| node.parent)
    }

    /// Follow parent links up to the node that has none.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Check whether `ancestor` is `id` or one of its parents.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Entry under which `id` is placed in its parent.
    pub fn entry_of(&self, id: NodeId) -> Option<&ChildEntry> {
        let parent = self.parent(id)?;
        self.group(parent)
            .ok()?
            .entries
            .iter()
            .find(|entry| entry.node == id)
    }

    /// Child entries of a group in insertion order.
    pub fn entries(&self, id: NodeId) -> Result<&[ChildEntry], LayoutError> {
        Ok(&self.group(id)?.entries)
    }

    /// Children of a group in insertion order (empty for content).
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.group(id)
            .ok()
            .into_iter()
            .flat_map(|group| group.entries.iter().map(|entry| entry.node))
    }

    /// `id` and everything below it, in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            let children: Vec<NodeId> = self.children(current).collect();
            stack.extend(children.into_iter().rev());
        }
        result
    }

    /// Append `node` to `group` and record the parent link.
    pub fn attach(
        &mut self,
        group: NodeId,
        node: NodeId,
        placement: Placement,
    ) -> Result<(), LayoutError> {
        self.group(group)?;
        let child = self.get(node)?;
        if let Some(parent) = child.parent {
            return Err(LayoutError::AlreadyPlaced { id: node, parent });
        }
        if self.is_ancestor(node, group) {
            return Err(LayoutError::CycleDetected { id: node });
        }

        self.get_mut(node)?.parent = Some(group);
        if let NodeKind::Group(target) = &mut self.get_mut(group)?.kind {
            target.entries.push(ChildEntry {
                node,
                alignment: placement.alignment,
                decoration: placement.decoration,
                border: placement.border,
            });
        }
        Ok(())
    }

    /// Undo the most recent `attach` into `group`.
    pub(crate) fn detach_last(&mut self, group: NodeId) -> Option<NodeId> {
        let NodeKind::Group(target) = &mut self.get_mut(group).ok()?.kind else {
            return None;
        };
        let entry = target.entries.pop()?;
        if let Ok(node) = self.get_mut(entry.node) {
            node.parent = None;
        }
        Some(entry.node)
    }

    /// Replace the intrinsic size of a content node.
    pub fn set_content_size(&mut self, id: NodeId, size: UVec2) -> Result<(), LayoutError> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Content(content) => {
                content.size = size;
                Ok(())
            }
            NodeKind::Group(_) => Err(LayoutError::NotContent { id }),
        }
    }
}
