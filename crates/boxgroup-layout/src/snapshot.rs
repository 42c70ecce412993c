//! Flat, serializable view of a computed layout.

use boxgroup_core::{Axis, Bounds, Insets, LayoutError, NodeId};
use boxgroup_decor::DecorationCatalog;
use serde::Serialize;

use crate::engine::LayoutEngine;
use crate::tree::NodeKind;

/// Every node under a root, in pre-order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub root: NodeId,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub kind: SnapshotKind,
    pub bounds: Bounds,
    /// Authored border plus expansion (zero for the root)
    pub border: Insets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum SnapshotKind {
    Content,
    Group { axis: Axis },
}

impl LayoutSnapshot {
    pub fn get(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Pretty JSON, stable across runs for the same tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<C: DecorationCatalog> LayoutEngine<C> {
    /// Capture the current layout of `root` and everything below it.
    pub fn snapshot(&self, root: NodeId) -> Result<LayoutSnapshot, LayoutError> {
        self.tree.get(root)?;

        let nodes = self
            .tree
            .descendants(root)
            .into_iter()
            .filter_map(|id| {
                let node = self.tree.get(id).ok()?;
                let kind = match &node.kind {
                    NodeKind::Content(_) => SnapshotKind::Content,
                    NodeKind::Group(group) => SnapshotKind::Group { axis: group.axis },
                };
                let entry = (id != root).then(|| self.tree.entry_of(id)).flatten();
                Some(NodeSnapshot {
                    id,
                    label: node.label.clone(),
                    kind,
                    bounds: self.bounds(id)?,
                    border: entry.map_or(Insets::ZERO, |entry| {
                        entry.border + self.computed.padding[id.index()]
                    }),
                    decoration: entry.and_then(|entry| entry.decoration.clone()),
                })
            })
            .collect();

        Ok(LayoutSnapshot { root, nodes })
    }
}
