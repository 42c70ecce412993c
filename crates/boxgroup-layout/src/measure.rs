//! Minimum size, computed bottom-up.
//!
//! Sums saturate at `u32::MAX`. A saturated size can never fit in the
//! coordinate range, so positioning rejects it.

use boxgroup_core::NodeId;
use boxgroup_decor::DecorationCatalog;
use glam::UVec2;

use crate::engine::LayoutEngine;
use crate::tree::{ChildEntry, NodeKind};

impl<C: DecorationCatalog> LayoutEngine<C> {
    /// Smallest size `id` can occupy, without touching the cached layout.
    pub fn min_size(&self, id: NodeId) -> Option<UVec2> {
        self.tree.get(id).ok()?;
        let mut scratch = vec![UVec2::ZERO; self.tree.len()];
        Some(self.measure_into(id, &mut scratch))
    }

    /// Measure the subtree under `id` into the cached sizes.
    pub(crate) fn measure(&mut self, id: NodeId) -> UVec2 {
        let mut sizes = std::mem::take(&mut self.computed.sizes);
        let size = self.measure_into(id, &mut sizes);
        self.computed.sizes = sizes;
        size
    }

    fn measure_into(&self, id: NodeId, sizes: &mut [UVec2]) -> UVec2 {
        let Ok(node) = self.tree.get(id) else {
            return UVec2::ZERO;
        };

        let size = match &node.kind {
            NodeKind::Content(content) => content.size,
            NodeKind::Group(group) => {
                for entry in &group.entries {
                    self.measure_into(entry.node, sizes);
                }
                let content = self.content_extent(id, sizes);
                let mut size = content
                    .max(group.min_size)
                    .max(self.computed.targets[id.index()]);
                if group.has_decorations() {
                    size = size.max(UVec2::splat(self.options.decorated_floor));
                }
                tracing::trace!(%id, ?content, ?size, "measured group");
                size
            }
        };

        sizes[id.index()] = size;
        size
    }

    /// Footprint of the children alone: summed along the group axis, the
    /// widest across it. Child sizes must already be in `sizes`.
    pub(crate) fn content_extent(&self, id: NodeId, sizes: &[UVec2]) -> UVec2 {
        let Ok(group) = self.tree.group(id) else {
            return UVec2::ZERO;
        };
        let axis = group.axis;

        let (main, cross) = group
            .entries
            .iter()
            .map(|entry| self.outer_extent(entry, sizes))
            .fold((0u32, 0u32), |(main, cross), outer| {
                (main.saturating_add(axis.main_of(outer)), cross.max(axis.cross_of(outer)))
            });

        axis.compose(main, cross)
    }

    /// Child size plus its border, expansion padding and decoration.
    pub(crate) fn outer_extent(&self, entry: &ChildEntry, sizes: &[UVec2]) -> UVec2 {
        sizes[entry.node.index()].saturating_add(self.entry_frame(entry).size())
    }
}
