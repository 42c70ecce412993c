//! Absolute positions, assigned top-down from a group's origin.

use boxgroup_core::{Anchor, Axis, Insets, LayoutError, NodeId};
use boxgroup_decor::DecorationCatalog;
use glam::IVec2;

use crate::engine::LayoutEngine;

impl<C: DecorationCatalog> LayoutEngine<C> {
    /// Place `id` at `origin` and every child inside it. Sizes must be measured.
    pub(crate) fn position_group(&mut self, id: NodeId, origin: IVec2) -> Result<(), LayoutError> {
        self.computed.positions[id.index()] = origin;

        let Ok(group) = self.tree.group(id) else {
            return Ok(());
        };
        let axis = group.axis;
        let cross = axis.cross();
        let available = cross.main_of(self.computed.sizes[id.index()]);

        let mut placed = Vec::with_capacity(group.entries.len());
        let mut offset = 0u32;
        for entry in &group.entries {
            let size = self.computed.sizes[entry.node.index()];
            let frame = self.entry_frame(entry);

            let main = offset.saturating_add(frame.leading(axis));
            offset = main
                .saturating_add(axis.main_of(size))
                .saturating_add(frame.trailing(axis));

            let across = cross_offset(
                entry.alignment.anchor(),
                available,
                cross.main_of(size),
                frame,
                cross,
            );
            let position = offset_by(origin, axis.compose_offset(main, across))
                .ok_or(LayoutError::Overflow { id })?;
            placed.push((entry.node, position));
        }

        for (node, position) in placed {
            if self.tree.is_group(node) {
                self.position_group(node, position)?;
            } else {
                self.computed.positions[node.index()] = position;
            }
        }
        Ok(())
    }
}

fn offset_by(origin: IVec2, offset: Option<IVec2>) -> Option<IVec2> {
    let offset = offset?;
    Some(IVec2::new(
        origin.x.checked_add(offset.x)?,
        origin.y.checked_add(offset.y)?,
    ))
}

/// Offset of a child on the cross axis, inside `available` pixels.
fn cross_offset(anchor: Anchor, available: u32, size: u32, frame: Insets, cross: Axis) -> u32 {
    match anchor {
        Anchor::Start => frame.leading(cross),
        Anchor::End => available.saturating_sub(size.saturating_add(frame.trailing(cross))),
        Anchor::Center => {
            let free = available.saturating_sub(size.saturating_add(frame.along(cross)));
            frame.leading(cross).saturating_add(free / 2)
        }
    }
}
