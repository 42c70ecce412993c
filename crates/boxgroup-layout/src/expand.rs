//! Slack distribution, top-down.
//!
//! Along its own axis a group spreads its slack evenly around every child.
//! Across it, each child takes the space up to the group's cross size on
//! the side its alignment leaves open. A child group is not padded: the
//! share becomes a size target for that group, which then expands itself.

use boxgroup_core::{Axes, Axis, LayoutError, NodeId, UVec2};
use boxgroup_decor::DecorationCatalog;

use crate::engine::{ComputedLayout, LayoutEngine, SlackPolicy};
use crate::slack::{distribute_aligned, distribute_symmetric, Share};

impl<C: DecorationCatalog> LayoutEngine<C> {
    /// Grow every child under `group` until the subtree fills its size on `axes`.
    ///
    /// Starts from the authored state each time, so calling it again gives
    /// the same result.
    pub fn expand(&mut self, group: NodeId, axes: Axes) -> Result<(), LayoutError> {
        self.tree.group(group)?;
        let saved = self.computed.clone();
        self.clear_expansion(group, false);
        self.expand_group(group, axes);
        self.relayout_or_restore(group, saved)
    }

    /// Expand `group` as if it had been asked to be `size` on `axes`.
    pub fn expand_to(
        &mut self,
        group: NodeId,
        size: UVec2,
        axes: Axes,
    ) -> Result<(), LayoutError> {
        self.tree.group(group)?;
        let saved = self.computed.clone();
        self.clear_expansion(group, true);
        let minimum = self.measure(group);

        let mut target = UVec2::ZERO;
        for axis in axes.iter_axes() {
            let requested = axis.main_of(size);
            let least = axis.main_of(minimum);
            if requested < least {
                match self.options.slack_policy {
                    SlackPolicy::Reject => {
                        self.computed = saved;
                        return Err(LayoutError::NegativeSlack {
                            axis,
                            requested,
                            minimum: least,
                        });
                    }
                    SlackPolicy::Clamp => {
                        tracing::warn!(%group, %axis, requested, minimum = least, "request below minimum, clamping");
                    }
                }
            }
            target = axis.compose(requested.max(least), axis.cross_of(target));
        }

        self.computed.targets[group.index()] = target;
        self.expand_group(group, axes);
        self.relayout_or_restore(group, saved)
    }

    /// Drop all expansion below `group` and lay the tree out again.
    pub fn reset_expansion(&mut self, group: NodeId) -> Result<(), LayoutError> {
        self.tree.group(group)?;
        let saved = self.computed.clone();
        self.clear_expansion(group, true);
        self.relayout_or_restore(group, saved)
    }

    fn relayout_or_restore(&mut self, group: NodeId, saved: ComputedLayout) -> Result<(), LayoutError> {
        if let Err(err) = self.update_geometry(group) {
            self.computed = saved;
            return Err(err);
        }
        Ok(())
    }

    /// Forget padding and targets in the subtree. The padding of `group`
    /// itself belongs to its parent and is kept.
    fn clear_expansion(&mut self, group: NodeId, include_target: bool) {
        for id in self.tree.descendants(group) {
            if id != group {
                self.computed.padding[id.index()] = Default::default();
            }
            if id != group || include_target {
                self.computed.targets[id.index()] = UVec2::ZERO;
            }
        }
    }

    fn expand_group(&mut self, id: NodeId, axes: Axes) {
        let Ok(group) = self.tree.group(id) else {
            return;
        };
        let own_axis = group.axis;
        let entries = group.entries.clone();

        let size = self.measure(id);
        let sizes = self.computed.sizes.clone();
        let content = self.content_extent(id, &sizes);

        for axis in axes.iter_axes() {
            let available = axis.main_of(size);

            if axis == own_axis {
                let used = axis.main_of(content);
                let slack = clamp_slack(id, axis, available, used);
                tracing::debug!(%id, %axis, slack, children = entries.len(), "spreading slack along group");
                let shares = distribute_symmetric(slack, entries.len());
                for (entry, share) in entries.iter().zip(shares) {
                    self.grow(entry.node, axis, share, sizes[entry.node.index()]);
                }
            } else {
                for entry in &entries {
                    let outer = axis.main_of(self.outer_extent(entry, &sizes));
                    let slack = clamp_slack(id, axis, available, outer);
                    let share = distribute_aligned(slack, entry.alignment.anchor());
                    self.grow(entry.node, axis, share, sizes[entry.node.index()]);
                }
            }
        }

        for entry in &entries {
            if self.tree.is_group(entry.node) {
                self.expand_group(entry.node, axes);
            }
        }
    }

    /// Pad a leaf, or raise a group's target size by the same amount.
    fn grow(&mut self, node: NodeId, axis: Axis, share: Share, size: UVec2) {
        if share.total() == 0 {
            return;
        }
        let index = node.index();
        if self.tree.is_group(node) {
            let target = self.computed.targets[index];
            let grown = axis.main_of(size).saturating_add(share.total());
            self.computed.targets[index] = axis.compose(grown, axis.cross_of(target));
        } else {
            let padding = &mut self.computed.padding[index];
            padding.add_leading(axis, share.leading);
            padding.add_trailing(axis, share.trailing);
        }
    }
}

fn clamp_slack(id: NodeId, axis: Axis, available: u32, used: u32) -> u32 {
    if available < used {
        tracing::warn!(%id, %axis, available, used, "negative slack clamped to zero");
    }
    available.saturating_sub(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LayoutOptions;
    use crate::tree::Placement;
    use boxgroup_core::{Alignment, Insets, IVec2};
    use boxgroup_decor::{Theme, ThemeCatalog, UniformCatalog};

    fn engine() -> LayoutEngine<UniformCatalog> {
        LayoutEngine::new(UniformCatalog::default())
    }

    fn row_of(engine: &mut LayoutEngine<UniformCatalog>, width: u32, leaves: &[u32]) -> (NodeId, Vec<NodeId>) {
        let row = engine.add_group(Axis::Horizontal, UVec2::new(width, 0));
        let ids = leaves
            .iter()
            .map(|&w| {
                let leaf = engine.add_content((w, 10));
                engine.place(row, leaf, Placement::new()).unwrap();
                leaf
            })
            .collect();
        (row, ids)
    }

    /// Sum of every child's footprint along the group axis.
    fn covered<C: DecorationCatalog>(engine: &LayoutEngine<C>, group: NodeId) -> u32 {
        let axis = engine.tree().group(group).unwrap().axis;
        engine
            .tree()
            .children(group)
            .map(|child| {
                let border = engine.effective_border(child).unwrap() + engine.decoration_insets(child);
                axis.main_of(engine.size(child).unwrap()) + border.along(axis)
            })
            .sum()
    }

    #[test]
    fn test_even_slack_on_primary_axis() {
        let mut engine = engine();
        let (row, ids) = row_of(&mut engine, 72, &[10, 20, 30]);
        engine.expand(row, Axes::HORIZONTAL).unwrap();

        for &id in &ids {
            assert_eq!(engine.effective_border(id), Some(Insets::new(2, 2, 0, 0)));
        }
        assert_eq!(covered(&engine, row), 72);
        assert_eq!(engine.position(ids[0]), Some(IVec2::new(2, 0)));
        assert_eq!(engine.position(ids[1]), Some(IVec2::new(16, 0)));
        assert_eq!(engine.position(ids[2]), Some(IVec2::new(40, 0)));
    }

    #[test]
    fn test_odd_unit_goes_to_first_child() {
        let mut engine = engine();
        let (row, ids) = row_of(&mut engine, 73, &[10, 20, 30]);
        engine.expand(row, Axes::HORIZONTAL).unwrap();

        assert_eq!(engine.effective_border(ids[0]), Some(Insets::new(2, 3, 0, 0)));
        assert_eq!(engine.effective_border(ids[1]), Some(Insets::new(2, 2, 0, 0)));
        assert_eq!(engine.effective_border(ids[2]), Some(Insets::new(2, 2, 0, 0)));
        assert_eq!(covered(&engine, row), 73);
    }

    #[test]
    fn test_center_cross_axis() {
        for (width, leading, trailing) in [(100, 30, 30), (101, 30, 31)] {
            let mut engine = engine();
            let column = engine.add_group(Axis::Vertical, UVec2::new(width, 0));
            let leaf = engine.add_content((40, 10));
            engine.place(column, leaf, Placement::new()).unwrap();
            engine.expand(column, Axes::HORIZONTAL).unwrap();

            assert_eq!(
                engine.effective_border(leaf),
                Some(Insets::new(leading, trailing, 0, 0))
            );
            assert_eq!(engine.position(leaf), Some(IVec2::new(leading as i32, 0)));
        }
    }

    #[test]
    fn test_pinned_cross_axis() {
        let mut engine = engine();
        let row = engine.add_group(Axis::Horizontal, UVec2::new(0, 50));
        let top = engine.add_content((10, 10));
        let bottom = engine.add_content((10, 20));
        engine.place(row, top, Placement::aligned(Alignment::Top)).unwrap();
        engine.place(row, bottom, Placement::aligned(Alignment::Bottom)).unwrap();
        engine.expand(row, Axes::VERTICAL).unwrap();

        assert_eq!(engine.effective_border(top), Some(Insets::new(0, 0, 0, 40)));
        assert_eq!(engine.effective_border(bottom), Some(Insets::new(0, 0, 30, 0)));
        assert_eq!(engine.position(top), Some(IVec2::new(0, 0)));
        assert_eq!(engine.position(bottom), Some(IVec2::new(10, 30)));
    }

    #[test]
    fn test_authored_border_kept_under_expansion() {
        let mut engine = engine();
        let column = engine.add_group(Axis::Vertical, UVec2::new(50, 0));
        let leaf = engine.add_content((20, 10));
        engine
            .place(column, leaf, Placement::new().with_border((5, 1, 0, 0)))
            .unwrap();
        engine.expand(column, Axes::HORIZONTAL).unwrap();

        // 50 - (20 + 6) = 24 split 12/12 on top of the authored border
        assert_eq!(engine.effective_border(leaf), Some(Insets::new(17, 13, 0, 0)));
        assert_eq!(engine.tree().entry_of(leaf).unwrap().border, Insets::new(5, 1, 0, 0));
        assert_eq!(engine.position(leaf), Some(IVec2::new(17, 0)));
    }

    #[test]
    fn test_child_group_grows_instead_of_padding() {
        let mut engine = engine();
        let outer = engine.add_group(Axis::Horizontal, UVec2::new(100, 0));
        let inner = engine.add_group(Axis::Horizontal, UVec2::ZERO);
        let a = engine.add_content((10, 10));
        let b = engine.add_content((10, 10));
        engine.place(inner, a, Placement::new()).unwrap();
        engine.place(inner, b, Placement::new()).unwrap();
        let c = engine.add_content((20, 10));
        engine.place(outer, inner, Placement::new()).unwrap();
        engine.place(outer, c, Placement::new()).unwrap();

        engine.expand(outer, Axes::HORIZONTAL).unwrap();

        // slack 60: inner takes 30 as size, c takes 15 on each side
        assert_eq!(engine.effective_border(inner), Some(Insets::ZERO));
        assert_eq!(engine.size(inner), Some(UVec2::new(50, 10)));
        assert_eq!(engine.effective_border(c), Some(Insets::new(15, 15, 0, 0)));
        // inner re-expands its 30 over a and b
        assert_eq!(engine.effective_border(a), Some(Insets::new(8, 8, 0, 0)));
        assert_eq!(engine.effective_border(b), Some(Insets::new(7, 7, 0, 0)));
        assert_eq!(covered(&engine, inner), 50);
        assert_eq!(covered(&engine, outer), 100);
    }

    #[test]
    fn test_cross_fill_reaches_nested_leaves() {
        let mut engine = engine();
        let column = engine.add_group(Axis::Vertical, UVec2::ZERO);
        let wide = engine.add_content((80, 10));
        let row = engine.add_group(Axis::Horizontal, UVec2::ZERO);
        let a = engine.add_content((10, 10));
        let b = engine.add_content((30, 10));
        engine.place(row, a, Placement::new()).unwrap();
        engine.place(row, b, Placement::new()).unwrap();
        engine.place(column, wide, Placement::new()).unwrap();
        engine.place(column, row, Placement::new()).unwrap();

        engine.expand(column, Axes::BOTH).unwrap();

        assert_eq!(engine.size(row), Some(UVec2::new(80, 10)));
        assert_eq!(covered(&engine, row), 80);
        assert_eq!(engine.bounds(b).unwrap().right(), 80 - 10);
    }

    #[test]
    fn test_expand_is_repeatable() {
        let mut engine = engine();
        let (row, ids) = row_of(&mut engine, 73, &[10, 20, 30]);
        engine.expand(row, Axes::BOTH).unwrap();
        let first: Vec<_> = ids.iter().map(|&id| engine.bounds(id)).collect();
        engine.expand(row, Axes::BOTH).unwrap();
        let second: Vec<_> = ids.iter().map(|&id| engine.bounds(id)).collect();
        assert_eq!(first, second);
        assert_eq!(covered(&engine, row), 73);
    }

    #[test]
    fn test_expand_to_other_sizes() {
        let mut engine = engine();
        let (row, ids) = row_of(&mut engine, 0, &[10, 20, 30]);

        engine.expand_to(row, UVec2::new(72, 10), Axes::HORIZONTAL).unwrap();
        assert_eq!(engine.size(row), Some(UVec2::new(72, 10)));
        assert_eq!(covered(&engine, row), 72);

        engine.expand_to(row, UVec2::new(90, 10), Axes::HORIZONTAL).unwrap();
        assert_eq!(engine.size(row), Some(UVec2::new(90, 10)));
        assert_eq!(engine.effective_border(ids[0]), Some(Insets::new(5, 5, 0, 0)));

        engine.reset_expansion(row).unwrap();
        assert_eq!(engine.size(row), Some(UVec2::new(60, 10)));
        assert_eq!(engine.effective_border(ids[0]), Some(Insets::ZERO));
    }

    #[test]
    fn test_expand_to_below_minimum() {
        let mut engine = engine();
        let (row, _) = row_of(&mut engine, 0, &[10, 20, 30]);

        engine.expand_to(row, UVec2::new(40, 10), Axes::HORIZONTAL).unwrap();
        assert_eq!(engine.size(row), Some(UVec2::new(60, 10)));

        let options = LayoutOptions {
            slack_policy: SlackPolicy::Reject,
            ..LayoutOptions::default()
        };
        let mut strict = LayoutEngine::with_options(UniformCatalog::default(), options);
        let (row, ids) = row_of(&mut strict, 0, &[10, 20, 30]);
        strict.expand_to(row, UVec2::new(66, 10), Axes::HORIZONTAL).unwrap();
        let before = strict.computed().clone();

        assert_eq!(
            strict.expand_to(row, UVec2::new(40, 10), Axes::HORIZONTAL),
            Err(LayoutError::NegativeSlack {
                axis: Axis::Horizontal,
                requested: 40,
                minimum: 60,
            })
        );
        assert_eq!(strict.computed(), &before);
        assert_eq!(strict.effective_border(ids[0]), Some(Insets::new(1, 1, 0, 0)));
    }

    #[test]
    fn test_expand_to_beyond_coordinates() {
        let mut engine = engine();
        let (row, ids) = row_of(&mut engine, 0, &[10, 20, 30]);
        engine.expand_to(row, UVec2::new(72, 10), Axes::HORIZONTAL).unwrap();
        let before = engine.computed().clone();

        assert_eq!(
            engine.expand_to(row, UVec2::new(u32::MAX, 10), Axes::HORIZONTAL),
            Err(LayoutError::Overflow { id: row })
        );
        assert_eq!(engine.computed(), &before);
        assert_eq!(engine.effective_border(ids[0]), Some(Insets::new(2, 2, 0, 0)));

        // the largest size that still fits is accepted
        let widest = i32::MAX as u32;
        engine.expand_to(row, UVec2::new(widest, 10), Axes::HORIZONTAL).unwrap();
        assert_eq!(covered(&engine, row), widest);
        assert!(engine.position(ids[2]).unwrap().x > engine.position(ids[1]).unwrap().x);
    }

    #[test]
    fn test_empty_group_expand_is_noop() {
        let mut engine = engine();
        let empty = engine.add_group(Axis::Horizontal, UVec2::new(30, 30));
        engine.expand(empty, Axes::BOTH).unwrap();
        assert_eq!(engine.size(empty), Some(UVec2::new(30, 30)));
    }

    #[test]
    fn test_expand_content_node_fails() {
        let mut engine = engine();
        let leaf = engine.add_content((1, 1));
        assert_eq!(
            engine.expand(leaf, Axes::BOTH),
            Err(LayoutError::NotAGroup { id: leaf })
        );
    }

    #[test]
    fn test_unknown_decoration_still_covers() {
        let mut engine = LayoutEngine::new(ThemeCatalog::new(Theme::dark()));
        let row = engine.add_group(Axis::Horizontal, UVec2::new(120, 40));
        let known = engine.add_content((20, 10));
        let unknown = engine.add_content((20, 10));
        engine
            .place(row, known, Placement::new().with_decoration("Ridge"))
            .unwrap();
        engine
            .place(row, unknown, Placement::new().with_decoration("NoSuchFrame"))
            .unwrap();
        engine.expand(row, Axes::BOTH).unwrap();

        assert_eq!(engine.decoration_insets(unknown), Insets::uniform(5));
        assert_eq!(covered(&engine, row), 120);
        let height = engine.bounds(unknown).unwrap().height
            + engine.effective_border(unknown).unwrap().along(Axis::Vertical)
            + 10;
        assert_eq!(height, 40);
    }
}
