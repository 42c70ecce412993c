//! The layout engine: an authored tree plus its computed layout.

use boxgroup_core::{Axis, Bounds, Insets, LayoutError, NodeId};
use boxgroup_decor::{DecorationCatalog, DEFAULT_DECORATION_INSETS};
use glam::{IVec2, UVec2};

use crate::tree::{ChildEntry, ContentNode, Group, LayoutTree, Measurable, NodeKind, Placement};

/// What `expand_to` does with a requested size below the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlackPolicy {
    /// Grow the request up to the minimum
    #[default]
    Clamp,
    /// Fail with [`LayoutError::NegativeSlack`]
    Reject,
}

/// Options for layout computation.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Smallest width and height of a group holding a decorated child
    pub decorated_floor: u32,
    /// Handling of requests smaller than the minimum size
    pub slack_policy: SlackPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            decorated_floor: 2 * DEFAULT_DECORATION_INSETS.left,
            slack_policy: SlackPolicy::Clamp,
        }
    }
}

/// Results of the layout passes, indexed by node.
///
/// Expansion is kept here instead of in the authored borders, so a tree
/// can be expanded again to a different size without restoring anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedLayout {
    pub(crate) sizes: Vec<UVec2>,
    pub(crate) positions: Vec<IVec2>,
    /// Border added by expansion around a node inside its parent
    pub(crate) padding: Vec<Insets>,
    /// Size a parent's expansion asked a group to grow to
    pub(crate) targets: Vec<UVec2>,
}

impl ComputedLayout {
    fn push(&mut self, size: UVec2) {
        self.sizes.push(size);
        self.positions.push(IVec2::ZERO);
        self.padding.push(Insets::ZERO);
        self.targets.push(UVec2::ZERO);
    }

    pub fn size(&self, id: NodeId) -> Option<UVec2> {
        self.sizes.get(id.index()).copied()
    }

    pub fn position(&self, id: NodeId) -> Option<IVec2> {
        self.positions.get(id.index()).copied()
    }

    pub fn padding(&self, id: NodeId) -> Option<Insets> {
        self.padding.get(id.index()).copied()
    }

    pub fn target(&self, id: NodeId) -> Option<UVec2> {
        self.targets.get(id.index()).copied()
    }
}

/// Builds a group tree and keeps its layout up to date.
#[derive(Debug)]
pub struct LayoutEngine<C> {
    pub(crate) tree: LayoutTree,
    pub(crate) catalog: C,
    pub(crate) options: LayoutOptions,
    pub(crate) computed: ComputedLayout,
}

impl<C: DecorationCatalog> LayoutEngine<C> {
    /// Create an engine with default options.
    pub fn new(catalog: C) -> Self {
        Self::with_options(catalog, LayoutOptions::default())
    }

    pub fn with_options(catalog: C, options: LayoutOptions) -> Self {
        Self {
            tree: LayoutTree::new(),
            catalog,
            options,
            computed: ComputedLayout::default(),
        }
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn computed(&self) -> &ComputedLayout {
        &self.computed
    }

    /// Add a detached leaf sized by `content`.
    pub fn add_content(&mut self, content: impl Measurable) -> NodeId {
        self.insert(NodeKind::Content(ContentNode { size: content.min_size() }), None)
    }

    pub fn add_labelled_content(&mut self, label: &str, content: impl Measurable) -> NodeId {
        self.insert(
            NodeKind::Content(ContentNode { size: content.min_size() }),
            Some(label.to_string()),
        )
    }

    /// Add a detached, empty group with an explicit minimum size.
    pub fn add_group(&mut self, axis: Axis, min_size: UVec2) -> NodeId {
        self.insert(NodeKind::Group(Group::new(axis, min_size)), None)
    }

    pub fn add_labelled_group(&mut self, label: &str, axis: Axis, min_size: UVec2) -> NodeId {
        self.insert(
            NodeKind::Group(Group::new(axis, min_size)),
            Some(label.to_string()),
        )
    }

    fn insert(&mut self, kind: NodeKind, label: Option<String>) -> NodeId {
        let size = match &kind {
            NodeKind::Content(content) => content.size,
            NodeKind::Group(group) => group.min_size,
        };
        self.computed.push(size);
        self.tree.add(kind, label)
    }

    /// Append `node` to `group`, then lay the whole tree out again.
    ///
    /// A placement that would push the tree out of the `i32` coordinate
    /// range fails with [`LayoutError::Overflow`] and leaves nothing behind.
    pub fn place(
        &mut self,
        group: NodeId,
        node: NodeId,
        placement: Placement,
    ) -> Result<(), LayoutError> {
        self.tree.attach(group, node, placement)?;
        let saved = self.computed.clone();
        if let Err(err) = self.update_geometry(group) {
            self.tree.detach_last(group);
            self.computed = saved;
            return Err(err);
        }
        tracing::debug!(%group, %node, "placed node");
        Ok(())
    }

    /// Change the intrinsic size of a leaf and lay its tree out again.
    pub fn set_content_size(
        &mut self,
        id: NodeId,
        content: impl Measurable,
    ) -> Result<(), LayoutError> {
        let previous = match &self.tree.get(id)?.kind {
            NodeKind::Content(current) => current.size,
            NodeKind::Group(_) => return Err(LayoutError::NotContent { id }),
        };
        let size = content.min_size();
        let saved = self.computed.clone();

        self.tree.set_content_size(id, size)?;
        self.computed.sizes[id.index()] = size;
        if let Err(err) = self.update_geometry(id) {
            self.tree.set_content_size(id, previous)?;
            self.computed = saved;
            return Err(err);
        }
        Ok(())
    }

    /// Move a node. A group lays its subtree out from the new origin.
    pub fn set_position(&mut self, id: NodeId, origin: IVec2) -> Result<(), LayoutError> {
        if !self.tree.get(id)?.is_group() {
            self.computed.positions[id.index()] = origin;
            return Ok(());
        }
        let saved = self.computed.clone();
        if let Err(err) = self.layout_from(id, origin) {
            self.computed = saved;
            return Err(err);
        }
        Ok(())
    }

    /// Re-run positioning from the root of the tree holding `id`.
    ///
    /// On error the computed layout may be half updated; public callers
    /// restore it.
    pub fn update_geometry(&mut self, id: NodeId) -> Result<(), LayoutError> {
        let root = self.tree.root_of(id);
        if !self.tree.is_group(root) {
            return Ok(());
        }
        let origin = self.computed.positions[root.index()];
        self.layout_from(root, origin)
    }

    fn layout_from(&mut self, group: NodeId, origin: IVec2) -> Result<(), LayoutError> {
        let size = self.measure(group);
        if !fits(origin.x, size.x) || !fits(origin.y, size.y) {
            tracing::warn!(%group, ?origin, ?size, "layout leaves the coordinate range");
            return Err(LayoutError::Overflow { id: group });
        }
        self.position_group(group, origin)
    }

    /// Absolute top-left corner from the last layout pass.
    pub fn position(&self, id: NodeId) -> Option<IVec2> {
        self.computed.position(id)
    }

    /// Size from the last layout pass.
    pub fn size(&self, id: NodeId) -> Option<UVec2> {
        self.computed.size(id)
    }

    pub fn bounds(&self, id: NodeId) -> Option<Bounds> {
        Some(Bounds::from_vecs(self.position(id)?, self.size(id)?))
    }

    /// Authored border plus whatever expansion added.
    pub fn effective_border(&self, id: NodeId) -> Option<Insets> {
        let entry = self.tree.entry_of(id)?;
        Some(entry.border + self.computed.padding(id)?)
    }

    /// Frame thickness of the decoration around `id`, zero if undecorated.
    pub fn decoration_insets(&self, id: NodeId) -> Insets {
        self.tree
            .entry_of(id)
            .map_or(Insets::ZERO, |entry| self.entry_decoration(entry))
    }

    /// Box covered by the decoration around `id`, if it has one.
    pub fn decoration_bounds(&self, id: NodeId) -> Option<Bounds> {
        let entry = self.tree.entry_of(id)?;
        entry.decoration.as_ref()?;
        Some(self.bounds(id)?.outset(self.entry_decoration(entry)))
    }

    /// Slot the child at `index` of `group` takes up, frame included.
    pub fn outer_bounds(&self, group: NodeId, index: usize) -> Result<Bounds, LayoutError> {
        let entry = self
            .tree
            .entries(group)?
            .get(index)
            .ok_or(LayoutError::NoSuchChild { group, index })?;
        let bounds = self
            .bounds(entry.node)
            .ok_or(LayoutError::UnknownNode { id: entry.node })?;
        Ok(bounds.outset(self.entry_frame(entry)))
    }

    pub(crate) fn entry_decoration(&self, entry: &ChildEntry) -> Insets {
        entry
            .decoration
            .as_deref()
            .map_or(Insets::ZERO, |name| self.catalog.insets(name))
    }

    /// Everything that surrounds a child inside its parent on every side.
    pub(crate) fn entry_frame(&self, entry: &ChildEntry) -> Insets {
        entry.border + self.computed.padding[entry.node.index()] + self.entry_decoration(entry)
    }
}

/// Whether a box of `extent` starting at `start` ends inside `i32`.
fn fits(start: i32, extent: u32) -> bool {
    i32::try_from(extent)
        .ok()
        .and_then(|extent| start.checked_add(extent))
        .is_some()
}
