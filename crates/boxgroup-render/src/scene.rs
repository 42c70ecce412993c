//! The decoration walk and a recording renderer.

use boxgroup_core::{Bounds, Insets, LayoutError, NodeId};
use boxgroup_layout::{DecorationCatalog, LayoutEngine};
use glam::{IVec2, UVec2};

/// Receives the frames of a tree, in canvas coordinates (the root's
/// top-left corner is the origin).
pub trait FrameRenderer {
    /// Start a canvas as large as the root group.
    fn begin(&mut self, size: UVec2);

    /// Draw the frame `name` covering `outer`; its sides are `insets` thick.
    fn draw_decoration(&mut self, name: &str, insets: Insets, outer: Bounds);

    /// Wipe an undecorated child's area.
    fn clear(&mut self, bounds: Bounds);
}

/// Walk every child under `root` in pre-order and draw it.
///
/// Decorated children get their frame at the outer box, everything else is
/// cleared. The root itself has no entry and is never decorated.
pub fn draw_all_decorations<C, R>(
    engine: &LayoutEngine<C>,
    root: NodeId,
    renderer: &mut R,
) -> Result<(), LayoutError>
where
    C: DecorationCatalog,
    R: FrameRenderer + ?Sized,
{
    let bounds = engine.bounds(root).ok_or(LayoutError::UnknownNode { id: root })?;
    engine.tree().group(root)?;

    renderer.begin(bounds.size());
    let mut walker = FrameWalker {
        engine,
        renderer,
        origin: bounds.position(),
        frames: 0,
    };
    walker.walk(root);
    tracing::debug!(%root, frames = walker.frames, "drew decorations");
    Ok(())
}

/// Record the decorations of `root` into a fresh [`DisplayList`].
pub fn build_display_list<C: DecorationCatalog>(
    engine: &LayoutEngine<C>,
    root: NodeId,
) -> Result<DisplayList, LayoutError> {
    let mut list = DisplayList::default();
    draw_all_decorations(engine, root, &mut list)?;
    Ok(list)
}

struct FrameWalker<'a, C, R: ?Sized> {
    engine: &'a LayoutEngine<C>,
    renderer: &'a mut R,
    origin: IVec2,
    frames: usize,
}

impl<C: DecorationCatalog, R: FrameRenderer + ?Sized> FrameWalker<'_, C, R> {
    fn walk(&mut self, group: NodeId) {
        let Ok(entries) = self.engine.tree().entries(group) else {
            return;
        };

        for entry in entries {
            let Some(bounds) = self.engine.bounds(entry.node) else {
                continue;
            };
            let bounds = self.to_canvas(bounds);

            match &entry.decoration {
                Some(name) => {
                    let insets = self.engine.catalog().insets(name);
                    self.renderer.draw_decoration(name, insets, bounds.outset(insets));
                    self.frames += 1;
                }
                None => self.renderer.clear(bounds),
            }

            if self.engine.tree().is_group(entry.node) {
                self.walk(entry.node);
            }
        }
    }

    fn to_canvas(&self, bounds: Bounds) -> Bounds {
        Bounds::from_vecs(bounds.position() - self.origin, bounds.size())
    }
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameCommand {
    /// Draw a named decoration
    Decoration {
        name: String,
        insets: Insets,
        outer: Bounds,
    },
    /// Clear an undecorated area
    Clear(Bounds),
}

impl FrameCommand {
    /// Area the command touches.
    pub fn bounds(&self) -> Bounds {
        match self {
            FrameCommand::Decoration { outer, .. } => *outer,
            FrameCommand::Clear(bounds) => *bounds,
        }
    }
}

/// A [`FrameRenderer`] that only records what it was asked to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    pub size: UVec2,
    pub commands: Vec<FrameCommand>,
}

impl DisplayList {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: FrameCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Decorations only, as `(name, insets, outer box)`.
    pub fn decorations(&self) -> impl Iterator<Item = (&str, Insets, Bounds)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            FrameCommand::Decoration {
                name,
                insets,
                outer,
            } => Some((name.as_str(), *insets, *outer)),
            FrameCommand::Clear(_) => None,
        })
    }
}

impl FrameRenderer for DisplayList {
    fn begin(&mut self, size: UVec2) {
        self.size = size;
        self.commands.clear();
    }

    fn draw_decoration(&mut self, name: &str, insets: Insets, outer: Bounds) {
        self.push(FrameCommand::Decoration {
            name: name.to_string(),
            insets,
            outer,
        });
    }

    fn clear(&mut self, bounds: Bounds) {
        self.push(FrameCommand::Clear(bounds));
    }
}
