//! Core value types for box-model layout.
//!
//! All geometry is integer pixels: sizes are [`UVec2`], positions are [`IVec2`].

use std::fmt;
use std::ops::{Add, AddAssign};

use glam::{IVec2, UVec2};

/// Identifier of a node in a layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index of this node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction along which a group lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Children side by side, left to right
    #[default]
    Horizontal,
    /// Children stacked, top to bottom
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Component of `size` along this axis.
    pub fn main_of(self, size: UVec2) -> u32 {
        match self {
            Axis::Horizontal => size.x,
            Axis::Vertical => size.y,
        }
    }

    /// Component of `size` along the perpendicular axis.
    pub fn cross_of(self, size: UVec2) -> u32 {
        self.cross().main_of(size)
    }

    /// Build a size from its main and cross components.
    pub fn compose(self, main: u32, cross: u32) -> UVec2 {
        match self {
            Axis::Horizontal => UVec2::new(main, cross),
            Axis::Vertical => UVec2::new(cross, main),
        }
    }

    /// Build a position from its main and cross components.
    pub fn compose_position(self, main: i32, cross: i32) -> IVec2 {
        match self {
            Axis::Horizontal => IVec2::new(main, cross),
            Axis::Vertical => IVec2::new(cross, main),
        }
    }

    /// Build a position from unsigned offsets, `None` when one does not fit in `i32`.
    pub fn compose_offset(self, main: u32, cross: u32) -> Option<IVec2> {
        let main = i32::try_from(main).ok()?;
        let cross = i32::try_from(cross).ok()?;
        Some(self.compose_position(main, cross))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

bitflags::bitflags! {
    /// A set of axes, used to select what `expand` enlarges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Axes: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL = 0b10;
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Axes {
    /// Check whether `axis` is part of the set.
    pub fn has(self, axis: Axis) -> bool {
        self.contains(Axes::from(axis))
    }

    /// Iterate over the selected axes, horizontal first.
    pub fn iter_axes(self) -> impl Iterator<Item = Axis> {
        [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .filter(move |axis| self.has(*axis))
    }
}

impl From<Axis> for Axes {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Axes::HORIZONTAL,
            Axis::Vertical => Axes::VERTICAL,
        }
    }
}

/// Alignment of a child on its group's cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

/// Where a child sits inside the space available on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Pinned to the near edge
    Start,
    /// Centered, odd remainder towards the far edge
    Center,
    /// Pinned to the far edge
    End,
}

impl Alignment {
    /// Resolve to a cross-axis anchor.
    ///
    /// `Left` and `Top` both mean the near edge, whichever axis is the cross
    /// axis; `Right` and `Bottom` both mean the far edge.
    pub fn anchor(self) -> Anchor {
        match self {
            Alignment::Left | Alignment::Top => Anchor::Start,
            Alignment::Right | Alignment::Bottom => Anchor::End,
            Alignment::Center => Anchor::Center,
        }
    }
}

/// Border thickness on each side of a box.
///
/// Sums saturate at `u32::MAX` instead of wrapping; the layout engine
/// rejects anything that large before it becomes a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    /// Create insets in (left, right, top, bottom) order.
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Same thickness on every side.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Thickness before the content along `axis` (left or top).
    pub fn leading(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Thickness after the content along `axis` (right or bottom).
    pub fn trailing(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Total thickness along `axis`.
    pub fn along(&self, axis: Axis) -> u32 {
        self.leading(axis).saturating_add(self.trailing(axis))
    }

    /// Total thickness on both axes.
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.along(Axis::Horizontal), self.along(Axis::Vertical))
    }

    pub fn add_leading(&mut self, axis: Axis, amount: u32) {
        match axis {
            Axis::Horizontal => self.left = self.left.saturating_add(amount),
            Axis::Vertical => self.top = self.top.saturating_add(amount),
        }
    }

    pub fn add_trailing(&mut self, axis: Axis, amount: u32) {
        match axis {
            Axis::Horizontal => self.right = self.right.saturating_add(amount),
            Axis::Vertical => self.bottom = self.bottom.saturating_add(amount),
        }
    }
}

impl Add for Insets {
    type Output = Insets;

    fn add(self, rhs: Insets) -> Insets {
        Insets::new(
            self.left.saturating_add(rhs.left),
            self.right.saturating_add(rhs.right),
            self.top.saturating_add(rhs.top),
            self.bottom.saturating_add(rhs.bottom),
        )
    }
}

impl AddAssign for Insets {
    fn add_assign(&mut self, rhs: Insets) {
        *self = *self + rhs;
    }
}

impl From<(u32, u32, u32, u32)> for Insets {
    fn from((left, right, top, bottom): (u32, u32, u32, u32)) -> Self {
        Insets::new(left, right, top, bottom)
    }
}

impl From<[u32; 4]> for Insets {
    fn from([left, right, top, bottom]: [u32; 4]) -> Self {
        Insets::new(left, right, top, bottom)
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: IVec2, size: UVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width), exclusive. Saturates at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// Get the bottom edge (y + height), exclusive. Saturates at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Check if a pixel is inside the bounds.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether `other` lies entirely inside these bounds.
    pub fn encloses(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Grow outwards by `insets`: `position - insets`, `size + insets`.
    pub fn outset(&self, insets: Insets) -> Bounds {
        Bounds::new(
            self.x.saturating_sub_unsigned(insets.left),
            self.y.saturating_sub_unsigned(insets.top),
            self.width.saturating_add(insets.along(Axis::Horizontal)),
            self.height.saturating_add(insets.along(Axis::Vertical)),
        )
    }

    /// Shrink inwards by `insets`, collapsing to zero size rather than underflowing.
    pub fn inset(&self, insets: Insets) -> Bounds {
        Bounds::new(
            self.x.saturating_add_unsigned(insets.left),
            self.y.saturating_add_unsigned(insets.top),
            self.width.saturating_sub(insets.along(Axis::Horizontal)),
            self.height.saturating_sub(insets.along(Axis::Vertical)),
        )
    }
}
