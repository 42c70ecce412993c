//! Drawing decorations for a laid-out group tree.
//!
//! Bitmap tiling of the frames themselves belongs to the host toolkit. This
//! crate walks the tree, works out where every frame goes and hands each one
//! to a [`FrameRenderer`].

pub mod scene;

#[cfg(feature = "svg")]
pub mod svg;

pub use scene::{build_display_list, draw_all_decorations, DisplayList, FrameCommand, FrameRenderer};

#[cfg(feature = "svg")]
pub fn export_svg(list: &DisplayList) -> String {
    svg::export(list)
}
