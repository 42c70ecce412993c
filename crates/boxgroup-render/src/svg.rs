//! SVG outlines of a display list, for looking at a layout.
//!
//! Each decoration is drawn as its outer box plus the inner box left once
//! the frame is taken off. Cleared areas are not drawn.

use boxgroup_core::Bounds;

use crate::scene::DisplayList;

const OUTER_STROKE: &str = "#606060";
const INNER_STROKE: &str = "#3B82F6";

/// Export a display list to SVG.
pub fn export(list: &DisplayList) -> String {
    let width = list.size.x.max(1);
    let height = list.size.y.max(1);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
        width, height, width, height
    ));

    for (name, insets, outer) in list.decorations() {
        svg.push_str(&format!("  <g data-decoration=\"{}\">\n", escape_xml(name)));
        push_rect(&mut svg, outer, OUTER_STROKE);
        push_rect(&mut svg, outer.inset(insets), INNER_STROKE);
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_rect(svg: &mut String, bounds: Bounds, stroke: &str) {
    svg.push_str(&format!(
        "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" />\n",
        bounds.x, bounds.y, bounds.width, bounds.height, stroke
    ));
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::FrameRenderer;
    use boxgroup_core::Insets;
    use glam::UVec2;

    #[test]
    fn test_export_empty() {
        let svg = export(&DisplayList::new(UVec2::ZERO));
        assert!(svg.contains("width=\"1\" height=\"1\""));
        assert!(!svg.contains("<rect"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_export_marks_outer_and_inner() {
        let mut list = DisplayList::default();
        list.begin(UVec2::new(100, 50));
        list.draw_decoration("Groove", Insets::uniform(8), Bounds::new(0, 0, 56, 36));
        list.clear(Bounds::new(60, 0, 10, 10));

        let svg = export(&list);
        assert!(svg.contains("viewBox=\"0 0 100 50\""));
        assert!(svg.contains("data-decoration=\"Groove\""));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"56\" height=\"36\""));
        assert!(svg.contains("<rect x=\"8\" y=\"8\" width=\"40\" height=\"20\""));
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
