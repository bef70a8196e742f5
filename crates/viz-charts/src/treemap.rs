// File: crates/viz-charts/src/treemap.rs
// Summary: Treemap of an industry-share hierarchy.

use viz_core::color::category_color;
use viz_core::dataset::TreeNode;
use viz_core::svg::translate;
use viz_core::treemap::treemap;
use viz_core::{Element, Frame, Theme};

/// Minimum tile width before the name label is dropped.
const LABEL_MIN_WIDTH: f64 = 40.0;

pub fn treemap_chart(root: &TreeNode, frame: &Frame, theme: &Theme) -> Element {
    let tiles = treemap(root, frame.content_width, frame.content_height);

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    for tile in &tiles {
        plot = plot.child(
            Element::new("rect")
                .attr_num("x", tile.x0)
                .attr_num("y", tile.y0)
                .attr_num("width", tile.width())
                .attr_num("height", tile.height())
                .attr("fill", category_color(tile.branch))
                .attr("fill-opacity", "0.8")
                .attr("stroke", theme.background),
        );
        if tile.width() >= LABEL_MIN_WIDTH && tile.height() >= 16.0 {
            plot = plot.child(
                Element::new("text")
                    .attr_num("x", tile.x0 + 4.0)
                    .attr_num("y", tile.y0 + 12.0)
                    .attr("font-size", "10")
                    .attr("fill", theme.label)
                    .text(tile.name.clone()),
            );
        }
    }

    Element::svg(frame.width(), frame.height()).child(plot)
}
