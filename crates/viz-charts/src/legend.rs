// File: crates/viz-charts/src/legend.rs
// Summary: Color swatch legend for sequential scales.

use viz_core::svg::{fmt_num, translate};
use viz_core::{Element, SequentialScale, Theme};

const SWATCH_WIDTH: f64 = 18.0;
const SWATCH_HEIGHT: f64 = 10.0;
const SWATCHES: usize = 6;

/// Horizontal swatch strip with the domain bounds labelled underneath,
/// anchored at (`x`, `y`).
pub fn color_legend(scale: &SequentialScale, x: f64, y: f64, theme: &Theme) -> Element {
    let mut g = Element::new("g").attr("transform", translate(x, y));
    for i in 0..SWATCHES {
        let t = (i as f64 + 0.5) / SWATCHES as f64;
        g = g.child(
            Element::new("rect")
                .attr_num("x", i as f64 * SWATCH_WIDTH)
                .attr_num("y", 0.0)
                .attr_num("width", SWATCH_WIDTH)
                .attr_num("height", SWATCH_HEIGHT)
                .attr("fill", scale.ramp().at(t).to_hex()),
        );
    }
    let (d0, d1) = scale.domain();
    g.child(
        Element::new("text")
            .attr_num("x", 0.0)
            .attr_num("y", SWATCH_HEIGHT + 10.0)
            .attr("font-size", "8")
            .attr("fill", theme.tick_label)
            .text(fmt_num(d0)),
    )
    .child(
        Element::new("text")
            .attr_num("x", SWATCHES as f64 * SWATCH_WIDTH)
            .attr_num("y", SWATCH_HEIGHT + 10.0)
            .attr("font-size", "8")
            .attr("text-anchor", "end")
            .attr("fill", theme.tick_label)
            .text(fmt_num(d1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz_core::Ramp;

    #[test]
    fn legend_labels_domain_bounds() {
        let scale = SequentialScale::new(Ramp::pu_bu(), (0.0, 12.0));
        let svg = color_legend(&scale, 10.0, 10.0, &Theme::light()).to_svg_string();
        assert!(svg.contains(">0</text>"));
        assert!(svg.contains(">12</text>"));
        assert_eq!(svg.matches("<rect").count(), SWATCHES);
    }
}
