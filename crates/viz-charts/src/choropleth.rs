// File: crates/viz-charts/src/choropleth.rs
// Summary: Choropleth map: regions filled from a sequential scale over their value.

use viz_core::geo::{feature_path, Equirectangular, FeatureCollection};
use viz_core::svg::translate;
use viz_core::{Element, Frame, Ramp, SequentialScale, Theme};

use crate::legend::color_legend;

pub fn choropleth_map(fc: &FeatureCollection, frame: &Frame, theme: &Theme) -> Element {
    let proj = Equirectangular::fit(fc, frame.content_width, frame.content_height);

    let min = fc.features.iter().map(|f| f.properties.value).fold(f64::INFINITY, f64::min);
    let max = fc.features.iter().map(|f| f.properties.value).fold(f64::NEG_INFINITY, f64::max);
    let domain = if min.is_finite() { (min, max) } else { (0.0, 1.0) };
    let color = SequentialScale::new(Ramp::blues(), domain);

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    for feature in &fc.features {
        plot = plot.child(
            Element::new("path")
                .attr("d", feature_path(&feature.geometry, &proj))
                .attr("fill", color.color(feature.properties.value).to_hex())
                .attr("stroke", theme.background)
                .attr("stroke-width", "1")
                .child(Element::new("title").text(format!(
                    "{}: {}",
                    feature.properties.name,
                    viz_core::fmt_num(feature.properties.value)
                ))),
        );
    }

    Element::svg(frame.width(), frame.height()).child(plot).child(color_legend(
        &color,
        frame.margin.left,
        frame.margin.top + frame.content_height + 20.0,
        theme,
    ))
}
