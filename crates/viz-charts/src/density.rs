// File: crates/viz-charts/src/density.rs
// Summary: Density plot: kernel density estimate drawn as a filled curve.

use viz_core::dataset::RainfallRecord;
use viz_core::kde::{epanechnikov, kde};
use viz_core::svg::{fmt_num, translate};
use viz_core::{Element, Frame, LinearScale, Theme};

use crate::axis::{bottom_axis, left_axis, ticks_from};

pub fn density_plot(records: &[RainfallRecord], frame: &Frame, theme: &Theme) -> Element {
    let values: Vec<f64> = records.iter().map(|r| r.value).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if min.is_finite() { (min, max) } else { (0.0, 1.0) };

    let x = LinearScale::new((min, max), (0.0, frame.content_width));
    let thresholds = x.ticks(40);
    let bandwidth = ((max - min) / 15.0).max(1e-6);
    let density = kde(epanechnikov(bandwidth), &thresholds, &values);

    let peak = density.iter().map(|&(_, d)| d).fold(0.0f64, f64::max);
    let y = LinearScale::new((0.0, peak), (frame.content_height, 0.0));

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    if !density.is_empty() && peak > 0.0 {
        // filled area down to the baseline, then the curve on top
        let mut area = String::new();
        for (i, &(t, d)) in density.iter().enumerate() {
            area.push(if i == 0 { 'M' } else { 'L' });
            area.push_str(&fmt_num(x.scale(t)));
            area.push(',');
            area.push_str(&fmt_num(y.scale(d)));
        }
        let mut closed = area.clone();
        if let (Some(&(last, _)), Some(&(first, _))) = (density.last(), density.first()) {
            closed.push_str(&format!(
                "L{},{}L{},{}Z",
                fmt_num(x.scale(last)),
                fmt_num(frame.content_height),
                fmt_num(x.scale(first)),
                fmt_num(frame.content_height),
            ));
        }
        plot = plot
            .child(
                Element::new("path")
                    .attr("d", closed)
                    .attr("fill", theme.mark)
                    .attr("fill-opacity", "0.4")
                    .attr("stroke", "none"),
            )
            .child(
                Element::new("path")
                    .attr("d", area)
                    .attr("fill", "none")
                    .attr("stroke", theme.mark_stroke)
                    .attr("stroke-width", "1.5"),
            );
    }

    Element::svg(frame.width(), frame.height())
        .child(plot)
        .child(bottom_axis(frame, theme, "Monthly rainfall", &ticks_from(&x.ticks(10), |v| x.scale(v)), false))
        .child(left_axis(frame, theme, "Density", &ticks_from(&y.ticks(5), |v| y.scale(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_and_fill_are_rendered() {
        let records: Vec<RainfallRecord> =
            [40.0, 42.0, 45.0, 60.0, 61.0, 80.0].iter().map(|&value| RainfallRecord { value }).collect();
        let svg = density_plot(&records, &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("Z\" fill="));
    }

    #[test]
    fn empty_samples_render_no_curve() {
        let svg = density_plot(&[], &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<path").count(), 0);
    }
}
