// File: crates/viz-charts/src/scatter.rs
// Summary: Scatter plot of per-city income vs consumption.

use viz_core::dataset::CityRecord;
use viz_core::svg::translate;
use viz_core::{Element, Frame, LinearScale, Theme};

use crate::axis::{bottom_axis, left_axis, ticks_from};

pub fn scatter_plot(records: &[CityRecord], frame: &Frame, theme: &Theme) -> Element {
    let max_income = records.iter().map(|r| r.income).fold(0.0f64, f64::max);
    let max_consumption = records.iter().map(|r| r.consumption).fold(0.0f64, f64::max);

    let x = LinearScale::new((0.0, max_income), (0.0, frame.content_width));
    let y = LinearScale::new((0.0, max_consumption), (frame.content_height, 0.0));

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    for record in records {
        let cx = x.scale(record.income);
        let cy = y.scale(record.consumption);
        plot = plot
            .child(
                Element::new("circle")
                    .attr_num("cx", cx)
                    .attr_num("cy", cy)
                    .attr("r", "4")
                    .attr("fill", theme.mark)
                    .attr("fill-opacity", "0.7")
                    .attr("stroke", theme.mark_stroke),
            )
            .child(
                Element::new("text")
                    .attr_num("x", cx + 6.0)
                    .attr_num("y", cy)
                    .attr("font-size", "8")
                    .attr("dominant-baseline", "central")
                    .attr("fill", theme.label)
                    .text(record.name.clone()),
            );
    }

    Element::svg(frame.width(), frame.height())
        .child(plot)
        .child(bottom_axis(frame, theme, "Income", &ticks_from(&x.ticks(10), |v| x.scale(v)), false))
        .child(left_axis(frame, theme, "Consumption", &ticks_from(&y.ticks(10), |v| y.scale(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, income: f64, consumption: f64) -> CityRecord {
        CityRecord { name: name.to_string(), income, consumption }
    }

    #[test]
    fn one_circle_per_record() {
        let records = vec![record("A", 100.0, 80.0), record("B", 200.0, 90.0)];
        let svg = scatter_plot(&records, &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">B</text>"));
    }

    #[test]
    fn max_values_hit_range_ends() {
        let records = vec![record("A", 100.0, 50.0)];
        let svg = scatter_plot(&records, &Frame::default(), &Theme::light()).to_svg_string();
        assert!(svg.contains(r#"cx="800" cy="0""#));
    }

    #[test]
    fn empty_records_render_no_marks() {
        let svg = scatter_plot(&[], &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<circle").count(), 0);
    }
}
