// File: crates/viz-charts/src/bar.rs
// Summary: Vertical bar chart of population per prefecture.

use viz_core::dataset::PopulationRecord;
use viz_core::svg::translate;
use viz_core::{BandScale, Element, Frame, LinearScale, Theme};

use crate::axis::{bottom_axis, left_axis, ticks_from, Tick};

pub fn bar_chart(records: &[PopulationRecord], frame: &Frame, theme: &Theme) -> Element {
    let max = records.iter().map(|r| r.population).fold(0.0f64, f64::max);
    let y = LinearScale::new((0.0, max), (frame.content_height, 0.0));
    let x = BandScale::new(records.len(), (0.0, frame.content_width), 0.2, 0.1);

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    for tick in y.ticks(10) {
        plot = plot.child(
            Element::new("line")
                .attr_num("x1", 0.0)
                .attr_num("y1", y.scale(tick))
                .attr_num("x2", frame.content_width)
                .attr_num("y2", y.scale(tick))
                .attr("stroke", theme.grid),
        );
    }
    for (i, record) in records.iter().enumerate() {
        let top = y.scale(record.population);
        plot = plot.child(
            Element::new("rect")
                .attr_num("x", x.position(i))
                .attr_num("y", top)
                .attr_num("width", x.bandwidth())
                .attr_num("height", frame.content_height - top)
                .attr("fill", theme.mark),
        );
    }

    let x_ticks: Vec<Tick> = records
        .iter()
        .enumerate()
        .map(|(i, r)| Tick { position: x.position(i) + x.bandwidth() / 2.0, label: r.name.clone() })
        .collect();

    Element::svg(frame.width(), frame.height())
        .child(plot)
        .child(bottom_axis(frame, theme, "Prefecture", &x_ticks, true))
        .child(left_axis(frame, theme, "Population", &ticks_from(&y.ticks(10), |v| y.scale(v))))
}
