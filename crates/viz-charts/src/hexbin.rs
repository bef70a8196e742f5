// File: crates/viz-charts/src/hexbin.rs
// Summary: Hexbin density plot of business closures vs establishments on log scales.

use viz_core::dataset::CensusRecord;
use viz_core::hexbin::Hexbin;
use viz_core::svg::translate;
use viz_core::{Element, Frame, LogScale, Ramp, SequentialScale, Theme};

use crate::axis::{bottom_axis, left_axis, ticks_from};
use crate::legend::color_legend;

const HEX_RADIUS: f64 = 20.0;

/// Render the hexbin page. Records are expected to be pre-filtered to
/// strictly positive `closed`/`established` values; both axes are log
/// scaled with domains anchored at 1.
pub fn hexbin_plot(records: &[CensusRecord], frame: &Frame, theme: &Theme) -> Element {
    let max_closed = records.iter().map(|r| r.closed).fold(1.0f64, f64::max);
    let max_established = records.iter().map(|r| r.established).fold(1.0f64, f64::max);

    let x = LogScale::new((1.0, max_closed), (0.0, frame.content_width));
    let y = LogScale::new((1.0, max_established), (frame.content_height, 0.0));

    let hexbin = Hexbin::new(HEX_RADIUS);
    let points: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (x.scale(r.closed.max(1.0)), y.scale(r.established.max(1.0))))
        .collect();
    let bins = hexbin.bin(&points);
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    let color = SequentialScale::new(Ramp::pu_bu(), (0.0, max_count as f64));

    let mut marks = Element::new("g")
        .attr("clip-path", "url(#content-region)")
        .attr("transform", translate(frame.margin.left, frame.margin.top));
    for bin in &bins {
        marks = marks.child(
            Element::new("g").attr("transform", translate(bin.x, bin.y)).child(
                Element::new("path")
                    .attr("d", hexbin.hexagon())
                    .attr("fill", color.color(bin.count as f64).to_hex()),
            ),
        );
    }

    Element::svg(frame.width(), frame.height())
        .child(
            Element::new("clipPath").attr("id", "content-region").child(
                Element::new("rect")
                    .attr_num("x", 0.0)
                    .attr_num("y", 0.0)
                    .attr_num("width", frame.content_width)
                    .attr_num("height", frame.content_height),
            ),
        )
        .child(marks)
        .child(bottom_axis(
            frame,
            theme,
            "Closed businesses",
            &ticks_from(&x.ticks(), |v| x.scale(v)),
            true,
        ))
        .child(left_axis(
            frame,
            theme,
            "Established businesses",
            &ticks_from(&y.ticks(), |v| y.scale(v)),
        ))
        .child(color_legend(
            &color,
            frame.margin.left + frame.content_width - 130.0,
            frame.margin.top + 10.0,
            theme,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz_core::dataset::annotate_census;

    fn record(closed: f64, established: f64) -> CensusRecord {
        CensusRecord { municipality: String::new(), closed, established, id: 0 }
    }

    #[test]
    fn positive_records_each_produce_a_hexagon() {
        let records = annotate_census(vec![record(1.0, 1.0), record(10.0, 100.0), record(0.0, 5.0)]);
        let svg = hexbin_plot(&records, &Frame::default(), &Theme::light()).to_svg_string();
        // two surviving records land in two distinct hexagons
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn log_domains_anchor_at_one() {
        let records = annotate_census(vec![record(1.0, 1.0), record(10.0, 100.0), record(0.0, 5.0)]);
        let svg = hexbin_plot(&records, &Frame::default(), &Theme::light()).to_svg_string();
        // x ticks run 1..10, y ticks 1..100
        assert!(svg.contains(">1</text>"));
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(">100</text>"));
    }

    #[test]
    fn empty_collection_renders_axes_only() {
        let svg = hexbin_plot(&[], &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<path").count(), 0);
        assert!(svg.contains("clipPath"));
    }
}
