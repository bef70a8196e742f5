// File: crates/viz-charts/src/axis.rs
// Summary: Axis groups: baseline, tick marks, tick labels, axis title.

use viz_core::svg::{fmt_num, translate};
use viz_core::{Element, Frame, Theme};

/// A resolved tick: pixel position along the axis plus its label.
#[derive(Clone, Debug)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Build ticks from data-domain values through a scale function.
pub fn ticks_from(values: &[f64], scale: impl Fn(f64) -> f64) -> Vec<Tick> {
    values
        .iter()
        .map(|&v| Tick { position: scale(v), label: fmt_num(v) })
        .collect()
}

/// Horizontal axis along the bottom edge of the content box.
/// `rotate_labels` slants tick labels 45 degrees for dense tick sets.
pub fn bottom_axis(frame: &Frame, theme: &Theme, title: &str, ticks: &[Tick], rotate_labels: bool) -> Element {
    let mut g = Element::new("g")
        .attr("transform", translate(frame.margin.left, frame.margin.top + frame.content_height))
        .child(
            Element::new("line")
                .attr_num("x1", 0.0)
                .attr_num("y1", 0.0)
                .attr_num("x2", frame.content_width)
                .attr_num("y2", 0.0)
                .attr("stroke", theme.axis_line),
        )
        .child(
            Element::new("text")
                .attr("transform", translate(frame.content_width / 2.0, 40.0))
                .attr("font-size", "12")
                .attr("font-weight", "800")
                .attr("text-anchor", "middle")
                .attr("fill", theme.axis_title)
                .text(title),
        );
    for tick in ticks {
        let label = if rotate_labels {
            Element::new("text")
                .attr("font-size", "8")
                .attr("transform", "translate(0,8)rotate(45)")
                .attr("dominant-baseline", "central")
                .attr("fill", theme.tick_label)
        } else {
            Element::new("text")
                .attr("font-size", "8")
                .attr("transform", translate(0.0, 12.0))
                .attr("text-anchor", "middle")
                .attr("fill", theme.tick_label)
        };
        g = g.child(
            Element::new("g")
                .attr("transform", translate(tick.position, 0.0))
                .child(
                    Element::new("line")
                        .attr_num("x1", 0.0)
                        .attr_num("y1", 0.0)
                        .attr_num("x2", 0.0)
                        .attr_num("y2", 5.0)
                        .attr("stroke", theme.axis_line),
                )
                .child(label.text(tick.label.clone())),
        );
    }
    g
}

/// Vertical axis along the left edge of the content box.
pub fn left_axis(frame: &Frame, theme: &Theme, title: &str, ticks: &[Tick]) -> Element {
    let mut g = Element::new("g")
        .attr("transform", translate(frame.margin.left, frame.margin.top))
        .child(
            Element::new("line")
                .attr_num("x1", 0.0)
                .attr_num("y1", 0.0)
                .attr_num("x2", 0.0)
                .attr_num("y2", frame.content_height)
                .attr("stroke", theme.axis_line),
        )
        .child(
            Element::new("text")
                .attr(
                    "transform",
                    format!("{}rotate(-90)", translate(-40.0, frame.content_height / 2.0)),
                )
                .attr("font-size", "12")
                .attr("font-weight", "800")
                .attr("text-anchor", "middle")
                .attr("fill", theme.axis_title)
                .text(title),
        );
    for tick in ticks {
        g = g.child(
            Element::new("g")
                .attr("transform", translate(0.0, tick.position))
                .child(
                    Element::new("line")
                        .attr_num("x1", 0.0)
                        .attr_num("y1", 0.0)
                        .attr_num("x2", -5.0)
                        .attr_num("y2", 0.0)
                        .attr("stroke", theme.axis_line),
                )
                .child(
                    Element::new("text")
                        .attr_num("x", -8.0)
                        .attr("font-size", "8")
                        .attr("text-anchor", "end")
                        .attr("dominant-baseline", "central")
                        .attr("fill", theme.tick_label)
                        .text(tick.label.clone()),
                ),
        );
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_axis_places_ticks_at_scale_positions() {
        let frame = Frame::default();
        let theme = Theme::light();
        let ticks = ticks_from(&[0.0, 5.0, 10.0], |v| v * 80.0);
        let svg = bottom_axis(&frame, &theme, "X", &ticks, false).to_svg_string();
        assert!(svg.contains(r#"transform="translate(400,0)""#));
        assert!(svg.contains(">5</text>"));
    }

    #[test]
    fn left_axis_title_is_rotated() {
        let frame = Frame::default();
        let theme = Theme::light();
        let svg = left_axis(&frame, &theme, "Y", &[]).to_svg_string();
        assert!(svg.contains("rotate(-90)"));
        assert!(svg.contains(">Y</text>"));
    }
}
