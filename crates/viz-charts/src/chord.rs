// File: crates/viz-charts/src/chord.rs
// Summary: Chord diagram of flows between named groups.

use std::f64::consts::PI;

use viz_core::chord::{chord_layout, ArcSegment};
use viz_core::color::category_color;
use viz_core::dataset::FlowMatrix;
use viz_core::svg::{fmt_num, translate};
use viz_core::{Element, Frame, Theme};

const PAD_ANGLE: f64 = 0.05;
const RING_THICKNESS: f64 = 20.0;
const LABEL_OFFSET: f64 = 14.0;

/// Point on a circle of radius `r` at clockwise angle `a` from twelve o'clock.
fn ray(r: f64, a: f64) -> (f64, f64) {
    (r * a.sin(), -r * a.cos())
}

/// Annular arc between `a0` and `a1`, radii `r0` (inner) to `r1` (outer).
fn arc_path(r0: f64, r1: f64, a0: f64, a1: f64) -> String {
    let large = if a1 - a0 > PI { 1 } else { 0 };
    let (ox0, oy0) = ray(r1, a0);
    let (ox1, oy1) = ray(r1, a1);
    let (ix1, iy1) = ray(r0, a1);
    let (ix0, iy0) = ray(r0, a0);
    format!(
        "M{},{}A{},{} 0 {} 1 {},{}L{},{}A{},{} 0 {} 0 {},{}Z",
        fmt_num(ox0),
        fmt_num(oy0),
        fmt_num(r1),
        fmt_num(r1),
        large,
        fmt_num(ox1),
        fmt_num(oy1),
        fmt_num(ix1),
        fmt_num(iy1),
        fmt_num(r0),
        fmt_num(r0),
        large,
        fmt_num(ix0),
        fmt_num(iy0),
    )
}

/// Ribbon between two arc spans at radius `r`, pinched through the center.
fn ribbon_path(r: f64, source: &ArcSegment, target: &ArcSegment) -> String {
    let (sx0, sy0) = ray(r, source.start_angle);
    let (sx1, sy1) = ray(r, source.end_angle);
    let (tx0, ty0) = ray(r, target.start_angle);
    let (tx1, ty1) = ray(r, target.end_angle);
    let s_large = if source.end_angle - source.start_angle > PI { 1 } else { 0 };
    let t_large = if target.end_angle - target.start_angle > PI { 1 } else { 0 };
    format!(
        "M{},{}A{},{} 0 {} 1 {},{}Q0,0 {},{}A{},{} 0 {} 1 {},{}Q0,0 {},{}Z",
        fmt_num(sx0),
        fmt_num(sy0),
        fmt_num(r),
        fmt_num(r),
        s_large,
        fmt_num(sx1),
        fmt_num(sy1),
        fmt_num(tx0),
        fmt_num(ty0),
        fmt_num(r),
        fmt_num(r),
        t_large,
        fmt_num(tx1),
        fmt_num(ty1),
        fmt_num(sx0),
        fmt_num(sy0),
    )
}

pub fn chord_diagram(data: &FlowMatrix, frame: &Frame, theme: &Theme) -> Element {
    let layout = chord_layout(&data.matrix, PAD_ANGLE);
    let outer = frame.content_width.min(frame.content_height) / 2.0 - 30.0;
    let inner = (outer - RING_THICKNESS).max(0.0);

    let center = Element::new("g").attr(
        "transform",
        translate(
            frame.margin.left + frame.content_width / 2.0,
            frame.margin.top + frame.content_height / 2.0,
        ),
    );

    let mut g = center;
    for ribbon in &layout.ribbons {
        g = g.child(
            Element::new("path")
                .attr("d", ribbon_path(inner, &ribbon.source, &ribbon.target))
                .attr("fill", category_color(ribbon.source.index))
                .attr("fill-opacity", "0.67"),
        );
    }
    for group in &layout.groups {
        let mid = (group.start_angle + group.end_angle) / 2.0;
        let (lx, ly) = ray(outer + LABEL_OFFSET, mid);
        let name = data.names.get(group.index).map(String::as_str).unwrap_or("");
        g = g
            .child(
                Element::new("path")
                    .attr("d", arc_path(inner, outer, group.start_angle, group.end_angle))
                    .attr("fill", category_color(group.index))
                    .attr("stroke", theme.background),
            )
            .child(
                Element::new("text")
                    .attr_num("x", lx)
                    .attr_num("y", ly)
                    .attr("font-size", "10")
                    .attr("text-anchor", if mid > PI { "end" } else { "start" })
                    .attr("dominant-baseline", "central")
                    .attr("fill", theme.label)
                    .text(name),
            );
    }

    Element::svg(frame.width(), frame.height()).child(g)
}
