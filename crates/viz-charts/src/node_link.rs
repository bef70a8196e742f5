// File: crates/viz-charts/src/node_link.rs
// Summary: Node-link diagram with deterministic force-directed placement.

use std::collections::HashMap;

use viz_core::color::category_color;
use viz_core::dataset::NetworkData;
use viz_core::force::{force_layout, ForceConfig};
use viz_core::svg::translate;
use viz_core::{Element, Frame, Theme};

pub fn node_link_diagram(data: &NetworkData, frame: &Frame, theme: &Theme) -> Element {
    let index: HashMap<&str, usize> = data
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    // Links naming unknown nodes are dropped.
    let links: Vec<(usize, usize, f64)> = data
        .links
        .iter()
        .filter_map(|l| {
            let s = *index.get(l.source.as_str())?;
            let t = *index.get(l.target.as_str())?;
            Some((s, t, l.value))
        })
        .collect();
    let endpoints: Vec<(usize, usize)> = links.iter().map(|&(s, t, _)| (s, t)).collect();

    let positions = force_layout(
        data.nodes.len(),
        &endpoints,
        frame.content_width / 2.0,
        frame.content_height / 2.0,
        &ForceConfig::default(),
    );

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    for &(s, t, value) in &links {
        plot = plot.child(
            Element::new("line")
                .attr_num("x1", positions[s].0)
                .attr_num("y1", positions[s].1)
                .attr_num("x2", positions[t].0)
                .attr_num("y2", positions[t].1)
                .attr("stroke", "#999999")
                .attr("stroke-opacity", "0.6")
                .attr("stroke-width", viz_core::fmt_num(value.max(0.0).sqrt())),
        );
    }
    for (i, node) in data.nodes.iter().enumerate() {
        plot = plot
            .child(
                Element::new("circle")
                    .attr_num("cx", positions[i].0)
                    .attr_num("cy", positions[i].1)
                    .attr("r", "5")
                    .attr("fill", category_color(node.group as usize))
                    .attr("stroke", theme.background)
                    .attr("stroke-width", "1.5"),
            )
            .child(
                Element::new("text")
                    .attr_num("x", positions[i].0 + 8.0)
                    .attr_num("y", positions[i].1 + 3.0)
                    .attr("font-size", "8")
                    .attr("fill", theme.label)
                    .text(node.id.clone()),
            );
    }

    Element::svg(frame.width(), frame.height()).child(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz_core::dataset::{NetworkLink, NetworkNode};

    fn network() -> NetworkData {
        NetworkData {
            nodes: vec![
                NetworkNode { id: "a".into(), group: 0 },
                NetworkNode { id: "b".into(), group: 0 },
                NetworkNode { id: "c".into(), group: 1 },
            ],
            links: vec![
                NetworkLink { source: "a".into(), target: "b".into(), value: 4.0 },
                NetworkLink { source: "b".into(), target: "c".into(), value: 1.0 },
                NetworkLink { source: "b".into(), target: "ghost".into(), value: 1.0 },
            ],
        }
    }

    #[test]
    fn circles_per_node_and_lines_per_valid_link() {
        let svg = node_link_diagram(&network(), &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<circle").count(), 3);
        // link to the unknown "ghost" node is dropped
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains(">c</text>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = node_link_diagram(&network(), &Frame::default(), &Theme::light()).to_svg_string();
        let b = node_link_diagram(&network(), &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_network_renders_nothing() {
        let svg = node_link_diagram(&NetworkData::default(), &Frame::default(), &Theme::light())
            .to_svg_string();
        assert_eq!(svg.matches("<circle").count(), 0);
        assert_eq!(svg.matches("<line").count(), 0);
    }
}
