// File: crates/viz-core/src/svg.rs
// Summary: Minimal SVG element tree with escaped, deterministic serialization.

use std::fmt::Write as _;

/// One SVG element. Attributes keep insertion order so output is stable.
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

#[derive(Clone, Debug)]
enum Node {
    Elem(Element),
    Text(String),
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    /// Root `<svg>` element with a `viewBox` covering `width` x `height`.
    pub fn svg(width: f64, height: f64) -> Self {
        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", format!("0 0 {} {}", fmt_num(width), fmt_num(height)))
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn attr_num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Elem(child));
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = Element>) -> Self {
        for c in iter {
            self.children.push(Node::Elem(c));
        }
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    /// Serialize the tree to markup. Empty elements self-close.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Elem(e) => e.write_into(out),
                Node::Text(t) => out.push_str(&escape(t)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// `translate(x,y)` transform string.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", fmt_num(x), fmt_num(y))
}

/// Numbers rounded to two decimals, integers printed bare.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 100.0).round() / 100.0;
    if r == r.trunc() && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        let s = format!("{:.2}", r);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
