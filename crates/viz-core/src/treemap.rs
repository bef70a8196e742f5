// File: crates/viz-core/src/treemap.rs
// Summary: Hierarchy value rollup and squarified treemap tiling.

use crate::dataset::TreeNode;

/// One laid-out leaf rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub name: String,
    /// Index of the top-level branch this leaf belongs to.
    pub branch: usize,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub value: f64,
}

impl Tile {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Sum of leaf values under `node`.
pub fn node_value(node: &TreeNode) -> f64 {
    if node.children.is_empty() {
        node.value.unwrap_or(0.0).max(0.0)
    } else {
        node.children.iter().map(node_value).sum()
    }
}

/// Lay out the leaves of `root` inside a `width` x `height` box using
/// squarified tiling. Children are placed largest-first; zero-valued
/// subtrees are skipped.
pub fn treemap(root: &TreeNode, width: f64, height: f64) -> Vec<Tile> {
    let mut tiles = Vec::new();
    layout_node(root, Rect { x0: 0.0, y0: 0.0, x1: width, y1: height }, None, &mut tiles);
    tiles
}

#[derive(Clone, Copy, Debug)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    fn width(&self) -> f64 {
        (self.x1 - self.x0).max(0.0)
    }
    fn height(&self) -> f64 {
        (self.y1 - self.y0).max(0.0)
    }
}

fn layout_node(node: &TreeNode, rect: Rect, branch: Option<usize>, out: &mut Vec<Tile>) {
    if node.children.is_empty() {
        let value = node_value(node);
        if value > 0.0 {
            out.push(Tile {
                name: node.name.clone(),
                branch: branch.unwrap_or(0),
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y1,
                value,
            });
        }
        return;
    }

    let total = node_value(node);
    if total <= 0.0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    // Largest-first ordering; ties broken by child index for determinism.
    let mut order: Vec<usize> = (0..node.children.len())
        .filter(|&i| node_value(&node.children[i]) > 0.0)
        .collect();
    order.sort_by(|&a, &b| {
        node_value(&node.children[b])
            .partial_cmp(&node_value(&node.children[a]))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    // Normalize child values to areas of the target rect.
    let area_scale = rect.width() * rect.height() / total;
    let areas: Vec<(usize, f64)> = order
        .iter()
        .map(|&i| (i, node_value(&node.children[i]) * area_scale))
        .collect();

    let rects = squarify(&areas, rect);
    for ((child_idx, _), child_rect) in areas.iter().zip(rects) {
        let child_branch = branch.or(Some(*child_idx));
        layout_node(&node.children[*child_idx], child_rect, child_branch, out);
    }
}

/// Worst aspect ratio of a row with total area `s` laid across side `w`.
fn worst(row: &[f64], w: f64) -> f64 {
    let s: f64 = row.iter().sum();
    if s <= 0.0 || w <= 0.0 {
        return f64::INFINITY;
    }
    let s2 = s * s;
    let w2 = w * w;
    row.iter().fold(0.0f64, |acc, &r| {
        acc.max((w2 * r / s2).max(s2 / (w2 * r)))
    })
}

/// Squarified tiling: place areas into `rect`, returning one sub-rect per
/// input area, in input order.
fn squarify(areas: &[(usize, f64)], rect: Rect) -> Vec<Rect> {
    let mut out = vec![rect; areas.len()];
    let mut free = rect;
    let values: Vec<f64> = areas.iter().map(|&(_, a)| a).collect();

    let mut start = 0;
    while start < values.len() {
        let w = free.width().min(free.height());
        let mut end = start + 1;
        let mut row: Vec<f64> = vec![values[start]];
        let mut best = worst(&row, w);
        while end < values.len() {
            row.push(values[end]);
            let cand = worst(&row, w);
            if cand > best {
                row.pop();
                break;
            }
            best = cand;
            end += 1;
        }

        let s: f64 = row.iter().sum();
        if free.width() >= free.height() {
            // vertical strip on the left
            let strip_w = if free.height() > 0.0 { s / free.height() } else { 0.0 };
            let mut y = free.y0;
            for (offset, &v) in row.iter().enumerate() {
                let h = if s > 0.0 { v / s * free.height() } else { 0.0 };
                out[start + offset] = Rect { x0: free.x0, y0: y, x1: free.x0 + strip_w, y1: y + h };
                y += h;
            }
            free.x0 += strip_w;
        } else {
            // horizontal strip on the top
            let strip_h = if free.width() > 0.0 { s / free.width() } else { 0.0 };
            let mut x = free.x0;
            for (offset, &v) in row.iter().enumerate() {
                let w2 = if s > 0.0 { v / s * free.width() } else { 0.0 };
                out[start + offset] = Rect { x0: x, y0: free.y0, x1: x + w2, y1: free.y0 + strip_h };
                x += w2;
            }
            free.y0 += strip_h;
        }
        start = end;
    }
    out
}
