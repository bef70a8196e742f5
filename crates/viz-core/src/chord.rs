// File: crates/viz-core/src/chord.rs
// Summary: Chord layout: angular group arcs and ribbons from a square flow matrix.

use std::f64::consts::PI;

/// Angular span assigned to a group or subgroup. Angles are in radians,
/// measured clockwise from twelve o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

/// One ribbon connecting two subgroup spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ribbon {
    pub source: ArcSegment,
    pub target: ArcSegment,
}

#[derive(Clone, Debug, Default)]
pub struct ChordLayout {
    pub groups: Vec<ArcSegment>,
    pub ribbons: Vec<Ribbon>,
}

/// Compute the chord layout for `matrix`, where `matrix[i][j]` is the flow
/// from group `i` to group `j`. `pad_angle` separates adjacent groups.
/// A ragged or empty matrix yields an empty layout.
pub fn chord_layout(matrix: &[Vec<f64>], pad_angle: f64) -> ChordLayout {
    let n = matrix.len();
    if n == 0 || matrix.iter().any(|row| row.len() != n) {
        return ChordLayout::default();
    }

    let group_sums: Vec<f64> = matrix.iter().map(|row| row.iter().sum()).collect();
    let total: f64 = group_sums.iter().sum();
    if total <= 0.0 {
        return ChordLayout::default();
    }

    // Radians per unit of flow once padding is reserved.
    let k = (2.0 * PI - pad_angle * n as f64).max(0.0) / total;

    let mut subgroups = vec![
        ArcSegment { index: 0, start_angle: 0.0, end_angle: 0.0, value: 0.0 };
        n * n
    ];
    let mut groups = Vec::with_capacity(n);
    let mut x = 0.0;
    for i in 0..n {
        let x0 = x;
        for j in 0..n {
            let v = matrix[i][j];
            let a0 = x;
            x += v * k;
            subgroups[j * n + i] = ArcSegment { index: i, start_angle: a0, end_angle: x, value: v };
        }
        groups.push(ArcSegment { index: i, start_angle: x0, end_angle: x, value: group_sums[i] });
        x += pad_angle;
    }

    let mut ribbons = Vec::new();
    for i in 0..n {
        for j in i..n {
            let source = subgroups[j * n + i];
            let target = subgroups[i * n + j];
            if source.value > 0.0 || target.value > 0.0 {
                ribbons.push(if source.value < target.value {
                    Ribbon { source: target, target: source }
                } else {
                    Ribbon { source, target }
                });
            }
        }
    }

    ChordLayout { groups, ribbons }
}
