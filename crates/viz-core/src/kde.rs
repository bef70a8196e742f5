// File: crates/viz-core/src/kde.rs
// Summary: Kernel density estimation with the Epanechnikov kernel.

/// Epanechnikov kernel scaled by `bandwidth`.
pub fn epanechnikov(bandwidth: f64) -> impl Fn(f64) -> f64 {
    let bandwidth = bandwidth.max(1e-9);
    move |v: f64| {
        let v = v / bandwidth;
        if v.abs() <= 1.0 {
            0.75 * (1.0 - v * v) / bandwidth
        } else {
            0.0
        }
    }
}

/// Density estimate at each threshold: mean kernel weight over the samples.
pub fn kde(kernel: impl Fn(f64) -> f64, thresholds: &[f64], samples: &[f64]) -> Vec<(f64, f64)> {
    if samples.is_empty() {
        return thresholds.iter().map(|&t| (t, 0.0)).collect();
    }
    let n = samples.len() as f64;
    thresholds
        .iter()
        .map(|&t| (t, samples.iter().map(|&s| kernel(t - s)).sum::<f64>() / n))
        .collect()
}
