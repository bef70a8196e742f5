// File: crates/viz-core/src/ticks.rs
// Summary: Tick layout helpers (1-2-5 steps, evenly spaced samples).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Step size producing roughly `count` ticks over [start, stop],
/// snapped to a multiple of 1, 2 or 5 times a power of ten.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let step0 = (stop - start).abs() / count;
    if step0 <= 0.0 || !step0.is_finite() {
        return 0.0;
    }
    let power = step0.log10().floor();
    let error = step0 / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Round tick values covering [start, stop], ascending.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if (stop - start).abs() < f64::EPSILON {
        return vec![start];
    }
    let step = tick_step(start, stop, count);
    if step <= 0.0 {
        return Vec::new();
    }
    let lo = (start / step).ceil() as i64;
    let hi = (stop / step).floor() as i64;
    (lo..=hi).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_snap_to_1_2_5() {
        assert_eq!(tick_step(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
    }

    #[test]
    fn ticks_cover_domain() {
        let t = linear_ticks(0.0, 10.0, 10);
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(10.0));
        assert_eq!(t.len(), 11);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let t = linear_ticks(0.3, 9.7, 10);
        assert!(t.iter().all(|&v| v >= 0.3 && v <= 9.7));
    }

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 4.0, 5);
        assert_eq!(v, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
