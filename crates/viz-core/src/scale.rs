// File: crates/viz-core/src/scale.rs
// Summary: Linear, log10 and band scales mapping data domains to pixel ranges.

use crate::ticks::linear_ticks;

/// Linear interpolation from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        if !d0.is_finite() || !d1.is_finite() {
            d0 = 0.0;
            d1 = 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let lo = self.d0.min(self.d1);
        let hi = self.d0.max(self.d1);
        linear_ticks(lo, hi, count)
    }
}

/// Base-10 logarithmic scale with cached log endpoints.
/// The domain is clamped to strictly positive values.
#[derive(Clone, Copy, Debug)]
pub struct LogScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
    log0: f64,
    log1: f64,
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let eps = 1e-12;
        let mut d0 = if domain.0 <= eps { eps } else { domain.0 };
        let mut d1 = domain.1;
        if d1 <= d0 {
            d1 = d0 * 10.0;
        }
        if !d0.is_finite() || !d1.is_finite() {
            d0 = 1.0;
            d1 = 10.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1, log0: d0.log10(), log1: d1.log10() }
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        let lv = v.max(1e-12).log10();
        let span = (self.log1 - self.log0).max(1e-12);
        self.r0 + (lv - self.log0) / span * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    /// Mantissa ticks (1..9 per decade) within the domain; only powers of
    /// ten when the domain spans many decades.
    pub fn ticks(&self) -> Vec<f64> {
        let lo = self.d0.min(self.d1);
        let hi = self.d0.max(self.d1);
        let i0 = lo.log10().floor() as i32;
        let i1 = hi.log10().ceil() as i32;
        let inside = |t: f64| t >= lo * (1.0 - 1e-9) && t <= hi * (1.0 + 1e-9);
        let mut out = Vec::new();
        if i1 - i0 < 10 {
            for i in i0..=i1 {
                let base = 10f64.powi(i);
                for k in 1..10 {
                    let t = k as f64 * base;
                    if inside(t) {
                        out.push(t);
                    }
                }
            }
        } else {
            for i in i0..=i1 {
                let t = 10f64.powi(i);
                if inside(t) {
                    out.push(t);
                }
            }
        }
        out
    }
}

/// Ordinal band scale: evenly spaced slots with inner/outer padding,
/// used for category axes.
#[derive(Clone, Debug)]
pub struct BandScale {
    n: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(n: usize, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self {
        let (r0, r1) = range;
        let pi = padding_inner.clamp(0.0, 1.0);
        let po = padding_outer.max(0.0);
        let slots = (n as f64 - pi + po * 2.0).max(1.0);
        let step = (r1 - r0) / slots;
        let start = r0 + (r1 - r0 - step * (n as f64 - pi)) * 0.5;
        Self { n, start, step, bandwidth: step * (1.0 - pi) }
    }

    /// Left edge of slot `i`.
    #[inline]
    pub fn position(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }

    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
