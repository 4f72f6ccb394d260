//! Tolerance-to-proximity sampler.
//!
//! `compute(ε)` is the whole reactive pipeline of the visualizer as one pure
//! function: it derives δ and regenerates the three chart series from scratch.
//! No state is kept between calls, so equal inputs give bit-identical output.

use nalgebra::Vector2;
use serde::Serialize;

use super::cfg::{LIMIT_VALUE, REFERENCE_POINT, SAMPLE_COUNT, SAMPLE_SPAN, SAMPLE_START};
use super::types::Tolerance;

/// The plotted function `f(x) = x²`.
#[inline]
pub fn curve(x: f64) -> f64 {
    x * x
}

/// δ shown next to the slider: `sqrt(L + ε) − a`.
///
/// This is the right-hand inverse of `x²` at `a`; it is reported as is and
/// compared against `two_sided_delta` only for diagnostics.
#[inline]
pub fn delta(eps: Tolerance) -> f64 {
    (LIMIT_VALUE + eps.get()).sqrt() - REFERENCE_POINT
}

/// Largest δ valid on both sides of `a`: `min(sqrt(L+ε) − a, a − sqrt(L−ε))`.
///
/// `L − ε ≥ 2` on the slider range, so the left root is always real.
pub fn two_sided_delta(eps: Tolerance) -> f64 {
    let right = (LIMIT_VALUE + eps.get()).sqrt() - REFERENCE_POINT;
    let left = REFERENCE_POINT - (LIMIT_VALUE - eps.get()).sqrt();
    right.min(left)
}

/// Check `|x² − L| < ε` on `probes` evenly spaced points of `(a − δ, a + δ)`,
/// skipping `x = a`. A non-positive or non-finite δ never holds.
pub fn delta_holds(eps: Tolerance, delta: f64, probes: usize) -> bool {
    if !(delta.is_finite() && delta > 0.0) {
        return false;
    }
    let n = probes as f64 + 1.0;
    (1..=probes)
        .map(|k| -1.0 + 2.0 * k as f64 / n)
        .map(|t| REFERENCE_POINT + t * delta)
        .filter(|&x| x != REFERENCE_POINT)
        .all(|x| (curve(x) - LIMIT_VALUE).abs() < eps.get())
}

/// Fixed abscissae `x_i = (i·3)/100 + 0.5`, `i ∈ 0..100`.
pub fn sample_xs() -> Vec<f64> {
    (0..SAMPLE_COUNT)
        .map(|i| (i as f64 * SAMPLE_SPAN) / SAMPLE_COUNT as f64 + SAMPLE_START)
        .collect()
}

/// Which of the three plotted sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Series {
    Curve,
    Upper,
    Lower,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Curve, Series::Upper, Series::Lower];
}

/// Sampled curve and ε-bands over the fixed x grid (parallel vectors).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleSet {
    pub x: Vec<f64>,
    pub curve: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl SampleSet {
    pub fn new(eps: Tolerance) -> Self {
        let x = sample_xs();
        let curve_values = x.iter().map(|&xi| curve(xi)).collect();
        let upper = vec![LIMIT_VALUE + eps.get(); x.len()];
        let lower = vec![LIMIT_VALUE - eps.get(); x.len()];
        Self {
            x,
            curve: curve_values,
            upper,
            lower,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn series(&self, which: Series) -> &[f64] {
        match which {
            Series::Curve => &self.curve,
            Series::Upper => &self.upper,
            Series::Lower => &self.lower,
        }
    }

    /// `(x_i, y_i)` pairs of one series, as fed to the chart.
    pub fn points(&self, which: Series) -> Vec<Vector2<f64>> {
        self.x
            .iter()
            .zip(self.series(which))
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect()
    }
}

/// Derived view-model for one ε.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct View {
    pub epsilon: f64,
    pub delta: f64,
    pub samples: SampleSet,
}

/// The full recomputation run on every slider event.
pub fn compute(eps: Tolerance) -> View {
    View {
        epsilon: eps.get(),
        delta: delta(eps),
        samples: SampleSet::new(eps),
    }
}
