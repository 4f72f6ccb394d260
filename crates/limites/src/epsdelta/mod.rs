//! ε-δ sampler for `f(x) = x²` at `a = 2`.
//!
//! Purpose
//! - Turn one slider value ε into the data the visualizer shows: the proximity
//!   bound δ and three sampled series (curve, upper band, lower band).
//! - Keep the computation a single pure function (`compute`) so the rendering
//!   layer is a strict consumer of its output.
//!
//! Numerics
//! - δ is the closed form `sqrt(L + ε) − a`. `two_sided_delta` and
//!   `delta_holds` exist to check that value against the two-sided ε-δ
//!   condition; they do not change what is displayed.
//!
//! Code cross-refs: `Tolerance`, `SampleSet`, `View`, `crate::visualizer`

pub mod cfg;
mod sampler;
mod types;

pub use sampler::{
    compute, curve, delta, delta_holds, sample_xs, two_sided_delta, SampleSet, Series, View,
};
pub use types::{parse_float_prefix, SliderRange, Tolerance, ToleranceError, EPSILON_SLIDER};
