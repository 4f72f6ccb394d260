//! Fixed constants of the ε-δ visualizer.
//!
//! Policy
//! - The function is hard-coded as `f(x) = x²` around `a = 2`, so every
//!   number here is a constant rather than a parameter.
//! - Axis windows are part of the chart contract and must match the sample
//!   domain below.

/// Reference point `a`.
pub const REFERENCE_POINT: f64 = 2.0;
/// Limit value `L = f(a) = a²`.
pub const LIMIT_VALUE: f64 = 4.0;

/// Number of samples per series.
pub const SAMPLE_COUNT: usize = 100;
/// First abscissa `x_0`.
pub const SAMPLE_START: f64 = 0.5;
/// Width covered by the samples; `x_i = (i * SAMPLE_SPAN) / SAMPLE_COUNT + SAMPLE_START`.
pub const SAMPLE_SPAN: f64 = 3.0;

/// Chart x window `[min, max]`.
pub const X_AXIS: (f64, f64) = (0.5, 3.5);
/// Chart y window `[min, max]`.
pub const Y_AXIS: (f64, f64) = (0.0, 12.0);

/// Decimal places used for every textual readout and chart label.
pub const DISPLAY_DECIMALS: usize = 2;
