//! Curated surface for bindings and the CLI.
//!
//! Thin `f64`-in, plain-data-out wrappers over the typed API so callers that
//! cannot hold a `Tolerance` (Python, command-line flags) share one
//! validation path.

pub use crate::chart::{init as init_chart, ChartConfig};
pub use crate::epsdelta::cfg::{LIMIT_VALUE, REFERENCE_POINT, SAMPLE_COUNT};
pub use crate::epsdelta::{compute, SampleSet, Tolerance, ToleranceError, View, EPSILON_SLIDER};

use crate::chart::ChartError;
use crate::epsdelta;
use crate::visualizer::{format_value, Frame, Visualizer};

/// One row of a slider sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    pub epsilon: f64,
    pub delta: f64,
    pub two_sided_delta: f64,
    /// `delta − two_sided_delta`; zero when the displayed δ is the two-sided one.
    pub gap: f64,
    /// Two-decimal δ as shown next to the slider.
    pub display: String,
}

/// Pre: `epsilon` lies in the slider range.
/// Post: δ as computed by the visualizer.
pub fn delta(epsilon: f64) -> Result<f64, ToleranceError> {
    Ok(epsdelta::delta(Tolerance::new(epsilon)?))
}

pub fn view(epsilon: f64) -> Result<View, ToleranceError> {
    Ok(compute(Tolerance::new(epsilon)?))
}

/// Frame for `epsilon` against the process-wide chart registry.
pub fn frame(epsilon: f64) -> Result<Frame, FrameError> {
    let mut v = Visualizer::mount();
    v.set(Tolerance::new(epsilon)?);
    Ok(v.frame(init_chart())?)
}

/// Rows for every slider position in `[from, to]` (both snapped to the grid).
pub fn sweep(from: f64, to: f64) -> Result<Vec<SweepRow>, ToleranceError> {
    let lo = Tolerance::new(from)?.get();
    let hi = Tolerance::new(to)?.get();
    let rows = EPSILON_SLIDER
        .positions()
        .into_iter()
        .filter(|e| *e >= EPSILON_SLIDER.sanitize(lo) && *e <= EPSILON_SLIDER.sanitize(hi))
        .map(|e| -> Result<SweepRow, ToleranceError> {
            let eps = Tolerance::new(e)?;
            let d = epsdelta::delta(eps);
            let t = epsdelta::two_sided_delta(eps);
            Ok(SweepRow {
                epsilon: e,
                delta: d,
                two_sided_delta: t,
                gap: d - t,
                display: format_value(d.abs()),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Either half of building a frame from a raw value can fail.
#[derive(Debug, PartialEq)]
pub enum FrameError {
    Tolerance(ToleranceError),
    Chart(ChartError),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::Tolerance(e) => write!(f, "{e}"),
            FrameError::Chart(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<ToleranceError> for FrameError {
    fn from(e: ToleranceError) -> Self {
        FrameError::Tolerance(e)
    }
}

impl From<ChartError> for FrameError {
    fn from(e: ChartError) -> Self {
        FrameError::Chart(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_rejects_out_of_range() {
        assert!((delta(1.0).unwrap() - 0.2360679775).abs() < 1e-9);
        assert!(matches!(
            delta(3.0),
            Err(ToleranceError::OutOfRange { .. })
        ));
    }

    #[test]
    fn sweep_covers_grid_and_has_no_gap() {
        let rows = sweep(0.1, 2.0).unwrap();
        assert_eq!(rows.len(), 191);
        assert_eq!(rows[0].display, "0.02");
        assert_eq!(rows[90].epsilon, 1.0);
        assert_eq!(rows[90].display, "0.24");
        assert_eq!(rows[190].display, "0.45");
        assert!(rows.iter().all(|r| r.gap == 0.0));
        assert_eq!(sweep(0.5, 0.55).unwrap().len(), 6);
        assert!(sweep(1.5, 1.0).unwrap().is_empty());
    }

    #[test]
    fn frame_from_raw_value() {
        let f = frame(0.1).unwrap();
        assert_eq!(f.readout.delta_label, "δ calculado: 0.02");
        assert!(matches!(frame(0.0), Err(FrameError::Tolerance(_))));
    }
}
