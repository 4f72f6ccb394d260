//! Interactive limits course: the ε-δ visualizer core and the course pages.
//!
//! Layout
//! - `epsdelta`: tolerance domain and the pure sampler (`compute`).
//! - `chart`: one-time chart registration and the line-chart view-model.
//! - `visualizer`: the stateful slider component and its readouts.
//! - `course`: routes, lesson content and static HTML rendering.
//!
//! The library is deterministic and does no IO; writing files is left to the
//! `cli` crate.

pub mod api;
pub mod chart;
pub mod course;
pub mod epsdelta;
pub mod visualizer;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use epsdelta::{compute, Tolerance, View};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chart::{init as init_chart, ChartConfig, Registry};
    pub use crate::course::{Page, Route};
    pub use crate::epsdelta::{
        compute, delta, two_sided_delta, SampleSet, Series, Tolerance, ToleranceError, View,
        EPSILON_SLIDER,
    };
    pub use crate::visualizer::{Frame, Readout, Visualizer};
}
