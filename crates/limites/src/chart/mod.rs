//! Chart view-model.
//!
//! - `registry`: once-per-process component registration (`init`).
//! - `config`: the line-chart description built from a `SampleSet`.

mod config;
mod registry;

pub use config::{
    encode_json, Axis, ChartConfig, ChartData, ChartOptions, Dataset, Point, CURVE_LABEL,
    LINE_CHART_COMPONENTS, LOWER_LABEL, UPPER_LABEL,
};
pub use registry::{init, ChartComponent, ChartError, Registry};

#[cfg(test)]
mod tests;
