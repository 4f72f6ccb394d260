//! Serializable line-chart configuration for the ε-δ visualizer.
//!
//! Field names follow the JSON object a browser charting widget consumes
//! (`type`, `data.datasets[].borderColor`, `options.scales.x.min`, …), so the
//! config can be embedded in a page as is.

use nalgebra::Vector2;
use serde::Serialize;

use super::registry::{ChartComponent, ChartError, Registry};
use crate::epsdelta::cfg::{DISPLAY_DECIMALS, X_AXIS, Y_AXIS};
use crate::epsdelta::{SampleSet, Series};

/// Components a line chart over linear axes cannot draw without.
pub const LINE_CHART_COMPONENTS: [ChartComponent; 3] = [
    ChartComponent::LineElement,
    ChartComponent::PointElement,
    ChartComponent::LinearScale,
];

pub const CURVE_LABEL: &str = "f(x) = x²";
pub const UPPER_LABEL: &str = "Banda ε (superior)";
pub const LOWER_LABEL: &str = "Banda ε (inferior)";

const CURVE_COLOR: &str = "#1F2937";
const CURVE_FILL: &str = "rgba(31, 41, 55, 0.1)";
const BAND_COLOR: &str = "#FDBA74";
const BAND_DASH: [u32; 2] = [5, 5];
const GRID_COLOR: &str = "#E5E7EB";
const TICK_COLOR: &str = "#6B7280";

/// One `{x, y}` data point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<Point>,
    pub border_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
}

impl Dataset {
    fn curve(samples: &SampleSet) -> Self {
        Self {
            label: CURVE_LABEL,
            data: points(samples, Series::Curve),
            border_color: CURVE_COLOR,
            background_color: Some(CURVE_FILL),
            fill: Some(false),
            border_dash: Vec::new(),
            point_radius: None,
        }
    }

    fn band(samples: &SampleSet, which: Series, label: &'static str) -> Self {
        Self {
            label,
            data: points(samples, which),
            border_color: BAND_COLOR,
            background_color: None,
            fill: None,
            border_dash: BAND_DASH.to_vec(),
            point_radius: Some(0.0),
        }
    }
}

fn points(samples: &SampleSet, which: Series) -> Vec<Point> {
    samples.points(which).into_iter().map(Point::from).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipOptions {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Toggle,
    pub tooltip: TooltipOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Colored {
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub title: AxisTitle,
    pub min: f64,
    pub max: f64,
    pub grid: Colored,
    pub ticks: Colored,
}

impl Axis {
    fn new(kind: Option<&'static str>, title: &'static str, window: (f64, f64)) -> Self {
        Self {
            kind,
            title: AxisTitle {
                display: true,
                text: title,
            },
            min: window.0,
            max: window.1,
            grid: Colored { color: GRID_COLOR },
            ticks: Colored { color: TICK_COLOR },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
    pub animation: bool,
}

/// Complete chart description: kind, data and options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Line chart of the curve and both ε-bands.
    ///
    /// Fails only if `registry` lacks one of `LINE_CHART_COMPONENTS`.
    pub fn epsilon_delta(registry: &Registry, samples: &SampleSet) -> Result<Self, ChartError> {
        registry.require(&LINE_CHART_COMPONENTS)?;
        let labels = samples
            .x
            .iter()
            .map(|x| format!("{:.*}", DISPLAY_DECIMALS, x))
            .collect();
        let datasets = vec![
            Dataset::curve(samples),
            Dataset::band(samples, Series::Upper, UPPER_LABEL),
            Dataset::band(samples, Series::Lower, LOWER_LABEL),
        ];
        Ok(Self {
            kind: "line",
            data: ChartData { labels, datasets },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Toggle { display: false },
                    tooltip: TooltipOptions {
                        mode: "index",
                        intersect: false,
                    },
                },
                scales: Scales {
                    x: Axis::new(Some("linear"), "x", X_AXIS),
                    y: Axis::new(None, "f(x)", Y_AXIS),
                },
                animation: false,
            },
        })
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }

    /// Compact JSON, as handed to the charting widget.
    pub fn to_json(&self) -> Result<String, ChartError> {
        encode_json(self)
    }
}

/// Serialize chart-side data; failures surface as `ChartError::Encode`.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ChartError> {
    serde_json::to_string(value).map_err(|err| ChartError::Encode(err.to_string()))
}
