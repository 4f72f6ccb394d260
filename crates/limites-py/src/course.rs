//! Course page bindings.

use crate::common::map_chart_err;
use limites::api;
use limites::chart;
use limites::course::{render_page, Route};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

#[pyfunction]
pub fn routes() -> Vec<&'static str> {
    Route::ALL.iter().map(|r| r.path()).collect()
}

/// Full HTML for the page at `path` (e.g. `"/leccion2"`).
#[pyfunction]
pub fn page_html(path: &str) -> PyResult<String> {
    let route = Route::resolve(path)
        .ok_or_else(|| PyKeyError::new_err(format!("unknown route {path:?}")))?;
    render_page(route, chart::init()).map_err(map_chart_err)
}

/// Chart config for `epsilon`, serialized as JSON.
#[pyfunction]
pub fn chart_json(epsilon: f64) -> PyResult<String> {
    let frame = api::frame(epsilon).map_err(|err| PyValueError::new_err(err.to_string()))?;
    frame.chart.to_json().map_err(map_chart_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(routes, m)?)?;
    m.add_function(wrap_pyfunction!(page_html, m)?)?;
    m.add_function(wrap_pyfunction!(chart_json, m)?)?;
    Ok(())
}
