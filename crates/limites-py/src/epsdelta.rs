//! ε-δ bindings: δ, the sampled band and the slider sweep.

use crate::common::{map_tolerance_err, tolerance_from_py};
use limites::api;
use limites::epsdelta::{self, Series};
use limites::visualizer::{format_delta, format_epsilon};
use pyo3::prelude::*;

/// δ shown by the visualizer for `epsilon`.
#[pyfunction]
pub fn delta(epsilon: f64) -> PyResult<f64> {
    api::delta(epsilon).map_err(map_tolerance_err)
}

#[pyfunction]
pub fn two_sided_delta(epsilon: f64) -> PyResult<f64> {
    Ok(epsdelta::two_sided_delta(tolerance_from_py(epsilon)?))
}

/// `(x, f, upper, lower)` per sample.
#[pyfunction]
pub fn samples(epsilon: f64) -> PyResult<Vec<(f64, f64, f64, f64)>> {
    let view = epsdelta::compute(tolerance_from_py(epsilon)?);
    let s = &view.samples;
    Ok((0..s.len())
        .map(|i| {
            (
                s.x[i],
                s.series(Series::Curve)[i],
                s.series(Series::Upper)[i],
                s.series(Series::Lower)[i],
            )
        })
        .collect())
}

/// The two readout lines, ε first.
#[pyfunction]
pub fn readout(epsilon: f64) -> PyResult<(String, String)> {
    let eps = tolerance_from_py(epsilon)?;
    Ok((format_epsilon(eps), format_delta(epsdelta::delta(eps))))
}

/// `(epsilon, delta, display)` for every slider position in `[from_, to]`.
#[pyfunction]
pub fn sweep(from_: f64, to: f64) -> PyResult<Vec<(f64, f64, String)>> {
    let rows = api::sweep(from_, to).map_err(map_tolerance_err)?;
    Ok(rows
        .into_iter()
        .map(|r| (r.epsilon, r.delta, r.display))
        .collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(delta, m)?)?;
    m.add_function(wrap_pyfunction!(two_sided_delta, m)?)?;
    m.add_function(wrap_pyfunction!(samples, m)?)?;
    m.add_function(wrap_pyfunction!(readout, m)?)?;
    m.add_function(wrap_pyfunction!(sweep, m)?)?;
    Ok(())
}
