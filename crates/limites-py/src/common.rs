use limites::chart::ChartError;
use limites::epsdelta::{Tolerance, ToleranceError};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

pub fn map_tolerance_err(err: ToleranceError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_chart_err(err: ChartError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

pub fn tolerance_from_py(epsilon: f64) -> PyResult<Tolerance> {
    Tolerance::new(epsilon).map_err(map_tolerance_err)
}
