//! PyO3 bindings for selected `limites` functions.
//!
//! Notes
//! - Keep bindings thin; values cross as floats, tuples and strings.
//! - Invalid ε raises `ValueError` with the library's message.

use pyo3::prelude::*;

mod common;
mod course;
mod epsdelta;

#[pymodule]
fn limites_native(_py: Python, m: &PyModule) -> PyResult<()> {
    epsdelta::register(m)?;
    course::register(m)?;
    m.add("__version__", limites::VERSION)?;
    Ok(())
}
