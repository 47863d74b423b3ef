//! Python bindings for ctph.

pub mod similarity;

use pyo3::prelude::*;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    similarity::register_similarity_bindings(py, m)?;
    Ok(())
}
