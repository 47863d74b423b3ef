//! Context-Triggered Piecewise Hashing: fuzzy signatures that stay close for
//! inputs that are mostly the same, plus the weighted edit distance used to
//! compare them.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod similarity;

#[cfg(feature = "python-ext")]
mod python_bindings;

pub use crate::config::{CtphConfig, HashingConfig, RankingConfig};
pub use crate::error::{CtphError, Result};
pub use crate::similarity::{
    distance, fuzzy_hash, fuzzy_hash_path, fuzzy_hash_with, Costs, Signature,
};

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pyo3::pymodule]
fn ctph(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use pyo3::prelude::*;

    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    python_bindings::register_python_bindings(m.py(), m)?;
    Ok(())
}
