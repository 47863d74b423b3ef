//! Python bindings for fuzzy hashing and edit-distance scoring.
//!
//! Arguments are typed, so pyo3 raises `TypeError` for non-string digests
//! before any matrix is built.

use pyo3::prelude::*;

use crate::config::{CtphConfig, HashingConfig};
use crate::similarity::Costs;

/// Register similarity-related Python bindings.
pub fn register_similarity_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    let similarity_mod = pyo3::types::PyModule::new(py, "similarity")?;

    similarity_mod.add_function(wrap_pyfunction!(fuzzy_hash_bytes_py, &similarity_mod)?)?;
    similarity_mod.add_function(wrap_pyfunction!(fuzzy_hash_path_py, &similarity_mod)?)?;
    similarity_mod.add_function(wrap_pyfunction!(edit_distance_py, &similarity_mod)?)?;
    similarity_mod.add_function(wrap_pyfunction!(cost_matrix_py, &similarity_mod)?)?;
    similarity_mod.add_function(wrap_pyfunction!(top_k_py, &similarity_mod)?)?;

    m.add_submodule(&similarity_mod)?;

    Ok(())
}

fn costs_from(insert: u32, delete: u32, change: u32, swap: u32) -> Costs {
    Costs {
        insert,
        delete,
        change,
        swap,
    }
}

/// Fuzzy hash of binary data as `"<block_size>:<normal>:<shorter>"`.
#[pyfunction]
#[pyo3(name = "fuzzy_hash_bytes")]
#[pyo3(signature = (data, block_size=None, legacy=false))]
fn fuzzy_hash_bytes_py(data: &[u8], block_size: Option<u32>, legacy: bool) -> PyResult<String> {
    let cfg = HashingConfig { block_size, legacy };
    Ok(crate::similarity::fuzzy_hash_with(data, &cfg)?.to_string())
}

/// Fuzzy hash of a file.
#[pyfunction]
#[pyo3(name = "fuzzy_hash_path")]
#[pyo3(signature = (path, max_file_size=104_857_600, block_size=None, legacy=false))]
fn fuzzy_hash_path_py(
    path: String,
    max_file_size: u64,
    block_size: Option<u32>,
    legacy: bool,
) -> PyResult<String> {
    let mut cfg = CtphConfig::default();
    cfg.io.max_file_size = max_file_size;
    cfg.hashing = HashingConfig { block_size, legacy };
    Ok(crate::similarity::fuzzy_hash_path(&path, &cfg)?.to_string())
}

/// Weighted edit distance between two strings.
#[pyfunction]
#[pyo3(name = "edit_distance")]
#[pyo3(signature = (a, b, insert=1, delete=1, change=2, swap=2))]
fn edit_distance_py(a: &str, b: &str, insert: u32, delete: u32, change: u32, swap: u32) -> u32 {
    costs_from(insert, delete, change, swap).distance(a, b)
}

/// Full cost matrix as a list of rows.
#[pyfunction]
#[pyo3(name = "cost_matrix")]
#[pyo3(signature = (a, b, insert=1, delete=1, change=2, swap=2))]
fn cost_matrix_py(
    a: &str,
    b: &str,
    insert: u32,
    delete: u32,
    change: u32,
    swap: u32,
) -> Vec<Vec<u32>> {
    costs_from(insert, delete, change, swap)
        .matrix(a, b)
        .to_rows()
}

/// Closest candidates to `query`, as `(candidate, distance)` pairs.
#[pyfunction]
#[pyo3(name = "top_k")]
#[pyo3(signature = (query, candidates, k=5, max_distance=None, max_candidates=10000))]
fn top_k_py(
    query: &str,
    candidates: Vec<String>,
    k: usize,
    max_distance: Option<u32>,
    max_candidates: usize,
) -> Vec<(String, u32)> {
    crate::similarity::top_k(
        query,
        candidates.iter().map(String::as_str),
        &Costs::default(),
        max_distance,
        k,
        max_candidates,
    )
    .into_iter()
    .map(|(c, d)| (c.to_string(), d))
    .collect()
}
