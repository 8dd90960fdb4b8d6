//! Shared fixtures for the workspace integration tests.
//!
//! Golden products live in `tests/testdata/matmul_golden.json`.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use matcalc_core::Matrix;

/// Contents of a golden product file.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One known product `a * b = product`.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub a: Matrix,
    pub b: Matrix,
    pub product: Matrix,
}

/// Path of the golden file shipped with the workspace.
#[must_use]
pub fn golden_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/matmul_golden.json")
}

/// Load and validate a golden file. Ragged rows are rejected while parsing.
pub fn load_golden(path: impl AsRef<Path>) -> io::Result<GoldenData> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
