use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use ket_matrix::{Matrix, Vector};

pub fn validate_json_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref() != Some("json") {
        anyhow::bail!("Job file must have a .json extension: {}", path);
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Read and parse a JSON job file.
pub fn load_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    validate_json_file(&path.to_string_lossy())?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {}", path.display()))?;
    let job = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job file: {}", path.display()))?;
    Ok(job)
}

/// Build a matrix from nested rows, naming the operand in errors.
pub fn matrix_from_rows(name: &str, rows: &[Vec<i64>]) -> Result<Matrix> {
    let bras: Vec<Vector> = rows.iter().map(|r| Vector::from(r.as_slice())).collect();
    Matrix::from_rows(&bras)
        .with_context(|| format!("Invalid rows for `{}`", name))?
        .with_context(|| format!("`{}` has no rows", name))
}
