//! `matrix` jobs: one arithmetic operation over matrices given as rows.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ket_matrix::Matrix;

use crate::util::{load_json, matrix_from_rows};

/// Supported matrix operations.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatrixOp {
    Add,
    #[default]
    Multiply,
    Transpose,
    Scale,
    IsIdentity,
}

impl MatrixOp {
    /// Whether the operation consumes `rhs`.
    pub fn is_binary(&self) -> bool {
        matches!(self, MatrixOp::Add | MatrixOp::Multiply)
    }
}

impl FromStr for MatrixOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "add" => Ok(MatrixOp::Add),
            "multiply" | "mul" => Ok(MatrixOp::Multiply),
            "transpose" => Ok(MatrixOp::Transpose),
            "scale" => Ok(MatrixOp::Scale),
            "is_identity" => Ok(MatrixOp::IsIdentity),
            _ => Err(format!(
                "Unknown matrix operation: {}. Expected one of add, multiply, transpose, scale, is-identity",
                s
            )),
        }
    }
}

impl fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixOp::Add => "add",
            MatrixOp::Multiply => "multiply",
            MatrixOp::Transpose => "transpose",
            MatrixOp::Scale => "scale",
            MatrixOp::IsIdentity => "is-identity",
        };
        write!(f, "{}", name)
    }
}

/// Parameters for a matrix job. Matrices are written as lists of rows.
///
/// Arithmetic is checked: an entry that leaves the `i64` range fails the
/// job instead of wrapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixJob {
    pub op: MatrixOp,
    pub lhs: Vec<Vec<i64>>,
    pub rhs: Option<Vec<Vec<i64>>>,
    pub scalar: Option<i64>,
}

impl Default for MatrixJob {
    fn default() -> Self {
        Self {
            op: MatrixOp::Multiply,
            lhs: vec![vec![1, 0], vec![0, 1]],
            rhs: Some(vec![vec![1, 2], vec![3, 4]]),
            scalar: None,
        }
    }
}

/// Job result. Matrices are written as `{rows, cols, data}` so that
/// zero-column results keep their shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixOutcome {
    Matrix(Matrix),
    IsIdentity(bool),
}

pub fn load_matrix_job<P: AsRef<Path>>(path: P) -> Result<MatrixJob> {
    load_json(path)
}

pub fn run_matrix_job(job: &MatrixJob) -> Result<MatrixOutcome> {
    let lhs = matrix_from_rows("lhs", &job.lhs)?;
    let rhs = match (&job.rhs, job.op.is_binary()) {
        (Some(rows), true) => Some(matrix_from_rows("rhs", rows)?),
        (None, true) => anyhow::bail!("Operation `{}` needs an `rhs` matrix", job.op),
        (_, false) => None,
    };
    log::info!("Running `{}` on a {}x{} matrix", job.op, lhs.nrows(), lhs.ncols());

    let result = match (job.op, rhs) {
        (MatrixOp::Add, Some(rhs)) => lhs.checked_add(&rhs).context("Cannot add matrices")?,
        (MatrixOp::Multiply, Some(rhs)) => lhs
            .checked_multiply(&rhs)
            .context("Cannot multiply matrices")?,
        (MatrixOp::Transpose, _) => lhs.transpose(),
        (MatrixOp::Scale, _) => {
            let s = job
                .scalar
                .context("Operation `scale` needs a `scalar` value")?;
            lhs.checked_multiply_scalar(s)
                .context("Cannot scale matrix")?
        }
        (MatrixOp::IsIdentity, _) => return Ok(MatrixOutcome::IsIdentity(lhs.is_identity())),
        (op, None) => anyhow::bail!("Operation `{}` needs an `rhs` matrix", op),
    };

    Ok(MatrixOutcome::Matrix(result))
}
