//! Conversions to and from `ndarray` containers.
use ndarray::{Array1, Array2};

use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Vector};

impl From<Vector> for Array1<i64> {
    fn from(value: Vector) -> Self {
        Array1::from_vec(value.into())
    }
}

impl From<&Array1<i64>> for Vector {
    fn from(value: &Array1<i64>) -> Self {
        value.iter().copied().collect()
    }
}

impl TryFrom<Matrix> for Array2<i64> {
    type Error = LinalgError;

    fn try_from(value: Matrix) -> Result<Self> {
        let (rows, cols) = value.dim();
        Array2::from_shape_vec((rows, cols), value.to_vec()).map_err(|_| {
            LinalgError::ShapeMismatch {
                rows,
                cols,
                len: value.as_slice().len(),
            }
        })
    }
}

impl From<&Array2<i64>> for Matrix {
    fn from(value: &Array2<i64>) -> Self {
        let (rows, cols) = value.dim();
        let mut res = Matrix::zeros(rows, cols);
        for ((r, c), v) in value.indexed_iter() {
            res[(r, c)] = *v;
        }
        res
    }
}
