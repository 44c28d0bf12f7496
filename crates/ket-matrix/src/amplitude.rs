//! Probability amplitudes of a state vector over a two-ket basis.
//!
//! For an orthonormal pair `ket1`, `ket2` spanning the plane that holds a
//! state `v`:
//!
//! ```text
//! v = x1*ket1 + x2*ket2
//! a = [ket1 | ket2]          (d x 2, kets as columns)
//! aT * v = [x1, x2]          (aT is the inverse of a)
//! ```
use crate::error::{mismatch, LinalgError, Result};
use crate::math::{Matrix, Vector};

/// Amplitudes `(x1, x2)` of `v` with respect to `ket1` and `ket2`.
///
/// The kets must be orthonormal for the result to mean anything: the
/// transpose of the basis matrix only inverts it in that case. This is not
/// checked here; use [`is_orthonormal_pair`] or [`Basis::checked`] when the
/// kets come from an untrusted source.
pub fn probability_amplitude(v: &Vector, ket1: &Vector, ket2: &Vector) -> Result<(i64, i64)> {
    if ket1.dim() != ket2.dim() {
        return Err(mismatch("probability amplitude", ket1.shape(), ket2.shape()));
    }
    log::trace!("amplitudes of {} over [{}, {}]", v, ket1, ket2);

    let mut a = Matrix::zeros(ket1.dim(), 2);
    for (col, ket) in [ket1, ket2].into_iter().enumerate() {
        for (row, value) in ket.entries() {
            a.set_entry(row, col, value)?;
        }
    }

    let result = a.transpose().multiply(&Matrix::column_vector(v))?;
    Ok((result.entry(0, 0)?, result.entry(1, 0)?))
}

/// Both kets have unit bracket and are orthogonal to each other.
pub fn is_orthonormal_pair(ket1: &Vector, ket2: &Vector) -> Result<bool> {
    Ok(ket1.is_unit() && ket2.is_unit() && ket1.is_orthogonal(ket2)?)
}

/// An ordered pair of kets used to expand state vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Basis {
    ket1: Vector,
    ket2: Vector,
}

impl Basis {
    /// Pair two kets of equal dimension without checking orthonormality.
    pub fn new(ket1: Vector, ket2: Vector) -> Result<Self> {
        if ket1.dim() != ket2.dim() {
            return Err(mismatch("basis", ket1.shape(), ket2.shape()));
        }
        Ok(Self { ket1, ket2 })
    }

    /// Like [`Basis::new`], but rejects pairs that are not orthonormal.
    pub fn checked(ket1: Vector, ket2: Vector) -> Result<Self> {
        let basis = Self::new(ket1, ket2)?;
        if !basis.is_orthonormal()? {
            log::debug!("rejected basis [{}, {}]", basis.ket1, basis.ket2);
            return Err(LinalgError::NotOrthonormal);
        }
        Ok(basis)
    }

    pub fn dim(&self) -> usize {
        self.ket1.dim()
    }

    pub fn kets(&self) -> (&Vector, &Vector) {
        (&self.ket1, &self.ket2)
    }

    pub fn is_orthonormal(&self) -> Result<bool> {
        is_orthonormal_pair(&self.ket1, &self.ket2)
    }

    /// Basis matrix with the kets as its two columns.
    pub fn matrix(&self) -> Matrix {
        let mut a = Matrix::zeros(self.dim(), 2);
        for row in 0..self.dim() {
            a[(row, 0)] = self.ket1[row];
            a[(row, 1)] = self.ket2[row];
        }
        a
    }

    pub fn amplitudes(&self, v: &Vector) -> Result<(i64, i64)> {
        probability_amplitude(v, &self.ket1, &self.ket2)
    }

    /// Rebuild `x1*ket1 + x2*ket2`.
    pub fn compose(&self, x1: i64, x2: i64) -> Vector {
        let (lhs, rhs) = (self.ket1.multiply_scalar(x1), self.ket2.multiply_scalar(x2));
        lhs.iter().zip(rhs.iter()).map(|(a, b)| a + b).collect()
    }
}
