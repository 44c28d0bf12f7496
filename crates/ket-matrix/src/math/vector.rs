use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{mismatch, out_of_range, Result};

/// Dense, fixed-length vector of integer entries.
///
/// Arithmetic never touches the receiver; every operation returns a new
/// `Vector` with its own storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<i64>,
}

impl Vector {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<i64>) -> Self {
        Self::new(data)
    }

    /// Zero-filled vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Vector::from_vec(vec![0; dim])
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, i64> {
        self.data.iter()
    }

    /// `(index, value)` pairs in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.data.iter().copied().enumerate()
    }

    /// Visit `(index, value)` pairs in order until `visit` returns `false`.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(usize, i64) -> bool,
    {
        for (idx, value) in self.entries() {
            if !visit(idx, value) {
                return;
            }
        }
    }

    pub fn entry(&self, index: usize) -> Result<i64> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| out_of_range((index, 0), self.shape()))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.data.clone()
    }

    /// Shape as a single column, used when reporting errors.
    pub(crate) fn shape(&self) -> (usize, usize) {
        (self.dim(), 1)
    }

    pub fn mapv<F>(&self, mut f: F) -> Vector
    where
        F: FnMut(i64) -> i64,
    {
        Vector::from_vec(self.data.iter().map(|&v| f(v)).collect())
    }

    pub fn equals(&self, other: &Vector) -> bool {
        self.data == other.data
    }

    pub fn multiply_scalar(&self, s: i64) -> Vector {
        self.mapv(|v| v * s)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dim("vector add", other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a + b).collect())
    }

    /// Inner (dot) product.
    pub fn multiply(&self, other: &Vector) -> Result<i64> {
        self.ensure_same_dim("vector dot product", other)?;
        Ok(dot(self.as_slice(), other.as_slice()))
    }

    /// Squared Euclidean norm, i.e. the vector's bracket with itself.
    pub fn norm_squared(&self) -> i64 {
        dot(self.as_slice(), self.as_slice())
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        (self.norm_squared() as f64).sqrt()
    }

    /// True when the bracket with itself is exactly 1.
    pub fn is_unit(&self) -> bool {
        self.norm_squared() == 1
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        Ok(self.multiply(other)? == 0)
    }

    fn ensure_same_dim(&self, op: &'static str, other: &Vector) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }
}

fn dot(lhs: &[i64], rhs: &[i64]) -> i64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<i64>> for Vector {
    fn from(value: Vec<i64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<&[i64]> for Vector {
    fn from(value: &[i64]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Vector {
    fn from(value: [i64; N]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl From<Vector> for Vec<i64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<i64> for Vector {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a i64;
    type IntoIter = Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Vector {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
