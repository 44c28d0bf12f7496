//! Capability sets shared by the dense vector and matrix types.
//!
//! Code that only needs the arithmetic surface can be written against
//! these traits instead of the concrete [`Vector`] / [`Matrix`].
use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::math::vector::Vector;

pub trait VectorOps: Sized {
    fn dim(&self) -> usize;

    /// Visit `(index, value)` pairs in order; return `false` to stop.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(usize, i64) -> bool;

    fn equals(&self, other: &Self) -> bool;

    fn multiply_scalar(&self, s: i64) -> Self;

    fn add(&self, other: &Self) -> Result<Self>;

    /// Inner product.
    fn multiply(&self, other: &Self) -> Result<i64>;

    fn norm_squared(&self) -> i64;

    fn length(&self) -> f64 {
        (self.norm_squared() as f64).sqrt()
    }

    fn is_unit(&self) -> bool {
        self.norm_squared() == 1
    }

    fn is_orthogonal(&self, other: &Self) -> Result<bool> {
        Ok(self.multiply(other)? == 0)
    }
}

pub trait MatrixOps: Sized {
    /// `(rows, cols)`.
    fn dim(&self) -> (usize, usize);

    fn entry(&self, row: usize, col: usize) -> Result<i64>;

    fn set_entry(&mut self, row: usize, col: usize, value: i64) -> Result<()>;

    /// Visit `(row, col, value)` in row-major order; return `false` to stop.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(usize, usize, i64) -> bool;

    fn equals(&self, other: &Self) -> bool;

    fn multiply_scalar(&self, s: i64) -> Self;

    fn add(&self, other: &Self) -> Result<Self>;

    fn multiply(&self, other: &Self) -> Result<Self>;

    fn transpose(&self) -> Self;

    fn is_identity(&self) -> bool;
}

impl VectorOps for Vector {
    fn dim(&self) -> usize {
        Vector::dim(self)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(usize, i64) -> bool,
    {
        Vector::for_each(self, visit)
    }

    fn equals(&self, other: &Self) -> bool {
        Vector::equals(self, other)
    }

    fn multiply_scalar(&self, s: i64) -> Self {
        Vector::multiply_scalar(self, s)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Vector::add(self, other)
    }

    fn multiply(&self, other: &Self) -> Result<i64> {
        Vector::multiply(self, other)
    }

    fn norm_squared(&self) -> i64 {
        Vector::norm_squared(self)
    }
}

impl MatrixOps for Matrix {
    fn dim(&self) -> (usize, usize) {
        Matrix::dim(self)
    }

    fn entry(&self, row: usize, col: usize) -> Result<i64> {
        Matrix::entry(self, row, col)
    }

    fn set_entry(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        Matrix::set_entry(self, row, col, value)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(usize, usize, i64) -> bool,
    {
        Matrix::for_each(self, visit)
    }

    fn equals(&self, other: &Self) -> bool {
        Matrix::equals(self, other)
    }

    fn multiply_scalar(&self, s: i64) -> Self {
        Matrix::multiply_scalar(self, s)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Matrix::add(self, other)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Matrix::multiply(self, other)
    }

    fn transpose(&self) -> Self {
        Matrix::transpose(self)
    }

    fn is_identity(&self) -> bool {
        Matrix::is_identity(self)
    }
}
