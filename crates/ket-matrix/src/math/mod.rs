//! Dense integer vectors and matrices.
//!
//! `Vector` (1D) and `Matrix` (2D, row-major) are small owned containers
//! with exact integer arithmetic. Their operation sets are also exposed as
//! the [`VectorOps`] / [`MatrixOps`] traits.
pub mod matrix;
pub mod ops;
pub mod vector;

#[cfg(feature = "ndarray")]
mod interop;

pub use matrix::Matrix;
pub use ops::{MatrixOps, VectorOps};
pub use vector::Vector;
