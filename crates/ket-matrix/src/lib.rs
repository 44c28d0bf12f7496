//! ket-matrix: exact integer linear algebra for bra-ket calculations.
//!
//! This crate provides dense integer `Vector` and `Matrix` types with
//! dimension-checked arithmetic, plus a helper that extracts the
//! probability amplitudes of a state vector over an orthonormal pair of
//! kets.
//!
//! Operations never mutate their operands. Incompatible shapes are reported
//! as [`LinalgError::DimensionMismatch`] instead of producing partial results.
pub mod amplitude;
pub mod error;
pub mod math;

pub use amplitude::{is_orthonormal_pair, probability_amplitude, Basis};
pub use error::{LinalgError, Result};
pub use math::{Matrix, MatrixOps, Vector, VectorOps};
