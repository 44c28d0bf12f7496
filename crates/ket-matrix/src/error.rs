use std::error::Error;
use std::fmt;

/// Failures raised by vector and matrix operations.
///
/// Shapes are reported as `(rows, cols)`; a vector operand of length `n`
/// is reported as `(n, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Entry access outside of the operand's shape.
    IndexOutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// A flat buffer whose length disagrees with the requested shape.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// The supplied kets are not an orthonormal pair.
    NotOrthonormal,
    /// A checked operation produced an entry outside the `i64` range.
    Overflow { op: &'static str },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { op, left, right } => write!(
                f,
                "dimension mismatch in {}: {}x{} vs {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            LinalgError::IndexOutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) out of range for shape ({}, {})",
                index.0, index.1, shape.0, shape.1
            ),
            LinalgError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            LinalgError::NotOrthonormal => write!(f, "kets do not form an orthonormal pair"),
            LinalgError::Overflow { op } => write!(f, "integer overflow in {}", op),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Build a `DimensionMismatch` and log the rejected operands.
pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> LinalgError {
    log::debug!(
        "{} rejected operands of shape {:?} and {:?}",
        op,
        left,
        right
    );
    LinalgError::DimensionMismatch { op, left, right }
}

pub(crate) fn out_of_range(index: (usize, usize), shape: (usize, usize)) -> LinalgError {
    log::debug!("index {:?} out of range for shape {:?}", index, shape);
    LinalgError::IndexOutOfRange { index, shape }
}

pub(crate) fn overflow(op: &'static str) -> LinalgError {
    log::debug!("{} overflowed i64", op);
    LinalgError::Overflow { op }
}
