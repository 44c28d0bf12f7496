use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{mismatch, out_of_range, overflow, LinalgError, Result};
use crate::math::vector::Vector;

/// Dense row-major matrix of integer entries.
///
/// `add`, `multiply`, `multiply_scalar` and `transpose` allocate a fresh
/// result and leave both operands untouched. `set_entry` and `IndexMut`
/// are the only in-place mutators; they exist for filling in a matrix that
/// has just been allocated, before it is handed out.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

/// Serialized form; validated on the way back in.
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        RawMatrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<i64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LinalgError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let data = (0..n * n)
            .map(|i| if i / n == i % n { 1 } else { 0 })
            .collect();
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Stack `bras` as the rows of a new matrix.
    ///
    /// Returns `Ok(None)` for an empty slice: there is no zero-row matrix
    /// to build. Every row must have the dimension of the first one.
    pub fn from_rows(bras: &[Vector]) -> Result<Option<Self>> {
        let Some(first) = bras.first() else {
            log::debug!("no rows supplied, no matrix built");
            return Ok(None);
        };
        let cols = first.dim();
        let mut data = Vec::with_capacity(bras.len() * cols);
        for bra in bras {
            if bra.dim() != cols {
                return Err(mismatch("matrix from rows", (1, cols), (1, bra.dim())));
            }
            data.extend_from_slice(bra.as_slice());
        }
        Ok(Some(Self {
            data,
            rows: bras.len(),
            cols,
        }))
    }

    /// Place `kets` side by side as the columns of a new matrix.
    ///
    /// Same contract as [`Matrix::from_rows`].
    pub fn from_columns(kets: &[Vector]) -> Result<Option<Self>> {
        let Some(first) = kets.first() else {
            log::debug!("no columns supplied, no matrix built");
            return Ok(None);
        };
        let mut res = Matrix::zeros(first.dim(), kets.len());
        for (col, ket) in kets.iter().enumerate() {
            if ket.dim() != res.rows {
                return Err(mismatch(
                    "matrix from columns",
                    (res.rows, 1),
                    (ket.dim(), 1),
                ));
            }
            for (row, value) in ket.entries() {
                res.set_entry(row, col, value)?;
            }
        }
        Ok(Some(res))
    }

    /// `v` as a single-column matrix.
    pub fn column_vector(v: &Vector) -> Self {
        Self {
            data: v.to_vec(),
            rows: v.dim(),
            cols: 1,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(out_of_range((row, col), self.dim()));
        }
        Ok(self.offset(row, col))
    }

    pub fn entry(&self, row: usize, col: usize) -> Result<i64> {
        let offset = self.checked_offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrite a single entry in place.
    ///
    /// Meant for assembling a freshly built matrix; arithmetic never
    /// mutates an existing operand.
    pub fn set_entry(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        let offset = self.checked_offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[i64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(out_of_range((row, 0), self.dim()));
        }
        Ok(Vector::from(self.row_slice(row)))
    }

    pub fn column(&self, col: usize) -> Result<Vector> {
        if col >= self.cols {
            return Err(out_of_range((0, col), self.dim()));
        }
        Ok((0..self.rows).map(|row| self[(row, col)]).collect())
    }

    /// `(row, col, value)` triples in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i / cols, i % cols, value))
    }

    /// Visit entries in row-major order until `visit` returns `false`.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, i64) -> bool,
    {
        for (row, col, value) in self.entries() {
            if !visit(row, col, value) {
                return;
            }
        }
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(i64) -> i64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Same shape and same entries. Two matrices without entries of equal
    /// shape compare equal.
    pub fn equals(&self, other: &Matrix) -> bool {
        self.dim() == other.dim() && self.data == other.data
    }

    pub fn multiply_scalar(&self, s: i64) -> Matrix {
        self.mapv(|v| v * s)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.dim() != other.dim() {
            return Err(mismatch("matrix add", self.dim(), other.dim()));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix product `self * other`; needs `self.ncols() == other.nrows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(mismatch("matrix multiply", self.dim(), other.dim()));
        }
        let mut res = Matrix::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            let lhs = self.row_slice(r);
            for c in 0..other.cols {
                res[(r, c)] = lhs
                    .iter()
                    .enumerate()
                    .map(|(i, a)| a * other[(i, c)])
                    .sum();
            }
        }
        Ok(res)
    }

    /// Like [`Matrix::multiply_scalar`], but an entry that does not fit in
    /// `i64` is reported as `Overflow`.
    pub fn checked_multiply_scalar(&self, s: i64) -> Result<Matrix> {
        let data = self
            .data
            .iter()
            .map(|v| v.checked_mul(s))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| overflow("matrix scale"))?;
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Like [`Matrix::add`], reporting `Overflow` instead of wrapping.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix> {
        if self.dim() != other.dim() {
            return Err(mismatch("matrix add", self.dim(), other.dim()));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.checked_add(*b))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| overflow("matrix add"))?;
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Like [`Matrix::multiply`], reporting `Overflow` instead of wrapping.
    pub fn checked_multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(mismatch("matrix multiply", self.dim(), other.dim()));
        }
        let mut res = Matrix::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            let lhs = self.row_slice(r);
            for c in 0..other.cols {
                res[(r, c)] = lhs
                    .iter()
                    .enumerate()
                    .try_fold(0i64, |acc, (i, a)| {
                        a.checked_mul(other[(i, c)])
                            .and_then(|p| acc.checked_add(p))
                    })
                    .ok_or_else(|| overflow("matrix multiply"))?;
            }
        }
        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0; self.data.len()];
        for (r, c, value) in self.entries() {
            data[r + c * self.rows] = value;
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Square, ones on the diagonal and zeros everywhere else.
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && self
                .entries()
                .all(|(r, c, value)| {
                    let expected = if r == c { 1 } else { 0 };
                    value == expected
                })
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.data.clone()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> Matrix {
        let bras: Vec<Vector> = rows.iter().map(|r| Vector::from(*r)).collect();
        Matrix::from_rows(&bras).unwrap().unwrap()
    }

    #[test]
    fn identity_layout() {
        assert_eq!(Matrix::identity(3).to_vec(), vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(Matrix::identity(0).dim(), (0, 0));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(&[Vector::from([1, 2]), Vector::from([3])]).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
    }

    #[test]
    fn from_columns_places_kets_side_by_side() {
        let a = Matrix::from_columns(&[Vector::from([1, 2, 3]), Vector::from([4, 5, 6])])
            .unwrap()
            .unwrap();
        assert!(a.equals(&m(&[&[1, 4], &[2, 5], &[3, 6]])));
        assert!(Matrix::from_columns(&[]).unwrap().is_none());
    }

    #[test]
    fn for_each_is_row_major_and_stops_early() {
        let mut seen = Vec::new();
        m(&[&[1, 2], &[3, 4]]).for_each(|r, c, e| {
            seen.push((r, c, e));
            seen.len() < 3
        });
        assert_eq!(seen, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3)]);
    }

    #[test]
    fn zero_row_matrices_compare_equal() {
        assert!(Matrix::zeros(0, 3).equals(&Matrix::zeros(0, 3)));
        assert!(!Matrix::zeros(0, 3).equals(&Matrix::zeros(0, 2)));
    }

    #[test]
    fn set_entry_checks_bounds() {
        let mut a = Matrix::zeros(2, 2);
        assert!(a.set_entry(1, 1, 5).is_ok());
        assert_eq!(a.entry(1, 1), Ok(5));
        assert_eq!(
            a.set_entry(2, 0, 1),
            Err(LinalgError::IndexOutOfRange {
                index: (2, 0),
                shape: (2, 2)
            })
        );
    }

    #[test]
    fn shape_product_overflow_is_a_shape_mismatch() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            Matrix::from_shape_vec((huge, huge), vec![]),
            Err(LinalgError::ShapeMismatch {
                rows: huge,
                cols: huge,
                len: 0
            })
        );
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let big = m(&[&[i64::MAX, 1]]);
        assert_eq!(
            big.checked_multiply_scalar(2),
            Err(LinalgError::Overflow { op: "matrix scale" })
        );
        assert_eq!(
            big.checked_add(&m(&[&[1, 1]])),
            Err(LinalgError::Overflow { op: "matrix add" })
        );
        assert_eq!(
            big.checked_multiply(&m(&[&[1], &[1]])),
            Err(LinalgError::Overflow { op: "matrix multiply" })
        );
    }

    #[test]
    fn checked_arithmetic_matches_plain_when_in_range() {
        let a = m(&[&[1, -4, 2], &[2, 3, 0]]);
        let b = m(&[&[1, 2], &[7, 5], &[6, 1]]);
        assert_eq!(a.checked_multiply(&b), a.multiply(&b));
        assert_eq!(a.checked_add(&a), a.add(&a));
        assert_eq!(a.checked_multiply_scalar(-3), Ok(a.multiply_scalar(-3)));
        assert!(a.checked_add(&b).is_err());
    }

    #[test]
    fn transpose_swaps_shape() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let t = a.transpose();
        assert_eq!(t.dim(), (3, 2));
        assert_eq!(t.to_vec(), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn display_one_row_per_line() {
        assert_eq!(m(&[&[1, 0], &[0, -1]]).to_string(), "[1, 0]\n[0, -1]");
    }
}
