//! Integration tests for the dense integer Matrix.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ket_matrix::{LinalgError, Matrix, Vector};

fn m(rows: &[&[i64]]) -> Matrix {
    let bras: Vec<Vector> = rows.iter().map(|r| Vector::from(*r)).collect();
    Matrix::from_rows(&bras).unwrap().unwrap()
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols).map(|_| rng.gen_range(-20..=20)).collect();
    Matrix::from_shape_vec((rows, cols), data).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn zeros_dim() {
    let a = Matrix::zeros(2, 3);
    assert_eq!(a.dim(), (2, 3));
    assert!(a.as_slice().iter().all(|e| *e == 0));
}

#[test]
fn identity_entries() {
    let a = Matrix::identity(3);
    assert_eq!(a.dim(), (3, 3));
    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1 } else { 0 };
            assert_eq!(a.entry(row, col), Ok(expected));
        }
    }
}

#[test]
fn from_rows() {
    let a = Matrix::from_rows(&[Vector::from([1, 0]), Vector::from([0, 1])])
        .unwrap()
        .unwrap();
    assert_eq!(a.dim(), (2, 2));
    assert_eq!(a.entry(0, 0), Ok(1));
    assert_eq!(a.entry(0, 1), Ok(0));
    assert_eq!(a.entry(1, 0), Ok(0));
    assert_eq!(a.entry(1, 1), Ok(1));
}

#[test]
fn from_no_rows_is_absent() {
    assert_eq!(Matrix::from_rows(&[]), Ok(None));
}

#[test]
fn from_shape_vec_rejects_wrong_length() {
    assert_eq!(
        Matrix::from_shape_vec((2, 3), vec![1, 2, 3]),
        Err(LinalgError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 3
        })
    );
}

#[test]
fn rows_and_columns_as_vectors() {
    let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
    assert!(a.row(1).unwrap().equals(&Vector::from([4, 5, 6])));
    assert!(a.column(2).unwrap().equals(&Vector::from([3, 6])));
    assert!(a.row(2).is_err());
    assert!(a.column(3).is_err());
}

// ---------------------------------------------------------------------------
// Entry access & traversal
// ---------------------------------------------------------------------------

#[test]
fn set_entry() {
    let mut a = Matrix::identity(2);
    a.set_entry(1, 1, 2).unwrap();
    assert_eq!(a.entry(1, 1), Ok(2));
}

#[test]
fn entry_out_of_range() {
    let a = Matrix::identity(2);
    assert!(matches!(
        a.entry(0, 2),
        Err(LinalgError::IndexOutOfRange { .. })
    ));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_out_of_range_panics() {
    let a = Matrix::zeros(2, 2);
    let _value = a[(0, 2)];
}

#[test]
fn for_each_counts_entries() {
    let (mut count, mut sum) = (0, 0);
    Matrix::identity(2).for_each(|_, _, e| {
        count += 1;
        sum += e;
        true
    });
    assert_eq!(count, 4);
    assert_eq!(sum, 2);
}

#[test]
fn for_each_early_exit() {
    let (mut count, mut sum) = (0, 0);
    Matrix::identity(2).for_each(|_, _, e| {
        count += 1;
        sum += e;
        false
    });
    assert_eq!(count, 1);
    assert_eq!(sum, 1);
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equals() {
    assert!(Matrix::zeros(2, 2).equals(&Matrix::zeros(2, 2)));
    assert!(Matrix::zeros(3, 1).equals(&Matrix::zeros(3, 1)));
    assert!(!Matrix::zeros(2, 2).equals(&Matrix::zeros(3, 2)));
    assert!(!Matrix::zeros(2, 2).equals(&Matrix::zeros(2, 3)));

    assert!(Matrix::identity(4).equals(&Matrix::identity(4)));
    assert!(!Matrix::identity(4).equals(&Matrix::identity(3)));

    assert!(m(&[&[1, 0], &[0, 1]]).equals(&Matrix::identity(2)));
    assert!(Matrix::identity(2).equals(&m(&[&[1, 0], &[0, 1]])));
    assert!(m(&[&[1, 2, 3], &[-15, 32, 0]]).equals(&m(&[&[1, 2, 3], &[-15, 32, 0]])));
    assert!(!m(&[&[1, 2, 3], &[-15, 32, 0]]).equals(&m(&[&[1, 2, 3], &[-15, 32, 1]])));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn multiply_scalar() {
    assert!(Matrix::identity(2)
        .multiply_scalar(3)
        .equals(&m(&[&[3, 0], &[0, 3]])));
    assert!(m(&[&[12, 7], &[0, -8]])
        .multiply_scalar(-3)
        .equals(&m(&[&[-36, -21], &[0, 24]])));
}

#[test]
fn add() {
    let a = m(&[&[1, -4, 2], &[2, 3, 0]]);
    let b = m(&[&[1, 2, 0], &[7, -3, 17]]);
    let c = m(&[&[2, -2, 2], &[9, 0, 17]]);
    assert!(a.add(&b).unwrap().equals(&c));
    assert!(a.equals(&m(&[&[1, -4, 2], &[2, 3, 0]])));
}

#[test]
fn add_mismatched_dims_errors() {
    let err = Matrix::zeros(2, 3).add(&Matrix::zeros(3, 2)).unwrap_err();
    assert_eq!(
        err,
        LinalgError::DimensionMismatch {
            op: "matrix add",
            left: (2, 3),
            right: (3, 2),
        }
    );
}

#[test]
fn multiply() {
    let a = m(&[&[1, -4, 2], &[2, 3, 0]]);
    let b = m(&[&[1, 2], &[7, 5], &[6, 1]]);
    let c = m(&[&[-15, -16], &[23, 19]]);
    assert!(a.multiply(&b).unwrap().equals(&c));
}

#[test]
fn multiply_mismatched_inner_dim_errors() {
    let a = m(&[&[1, -4, 2], &[2, 3, 0]]);
    assert!(matches!(
        a.multiply(&a),
        Err(LinalgError::DimensionMismatch { op: "matrix multiply", .. })
    ));
}

#[test]
fn transpose() {
    let a = m(&[&[1, 2], &[-4, 3], &[2, 0]]);
    let b = m(&[&[1, -4, 2], &[2, 3, 0]]);
    assert!(a.transpose().equals(&b));
    assert!(b.transpose().equals(&a));
}

#[test]
fn is_identity() {
    for n in 0..6 {
        assert!(Matrix::identity(n).is_identity());
    }
    assert!(m(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]).is_identity());
    assert!(!m(&[&[0, 1], &[1, 0]]).is_identity());
    assert!(!m(&[&[0, 1, 0], &[0, 1, 0], &[1, 0, 1]]).is_identity());
    assert!(!m(&[&[1, 0, 0], &[0, 1, 0]]).is_identity());
}

// ---------------------------------------------------------------------------
// Algebraic properties over seeded random matrices
// ---------------------------------------------------------------------------

#[test]
fn transpose_of_product_reverses_factors() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (r, k, c) = (rng.gen_range(1..5), rng.gen_range(1..5), rng.gen_range(1..5));
        let a = random_matrix(&mut rng, r, k);
        let b = random_matrix(&mut rng, k, c);
        let lhs = a.multiply(&b).unwrap().transpose();
        let rhs = b.transpose().multiply(&a.transpose()).unwrap();
        assert!(lhs.equals(&rhs), "failed for\n{}\n*\n{}", a, b);
    }
}

#[test]
fn identity_is_left_neutral() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let (n, k) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, n, k);
        assert!(Matrix::identity(n).multiply(&a).unwrap().equals(&a));
    }
}

#[test]
fn double_transpose_round_trips() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, r, c);
        assert!(a.transpose().transpose().equals(&a));
    }
}

#[test]
fn add_commutes() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, r, c);
        let b = random_matrix(&mut rng, r, c);
        assert!(a.add(&b).unwrap().equals(&b.add(&a).unwrap()));
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn serde_validates_shape() {
    let a = m(&[&[1, 2], &[3, 4]]);
    let json = serde_json::to_string(&a).unwrap();
    let back: Matrix = serde_json::from_str(&json).unwrap();
    assert!(back.equals(&a));

    let bad = r#"{"rows":2,"cols":2,"data":[1,2,3]}"#;
    assert!(serde_json::from_str::<Matrix>(bad).is_err());
}

#[test]
fn serde_rejects_shape_whose_size_overflows() {
    let huge = r#"{"rows":4294967296,"cols":4294967296,"data":[]}"#;
    assert!(serde_json::from_str::<Matrix>(huge).is_err());
}
