//! Integration tests for the row-major `Matrix` engine.

use approx::assert_relative_eq;
use redeem_linalg::{MathError, Matrix, Vector};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap()
}

fn assert_matrix_eq(m: &Matrix, expected: &[&[f64]]) {
    assert_eq!(m.rows(), expected.len());
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(m.cols(), row.len());
        for (j, v) in row.iter().enumerate() {
            assert_relative_eq!(m.get(i as isize, j as isize), *v);
        }
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn zeros_boundary_example() {
    let m = Matrix::zeros(2, 3).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.as_slice().len(), 6);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
    assert!(m.get(2, 0).is_nan());
    assert!(matches!(
        m.get_checked(2, 0),
        Err(MathError::IndexOutOfBounds { row: 2, col: 0, .. })
    ));
}

#[test]
fn zeros_rejects_invalid_dimensions() {
    init_logger();
    assert_eq!(
        Matrix::zeros(0, 3),
        Err(MathError::InvalidDimensions { rows: 0, cols: 3 })
    );
    assert!(Matrix::zeros(3, 0).is_err());
}

#[test]
fn identity_square_and_rectangular() {
    let m = Matrix::identity(3, 3).unwrap();
    assert_eq!(m.get(1, 1), 1.0);
    assert_eq!(m.get(0, 1), 0.0);

    let wide = Matrix::identity(2, 4).unwrap();
    assert_matrix_eq(&wide, &[&[1.0, 0.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]]);

    let tall = Matrix::identity(3, 2).unwrap();
    assert_matrix_eq(&tall, &[&[1.0, 0.0], &[0.0, 1.0], &[0.0, 0.0]]);
}

#[test]
fn from_rows_round_trip() {
    let rows = vec![vec![1.5, -2.0], vec![0.0, 4.25], vec![7.0, 8.0]];
    let m = Matrix::from_rows(&rows).unwrap();
    assert_eq!(m.shape(), (3, 2));
    for (i, row) in rows.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            assert_eq!(m.get(i as isize, j as isize), *v);
        }
    }
}

#[test]
fn from_rows_rejects_bad_input() {
    let empty: Vec<Vec<f64>> = vec![];
    assert_eq!(Matrix::from_rows(&empty), Err(MathError::EmptyInput));

    let empty_row: Vec<Vec<f64>> = vec![vec![]];
    assert_eq!(Matrix::from_rows(&empty_row), Err(MathError::EmptyRow));

    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        Matrix::from_rows(&ragged),
        Err(MathError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn from_shape_vec_checks_length() {
    let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(
        Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]),
        Err(MathError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 3
        })
    );
    assert!(Matrix::from_shape_vec((0, 0), vec![]).is_err());
}

#[test]
fn overflowing_dimensions_are_rejected() {
    init_logger();
    assert_eq!(
        Matrix::zeros(usize::MAX, 2),
        Err(MathError::InvalidDimensions {
            rows: usize::MAX,
            cols: 2
        })
    );
    assert!(Matrix::identity(2, usize::MAX).is_err());
    assert_eq!(
        Matrix::from_shape_vec((usize::MAX, 2), vec![]),
        Err(MathError::ShapeMismatch {
            rows: usize::MAX,
            cols: 2,
            len: 0
        })
    );
    // wrapped product would be 0; must not be accepted as an empty buffer
    let half = 1usize << (usize::BITS / 2);
    assert!(Matrix::from_shape_vec((half, half), vec![]).is_err());
}

#[test]
fn vector_becomes_column_matrix() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    let m = Matrix::from(v);
    assert_eq!(m.shape(), (3, 1));
    assert_eq!(m.get(2, 0), 3.0);
}

#[test]
fn clone_is_independent() {
    let m = sample();
    let mut copy = m.clone();
    assert_eq!(copy, m);
    copy.set(0, 0, 100.0);
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(copy.get(0, 0), 100.0);
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_fail_soft() {
    let mut m = sample();
    assert!(m.get(-1, 0).is_nan());
    assert!(m.get(0, 3).is_nan());
    m.set(3, 0, 42.0);
    m.set(0, -1, 42.0);
    assert_eq!(m, sample());
    m.set(2, 2, 42.0);
    assert_eq!(m.get(2, 2), 42.0);
}

#[test]
fn checked_accessors_report_negative_and_out_of_bound() {
    let mut m = sample();
    assert_eq!(m.get_checked(1, 2), Ok(6.0));
    assert_eq!(
        m.get_checked(0, -1),
        Err(MathError::NegativeIndex { row: 0, col: -1 })
    );
    assert_eq!(
        m.set_checked(1, 3, 0.0),
        Err(MathError::IndexOutOfBounds {
            row: 1,
            col: 3,
            rows: 3,
            cols: 3
        })
    );
    assert_eq!(m, sample());
    assert!(m.set_checked(1, 1, -5.0).is_ok());
    assert_eq!(m.get(1, 1), -5.0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_panics_past_the_end() {
    let m = Matrix::zeros(2, 2).unwrap();
    let _value: f64 = m[(0, 2)];
}

// ---------------------------------------------------------------------------
// Rows, columns and blocks
// ---------------------------------------------------------------------------

#[test]
fn rows_and_columns_have_matching_sizes() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let row = m.get_row(1).unwrap();
    let col = m.get_col(2).unwrap();
    assert_eq!(row.len(), m.cols());
    assert_eq!(col.len(), m.rows());
    assert_eq!(row.to_vec(), vec![4.0, 5.0, 6.0]);
    assert_eq!(col.to_vec(), vec![3.0, 6.0]);
    assert!(m.get_row(2).is_none());
    assert!(m.get_col(-1).is_none());
}

#[test]
fn extracted_row_is_a_copy() {
    let mut m = sample();
    let mut row = m.get_row(0).unwrap();
    row.set(0, 50.0);
    assert_eq!(m.get(0, 0), 1.0);
    m.set(0, 1, 60.0);
    assert_eq!(row.get(1), 2.0);
}

#[test]
fn set_row_and_col() {
    let mut m = Matrix::zeros(2, 3).unwrap();
    m.set_row(1, &Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap());
    m.set_col(0, &Vector::from_slice(&[7.0, 8.0]).unwrap());
    assert_matrix_eq(&m, &[&[7.0, 0.0, 0.0], &[8.0, 2.0, 3.0]]);
}

#[test]
fn set_row_and_col_ignore_mismatches() {
    let mut m = Matrix::zeros(2, 3).unwrap();
    m.set_row(0, &Vector::from_slice(&[1.0, 2.0]).unwrap());
    m.set_row(2, &Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap());
    m.set_col(1, &Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap());
    m.set_col(3, &Vector::from_slice(&[1.0, 2.0]).unwrap());
    assert_eq!(m, Matrix::zeros(2, 3).unwrap());
}

#[test]
fn get_block_is_inclusive() {
    let m = sample();
    let b = m.get_block(1, 0, 2, 1).unwrap();
    assert_eq!(b.shape(), (2, 2));
    assert_matrix_eq(&b, &[&[4.0, 5.0], &[7.0, 8.0]]);

    let single = m.get_block(2, 2, 2, 2).unwrap();
    assert_matrix_eq(&single, &[&[9.0]]);
}

#[test]
fn get_block_rejects_invalid_corners() {
    let m = sample();
    assert!(m.get_block(-1, 0, 1, 1).is_none());
    assert!(m.get_block(0, 0, 3, 1).is_none());
    assert!(m.get_block(0, 0, 1, 3).is_none());
    assert!(m.get_block(2, 0, 1, 1).is_none());
    assert!(m.get_block(0, 2, 1, 1).is_none());
}

#[test]
fn full_block_written_back_by_rows_reproduces_matrix() {
    let m = sample();
    let block = m.get_block(0, 0, m.rows() as isize - 1, m.cols() as isize - 1).unwrap();
    let mut target = Matrix::zeros(m.rows(), m.cols()).unwrap();
    for i in 0..block.rows() as isize {
        target.set_row(i, &block.get_row(i).unwrap());
    }
    assert_eq!(target, m);
}

#[test]
fn set_block_writes_region() {
    let mut m = Matrix::zeros(3, 3).unwrap();
    let block = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    m.set_block(1, 1, &block);
    assert_matrix_eq(
        &m,
        &[&[0.0, 0.0, 0.0], &[0.0, 1.0, 2.0], &[0.0, 3.0, 4.0]],
    );
}

#[test]
fn set_block_ignores_regions_that_do_not_fit() {
    let mut m = Matrix::zeros(3, 3).unwrap();
    let block = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    m.set_block(2, 0, &block);
    m.set_block(0, 2, &block);
    m.set_block(-1, 0, &block);
    assert_eq!(m, Matrix::zeros(3, 3).unwrap());
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_concrete_example() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let sum = m.add(&m).unwrap();
    assert_matrix_eq(&sum, &[&[2.0, 4.0], &[6.0, 8.0]]);
}

#[test]
fn additive_identity() {
    let m = sample();
    let zero = Matrix::zeros(m.rows(), m.cols()).unwrap();
    assert_eq!(m.add(&zero).unwrap(), m);
}

#[test]
fn sub_is_add_of_negation() {
    let a = sample();
    let b = Matrix::identity(3, 3).unwrap();
    let diff = a.sub(&b).unwrap();
    assert_matrix_eq(
        &diff,
        &[&[0.0, 2.0, 3.0], &[4.0, 4.0, 6.0], &[7.0, 8.0, 8.0]],
    );
    assert_eq!(a.sub(&a).unwrap(), Matrix::zeros(3, 3).unwrap());
}

#[test]
fn mismatch_yields_none() {
    init_logger();
    let a = Matrix::zeros(2, 2).unwrap();
    let b = Matrix::zeros(3, 2).unwrap();
    assert!(a.add(&b).is_none());
    assert!(a.sub(&b).is_none());
    assert!(a.cwise_prod(&b).is_none());
}

#[test]
fn scale_by_one_and_zero() {
    let m = sample();
    assert_eq!(m.scale(1.0).unwrap(), m);
    assert_eq!(
        m.scale(0.0).unwrap(),
        Matrix::zeros(m.rows(), m.cols()).unwrap()
    );
}

#[test]
fn scale_rejects_non_finite_factor() {
    let m = sample();
    assert!(m.scale(f64::NAN).is_none());
    assert!(m.scale(f64::INFINITY).is_none());
    assert!(m.scale(f64::NEG_INFINITY).is_none());
}

#[test]
fn cwise_prod_multiplies_entries() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[[2.0, 0.5], [-1.0, 0.0]]).unwrap();
    assert_matrix_eq(&a.cwise_prod(&b).unwrap(), &[&[2.0, 1.0], &[-3.0, 0.0]]);
}

#[test]
fn apply_func_maps_and_keeps_operand() {
    let m = sample();
    let squared = m.apply_func(|x| x * x);
    assert_matrix_eq(
        &squared,
        &[&[1.0, 4.0, 9.0], &[16.0, 25.0, 36.0], &[49.0, 64.0, 81.0]],
    );
    assert_eq!(m, sample());
}

#[test]
fn stored_nan_is_kept() {
    let mut m = Matrix::zeros(1, 2).unwrap();
    m.set(0, 1, f64::NAN);
    let doubled = m.scale(2.0).unwrap();
    assert_eq!(doubled.get(0, 0), 0.0);
    assert!(doubled.get(0, 1).is_nan());
}
