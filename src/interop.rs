//! Conversions between the crate types and `ndarray`.
//!
//! Converting into `ndarray` always succeeds. Converting back fails for arrays
//! with an empty axis, since `Vector` and `Matrix` hold at least one entry.

use ndarray::{Array1, Array2};

use crate::error::MathError;
use crate::math::{Matrix, Vector};

impl From<&Vector> for Array1<f64> {
    fn from(value: &Vector) -> Self {
        Array1::from(value.to_vec())
    }
}

impl TryFrom<&Array1<f64>> for Vector {
    type Error = MathError;

    fn try_from(value: &Array1<f64>) -> Result<Self, Self::Error> {
        Vector::try_from(value.to_vec())
    }
}

impl From<&Matrix> for Array2<f64> {
    fn from(value: &Matrix) -> Self {
        Array2::from_shape_fn(value.shape(), |(i, j)| value[(i, j)])
    }
}

impl TryFrom<&Array2<f64>> for Matrix {
    type Error = MathError;

    /// Reads entries in logical row-major order, whatever the array's memory layout.
    fn try_from(value: &Array2<f64>) -> Result<Self, Self::Error> {
        Matrix::from_shape_vec(value.dim(), value.iter().copied().collect())
    }
}
