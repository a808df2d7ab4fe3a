//! Dense vector and matrix types.
//!
//! `Vector` (1D) and `Matrix` (2D, row-major) own their entries exclusively and
//! share the elementwise loops in `kernel`.
mod kernel;
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, MatrixRecord};
pub use vector::Vector;
