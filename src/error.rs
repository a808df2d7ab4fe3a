use std::error::Error;
use std::fmt;

/// Failures reported by constructors and checked accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A requested dimension was zero.
    InvalidDimensions { rows: usize, cols: usize },
    /// The input sequence had no elements.
    EmptyInput,
    /// The first row of a nested input had no elements.
    EmptyRow,
    /// Row `row` of a nested input has `found` entries instead of `expected`.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer of length `len` cannot be viewed as `rows x cols`.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    NegativeIndex { row: isize, col: isize },
    IndexOutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid dimensions ({}, {})", rows, cols)
            }
            MathError::EmptyInput => write!(f, "input must contain at least one entry"),
            MathError::EmptyRow => write!(f, "first row of input is empty"),
            MathError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {}",
                row, found, expected
            ),
            MathError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MathError::NegativeIndex { row, col } => {
                write!(f, "indices ({}, {}) are negative", row, col)
            }
            MathError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "indices ({}, {}) are out of bound for shape ({}, {})",
                row, col, rows, cols
            ),
        }
    }
}

impl Error for MathError {}
