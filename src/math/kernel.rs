//! Flat-buffer loops and validation helpers shared by `Vector` and `Matrix`.
//!
//! Both engines store their entries in one contiguous `Vec<f64>`, so every
//! elementwise operation reduces to one of the loops below over matching offsets.

use crate::error::MathError;

/// Apply `f` to every entry of `data`, returning a new buffer.
#[inline]
pub(crate) fn map<F>(data: &[f64], mut f: F) -> Vec<f64>
where
    F: FnMut(f64) -> f64,
{
    data.iter().map(|&v| f(v)).collect()
}

/// Combine two equally long buffers entry by entry.
///
/// Returns `None` if the lengths differ.
#[inline]
pub(crate) fn zip_with<F>(lhs: &[f64], rhs: &[f64], mut f: F) -> Option<Vec<f64>>
where
    F: FnMut(f64, f64) -> f64,
{
    if lhs.len() != rhs.len() {
        return None;
    }
    Some(lhs.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)).collect())
}

pub(crate) fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

/// A scale factor must be a finite number.
#[inline]
pub(crate) fn is_valid_factor(factor: f64) -> bool {
    factor.is_finite()
}

/// Resolve a signed position against a length, `None` if it falls outside `[0, len)`.
#[inline]
pub(crate) fn position(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        return None;
    }
    let index = index as usize;
    (index < len).then_some(index)
}

/// Validate a signed `(row, col)` pair against a shape and return the flat offset.
pub(crate) fn checked_offset(
    row: isize,
    col: isize,
    rows: usize,
    cols: usize,
) -> Result<usize, MathError> {
    if row < 0 || col < 0 {
        return Err(MathError::NegativeIndex { row, col });
    }
    match (position(row, rows), position(col, cols)) {
        (Some(i), Some(j)) => Ok(i * cols + j),
        _ => Err(MathError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        }),
    }
}

/// Resolve an inclusive `[start, end]` range against a length.
///
/// Returns the half-open `start..end + 1` bounds, or `None` if `start < 0`,
/// `end >= len` or `start > end`.
pub(crate) fn inclusive_range(start: isize, end: isize, len: usize) -> Option<(usize, usize)> {
    let start = position(start, len)?;
    let end = position(end, len)?;
    (start <= end).then_some((start, end + 1))
}
