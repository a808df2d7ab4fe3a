use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::MathError;
use crate::math::kernel;
use crate::math::vector::Vector;
use crate::render;

/// A dense `rows x cols` matrix of `f64` stored in one row-major buffer.
///
/// Entry `(i, j)` lives at offset `i * cols + j`. Both dimensions are at least
/// one and the buffer always holds exactly `rows * cols` entries. Every copy
/// and every extraction (`get_row`, `get_col`, `get_block`) is a deep copy.
///
/// Accessors come in two tiers:
///
/// * fail-soft: `get` returns `NaN`, `set`/`set_row`/`set_col`/`set_block`
///   skip the write, and operations producing a new value return `None`;
/// * checked: `get_checked` and `set_checked` return a [`MathError`] that tells
///   a negative index apart from one past the end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRecord", into = "MatrixRecord")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// A `rows x cols` matrix of zeros.
    ///
    /// Zero dimensions and shapes whose entry count overflows `usize` are rejected.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MathError> {
        let len = match rows.checked_mul(cols) {
            Some(len) if rows >= 1 && cols >= 1 => len,
            _ => {
                log::debug!("Matrix::zeros: invalid dimensions ({}, {})", rows, cols);
                return Err(MathError::InvalidDimensions { rows, cols });
            }
        };
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Zeros with ones on the main diagonal, also for non-square shapes.
    pub fn identity(rows: usize, cols: usize) -> Result<Self, MathError> {
        let mut m = Self::zeros(rows, cols)?;
        for i in 0..rows.min(cols) {
            let offset = m.offset(i, i);
            m.data[offset] = 1.0;
        }
        Ok(m)
    }

    /// Copy nested rows into row-major storage.
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MathError>
    where
        R: AsRef<[f64]>,
    {
        let first = match rows.first() {
            Some(first) => first.as_ref(),
            None => {
                log::debug!("Matrix::from_rows: empty input");
                return Err(MathError::EmptyInput);
            }
        };
        let cols = first.len();
        if cols == 0 {
            log::debug!("Matrix::from_rows: first row is empty");
            return Err(MathError::EmptyRow);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                log::debug!(
                    "Matrix::from_rows: row {} has {} entries, expected {}",
                    idx,
                    row.len(),
                    cols
                );
                return Err(MathError::RaggedRows {
                    row: idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Adopt a flat row-major buffer of exactly `rows * cols` entries.
    ///
    /// A shape whose entry count overflows `usize` never matches any buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MathError> {
        let (rows, cols) = shape;
        if rows < 1 || cols < 1 {
            return Err(MathError::InvalidDimensions { rows, cols });
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            log::debug!(
                "Matrix::from_shape_vec: shape ({}, {}) does not fit {} entries",
                rows,
                cols,
                data.len()
            );
            return Err(MathError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Borrow row `row` of the buffer. Panics if `row >= rows`.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Entry `(i, j)`, or `NaN` for an invalid index.
    pub fn get(&self, i: isize, j: isize) -> f64 {
        self.get_checked(i, j).unwrap_or_else(|e| {
            log::trace!("Matrix::get: {}", e);
            f64::NAN
        })
    }

    /// Set entry `(i, j)` to `value`; invalid indices are ignored.
    pub fn set(&mut self, i: isize, j: isize, value: f64) {
        if let Err(e) = self.set_checked(i, j, value) {
            log::trace!("Matrix::set: {}", e);
        }
    }

    pub fn get_checked(&self, i: isize, j: isize) -> Result<f64, MathError> {
        let offset = kernel::checked_offset(i, j, self.rows, self.cols)?;
        Ok(self.data[offset])
    }

    pub fn set_checked(&mut self, i: isize, j: isize, value: f64) -> Result<(), MathError> {
        let offset = kernel::checked_offset(i, j, self.rows, self.cols)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Copy of row `i`, `None` if `i` is out of range.
    pub fn get_row(&self, i: isize) -> Option<Vector> {
        let i = match kernel::position(i, self.rows) {
            Some(i) => i,
            None => {
                log::trace!("Matrix::get_row: row {} out of range for {} rows", i, self.rows);
                return None;
            }
        };
        Vector::from_slice(self.row_slice(i))
    }

    /// Overwrite row `i` with `values`.
    ///
    /// Nothing is written if `i` is out of range or `values.len() != cols`.
    pub fn set_row(&mut self, i: isize, values: &Vector) {
        match kernel::position(i, self.rows) {
            Some(i) if values.len() == self.cols => {
                let start = self.offset(i, 0);
                self.data[start..start + self.cols].copy_from_slice(values.as_slice());
            }
            _ => log::trace!(
                "Matrix::set_row: cannot write {} entries into row {} of {:?}",
                values.len(),
                i,
                self.shape()
            ),
        }
    }

    /// Copy of column `j`, `None` if `j` is out of range.
    pub fn get_col(&self, j: isize) -> Option<Vector> {
        let j = match kernel::position(j, self.cols) {
            Some(j) => j,
            None => {
                log::trace!("Matrix::get_col: column {} out of range for {} cols", j, self.cols);
                return None;
            }
        };
        let values = self
            .data
            .iter()
            .skip(j)
            .step_by(self.cols)
            .copied()
            .collect::<Vec<_>>();
        Vector::from_slice(&values)
    }

    /// Overwrite column `j` with `values`.
    ///
    /// Nothing is written if `j` is out of range or `values.len() != rows`.
    pub fn set_col(&mut self, j: isize, values: &Vector) {
        match kernel::position(j, self.cols) {
            Some(j) if values.len() == self.rows => {
                let cols = self.cols;
                for (entry, &v) in self
                    .data
                    .iter_mut()
                    .skip(j)
                    .step_by(cols)
                    .zip(values.iter())
                {
                    *entry = v;
                }
            }
            _ => log::trace!(
                "Matrix::set_col: cannot write {} entries into column {} of {:?}",
                values.len(),
                j,
                self.shape()
            ),
        }
    }

    /// Copy of the block with inclusive corners `(urow, ucol)` (upper left) and
    /// `(lrow, lcol)` (lower right).
    ///
    /// ```text
    ///  . . . . . . .
    ///  . x-------- .      x = (urow, ucol)
    ///  . | . . . | .
    ///  . --------y .      y = (lrow, lcol)
    ///  . . . . . . .
    /// ```
    ///
    /// `None` if a corner lies outside the matrix, `urow > lrow` or `ucol > lcol`.
    pub fn get_block(&self, urow: isize, ucol: isize, lrow: isize, lcol: isize) -> Option<Matrix> {
        let rows = kernel::inclusive_range(urow, lrow, self.rows);
        let cols = kernel::inclusive_range(ucol, lcol, self.cols);
        let ((r0, r1), (c0, c1)) = match (rows, cols) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => {
                log::trace!(
                    "Matrix::get_block: invalid corners ({}, {}) - ({}, {}) for {:?}",
                    urow,
                    ucol,
                    lrow,
                    lcol,
                    self.shape()
                );
                return None;
            }
        };

        let mut data = Vec::with_capacity((r1 - r0) * (c1 - c0));
        for i in r0..r1 {
            data.extend_from_slice(&self.row_slice(i)[c0..c1]);
        }
        Some(Matrix {
            data,
            rows: r1 - r0,
            cols: c1 - c0,
        })
    }

    /// Overwrite the region whose upper-left corner is `(urow, ucol)` with `block`.
    ///
    /// Nothing is written unless the whole block fits inside the matrix.
    pub fn set_block(&mut self, urow: isize, ucol: isize, block: &Matrix) {
        let lrow = urow.saturating_add(block.rows as isize - 1);
        let lcol = ucol.saturating_add(block.cols as isize - 1);
        let rows = kernel::inclusive_range(urow, lrow, self.rows);
        let cols = kernel::inclusive_range(ucol, lcol, self.cols);
        let (r0, c0) = match (rows, cols) {
            (Some((r0, _)), Some((c0, _))) => (r0, c0),
            _ => {
                log::trace!(
                    "Matrix::set_block: {:?} block does not fit at ({}, {}) in {:?}",
                    block.shape(),
                    urow,
                    ucol,
                    self.shape()
                );
                return;
            }
        };

        for i in 0..block.rows {
            let start = self.offset(r0 + i, c0);
            self.data[start..start + block.cols].copy_from_slice(block.row_slice(i));
        }
    }

    pub fn add(&self, other: &Matrix) -> Option<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// `self - other`, computed as `self + (-1 * other)`.
    pub fn sub(&self, other: &Matrix) -> Option<Matrix> {
        self.add(&other.scale(-1.0)?)
    }

    /// Multiply every entry by `factor`; `None` if `factor` is NaN or infinite.
    pub fn scale(&self, factor: f64) -> Option<Matrix> {
        if !kernel::is_valid_factor(factor) {
            log::trace!("Matrix::scale: rejected factor {}", factor);
            return None;
        }
        Some(self.apply_func(|x| x * factor))
    }

    /// Componentwise product.
    pub fn cwise_prod(&self, other: &Matrix) -> Option<Matrix> {
        self.zip_with(other, "cwise_prod", |a, b| a * b)
    }

    pub fn apply_func<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: kernel::map(&self.data, f),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Human-readable dump using `config`.
    pub fn render(&self, config: &RenderConfig) -> String {
        render::render_grid(
            self.rows,
            self.cols,
            |i, j| self.get(i as isize, j as isize),
            config,
        )
    }

    fn zip_with<F>(&self, other: &Matrix, op: &str, f: F) -> Option<Matrix>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            log::trace!(
                "Matrix::{}: dimension mismatch {:?} vs {:?}",
                op,
                self.shape(),
                other.shape()
            );
            return None;
        }
        let data = kernel::zip_with(&self.data, &other.data, f)?;
        Some(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// A vector becomes an `n x 1` column matrix.
impl From<Vector> for Matrix {
    fn from(value: Vector) -> Self {
        let rows = value.len();
        Matrix {
            data: value.into(),
            rows,
            cols: 1,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

/// Serialized form of a [`Matrix`]; validated on the way back in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixRecord {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixRecord> for Matrix {
    type Error = MathError;

    fn try_from(raw: MatrixRecord) -> Result<Self, Self::Error> {
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}

impl From<Matrix> for MatrixRecord {
    fn from(m: Matrix) -> Self {
        MatrixRecord {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}
