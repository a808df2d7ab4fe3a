use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::MathError;
use crate::math::kernel;
use crate::render;

/// A dense, fixed-length sequence of `f64` entries.
///
/// A `Vector` always holds at least one entry. Operations producing a new vector
/// allocate a fresh buffer; only `set`, `set_checked` and `set_sub_vec` mutate
/// in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// A vector of `size` zeros, `None` if `size` is zero.
    pub fn zeros(size: usize) -> Option<Self> {
        if size < 1 {
            log::trace!("Vector::zeros: rejected size {}", size);
            return None;
        }
        Some(Self {
            data: vec![0.0; size],
        })
    }

    /// Copy `values` into a new vector, `None` if `values` is empty.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            log::trace!("Vector::from_slice: empty input");
            return None;
        }
        Some(Self {
            data: values.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a constructed vector holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Entry `i`, or `NaN` if `i` is outside `[0, len)`.
    pub fn get(&self, i: isize) -> f64 {
        match kernel::position(i, self.len()) {
            Some(i) => self.data[i],
            None => {
                log::trace!("Vector::get: index {} out of range for length {}", i, self.len());
                f64::NAN
            }
        }
    }

    /// Set entry `i` to `value`; out-of-range indices are ignored.
    pub fn set(&mut self, i: isize, value: f64) {
        match kernel::position(i, self.len()) {
            Some(i) => self.data[i] = value,
            None => log::trace!("Vector::set: index {} out of range for length {}", i, self.len()),
        }
    }

    /// Entry `i`, reporting why the index was rejected.
    ///
    /// Errors use the `(i, 0)` position of the vector seen as a column.
    pub fn get_checked(&self, i: isize) -> Result<f64, MathError> {
        let offset = kernel::checked_offset(i, 0, self.len(), 1)?;
        Ok(self.data[offset])
    }

    pub fn set_checked(&mut self, i: isize, value: f64) -> Result<(), MathError> {
        let offset = kernel::checked_offset(i, 0, self.len(), 1)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Copy of the inclusive range `[start, end]`.
    ///
    /// `None` if `start < 0`, `end >= len` or `start > end`.
    pub fn sub_vec(&self, start: isize, end: isize) -> Option<Vector> {
        match kernel::inclusive_range(start, end, self.len()) {
            Some((s, e)) => Some(Vector {
                data: self.data[s..e].to_vec(),
            }),
            None => {
                log::trace!(
                    "Vector::sub_vec: invalid range [{}, {}] for length {}",
                    start,
                    end,
                    self.len()
                );
                None
            }
        }
    }

    /// Overwrite the inclusive range `[start, end]` with the entries of `values`.
    ///
    /// Nothing is written if the range is invalid or `values` does not have
    /// exactly `end - start + 1` entries.
    pub fn set_sub_vec(&mut self, start: isize, end: isize, values: &Vector) {
        match kernel::inclusive_range(start, end, self.len()) {
            Some((s, e)) if e - s == values.len() => {
                self.data[s..e].copy_from_slice(values.as_slice());
            }
            _ => log::trace!(
                "Vector::set_sub_vec: cannot write {} entries into [{}, {}] of length {}",
                values.len(),
                start,
                end,
                self.len()
            ),
        }
    }

    /// Entries of `self` followed by the entries of `other`.
    pub fn merge(&self, other: &Vector) -> Vector {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Vector { data }
    }

    pub fn add(&self, other: &Vector) -> Option<Vector> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Vector) -> Option<Vector> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Componentwise product.
    pub fn cwise_prod(&self, other: &Vector) -> Option<Vector> {
        self.zip_with(other, "cwise_prod", |a, b| a * b)
    }

    /// Multiply every entry by `factor`; `None` if `factor` is NaN or infinite.
    pub fn scale(&self, factor: f64) -> Option<Vector> {
        if !kernel::is_valid_factor(factor) {
            log::trace!("Vector::scale: rejected factor {}", factor);
            return None;
        }
        Some(self.apply_func(|x| x * factor))
    }

    /// Sum of componentwise products, `NaN` if the lengths differ.
    pub fn dot(&self, other: &Vector) -> f64 {
        if self.len() != other.len() {
            log::trace!(
                "Vector::dot: length mismatch {} vs {}",
                self.len(),
                other.len()
            );
            return f64::NAN;
        }
        kernel::dot(&self.data, &other.data)
    }

    pub fn apply_func<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        Vector {
            data: kernel::map(&self.data, f),
        }
    }

    /// Format the entries with `config`, e.g. `[1, 0.5, 2.25]`.
    pub fn render(&self, config: &RenderConfig) -> String {
        render::render_list(self.iter().copied(), |v| render::format_entry(v, config))
    }

    fn zip_with<F>(&self, other: &Vector, op: &str, f: F) -> Option<Vector>
    where
        F: FnMut(f64, f64) -> f64,
    {
        match kernel::zip_with(&self.data, &other.data, f) {
            Some(data) => Some(Vector { data }),
            None => {
                log::trace!(
                    "Vector::{}: length mismatch {} vs {}",
                    op,
                    self.len(),
                    other.len()
                );
                None
            }
        }
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = MathError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        if data.is_empty() {
            return Err(MathError::EmptyInput);
        }
        Ok(Vector { data })
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_list(self.iter().copied(), |v| v.to_string()))
    }
}
