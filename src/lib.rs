//! redeem-linalg: dense vectors and matrices with value semantics.
//!
//! This crate provides a row-major `Matrix` and a `Vector` of `f64` with
//! elementwise arithmetic, functional mapping, and sub-range, row, column and
//! block access. Accessors come in a fail-soft flavor (`NaN`, no-op or `None`)
//! and a checked flavor returning `MathError`.
//!
//! The design favors small, testable modules; the only non-core surfaces are
//! serde support, `ndarray` conversions and a configurable text rendering.
pub mod config;
pub mod error;
pub mod interop;
pub mod math;
pub mod render;

pub use config::{Notation, RenderConfig};
pub use error::MathError;
pub use math::{Matrix, Vector};
