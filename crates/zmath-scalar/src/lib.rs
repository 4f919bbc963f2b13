//! # zmath-scalar
//!
//! Scalar helpers shared by the zmath crates.
//!
//! This crate provides:
//! - Tolerance-based zero and equality predicates for `f64`
//! - A small [`Tolerance`] configuration value for callers that need
//!   something other than the default epsilon
//! - Numeric constants and degree/radian conversions
//!
//! Floating-point drift from LU elimination and FFT round trips is masked by
//! routing every comparison against zero through [`is_zero`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constants;
pub mod tolerance;

#[cfg(test)]
mod proptests;

pub use constants::{deg2rad, rad2deg, E, INF, NEG_INF, PI};
pub use tolerance::{approx_eq, is_zero, Tolerance, EPSILON};
