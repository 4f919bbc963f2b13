//! # zmath-poly
//!
//! Real univariate polynomials for zmath.
//!
//! This crate provides:
//! - Dense `f64` polynomials stored highest degree first
//! - FFT-based multiplication and square-and-multiply powers
//! - Horner evaluation, derivatives and monic normalization
//! - A recursive radix-2 complex FFT with its inverse
//!
//! ## Example
//!
//! ```
//! use zmath_poly::{Degree, Polynomial};
//!
//! // (x + 1)(x - 1) = x^2 - 1
//! let p = Polynomial::new(vec![1.0, 1.0]) * Polynomial::new(vec![1.0, -1.0]);
//! assert_eq!(p.degree(), Degree::Finite(2));
//! assert!((p.evaluate(3.0) - 8.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod error;
pub mod ops;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use algorithms::fft::{fft, ifft, PARALLEL_FFT_THRESHOLD};
pub use error::{PolyError, PolyResult};
pub use num_complex::Complex64;
pub use polynomial::{Degree, Polynomial};
