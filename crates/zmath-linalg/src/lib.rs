//! # zmath-linalg
//!
//! Dense real linear algebra for zmath.
//!
//! This crate provides:
//! - Dense `f64` matrices and oriented vectors
//! - Doolittle LU factorization with forward/backward substitution
//! - Linear solves, determinants and inverses built on one factorization
//! - Partially pivoted LU for inputs with zero leading minors
//! - Row-parallel products via rayon
//!
//! ## Limitations
//!
//! [`Matrix::lu_decompose`] never exchanges rows. It rejects any matrix
//! whose elimination meets a (near-)zero pivot, singular or not. Use
//! [`Matrix::plu_decompose`] when that matters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;
pub mod lu;
pub mod parallel;
pub mod vector;

pub use dense_matrix::Matrix;
pub use error::{LinalgError, LinalgResult};
pub use lu::{LuDecomposition, PluDecomposition};
pub use parallel::{parallel_matmul, parallel_mul_vector, ParallelConfig};
pub use vector::{MulResult, Orientation, Vector};

#[cfg(test)]
mod proptests;
