//! # zmath
//!
//! A small numerical kernel: dense linear algebra over `f64` and real
//! univariate polynomials with FFT multiplication.
//!
//! ## Features
//!
//! - **Linear systems**: Doolittle LU, forward/backward substitution,
//!   determinants and inverses from a single factorization
//! - **Partial pivoting**: explicit PLU for matrices with zero leading minors
//! - **Oriented vectors**: row·column inner products and column·row outer
//!   products, with mismatches reported as errors
//! - **Polynomials**: FFT multiplication, powers, derivatives, Horner
//!   evaluation
//! - **Tolerances**: one fixed epsilon plus explicit [`Tolerance`] values
//!
//! ## Quick Start
//!
//! ```rust
//! use zmath::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let x = a.solve(&Vector::col(vec![3.0, 5.0])).unwrap();
//! assert!((x[0] - 0.8).abs() < 1e-12);
//! assert!((x[1] - 1.4).abs() < 1e-12);
//!
//! let p = Polynomial::new(vec![1.0, 1.0]) ^ 2;
//! assert_eq!(p.degree(), Degree::Finite(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use zmath_linalg as linalg;
pub use zmath_poly as poly;
pub use zmath_scalar as scalar;

pub use zmath_scalar::Tolerance;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zmath_linalg::{
        LinalgError, LinalgResult, LuDecomposition, Matrix, MulResult, Orientation,
        ParallelConfig, PluDecomposition, Vector,
    };
    pub use zmath_poly::{Degree, PolyError, PolyResult, Polynomial};
    pub use zmath_scalar::{approx_eq, is_zero, Tolerance, EPSILON};
}
