//! Errors reported by the polynomial engine and the FFT kernel.

use thiserror::Error;

/// Result alias for fallible polynomial operations.
pub type PolyResult<T> = Result<T, PolyError>;

/// Errors that can occur in polynomial and transform operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// The operation needs a leading coefficient, but the polynomial is zero.
    #[error("operation is undefined for the zero polynomial")]
    ZeroPolynomial,

    /// A radix-2 transform was given a sequence whose length is not a power of two.
    #[error("transform length {len} is not a power of two")]
    NonPowerOfTwoLength {
        /// Length of the rejected sequence.
        len: usize,
    },
}
