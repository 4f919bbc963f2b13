//! Tolerance predicates.

/// Default absolute tolerance used by [`is_zero`] and [`approx_eq`].
pub const EPSILON: f64 = 1e-12;

/// Returns true if `d` is within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn is_zero(d: f64) -> bool {
    d.abs() < EPSILON
}

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Absolute tolerance for floating-point comparisons.
///
/// The default matches [`EPSILON`]. Tests and callers working with
/// accumulated error (large matrices, high-degree products) can widen it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Largest absolute difference still considered equal.
    pub epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    #[must_use]
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Returns true if `d` is within this tolerance of zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.epsilon
    }

    /// Returns true if `a` and `b` are within this tolerance of each other.
    #[inline]
    #[must_use]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.epsilon
    }

    /// Element-wise [`Tolerance::approx_eq`]; slices of different length are never equal.
    #[must_use]
    pub fn approx_eq_slice(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.approx_eq(x, y))
    }
}
