//! Dense real univariate polynomials.
//!
//! Coefficients are stored highest degree first: `[2.0, -4.0, 0.5]` is
//! `2x^2 - 4x + 0.5`. Leading coefficients within tolerance of zero are
//! stripped on construction, so the only polynomial whose first entry is
//! zero is the canonical zero polynomial `[0.0]`.

use log::trace;
use zmath_scalar::{is_zero, Tolerance};

use crate::algorithms::fft::fft_convolve;
use crate::error::{PolyError, PolyResult};

/// Degree of a polynomial.
///
/// The zero polynomial has degree negative infinity, which orders below
/// every finite degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Degree {
    /// Degree of the zero polynomial.
    NegInfinity,
    /// Degree of a non-zero polynomial.
    Finite(usize),
}

impl Degree {
    /// Returns the finite degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn finite(self) -> Option<usize> {
        match self {
            Degree::NegInfinity => None,
            Degree::Finite(d) => Some(d),
        }
    }
}

/// A dense univariate polynomial over `f64`.
///
/// Coefficients are stored in descending degree order. Multiplication
/// goes through the FFT.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// Coefficients in descending degree order. Never empty.
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients, highest degree first.
    ///
    /// Leading zeros are removed. Empty or all-zero input gives the zero
    /// polynomial.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut p = Self { coeffs };
        p.normalize();
        p
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self { coeffs: vec![1.0] }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[0] = c;
        Self::new(coeffs)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && is_zero(self.coeffs[0])
    }

    /// Returns the degree.
    #[must_use]
    pub fn degree(&self) -> Degree {
        if self.is_zero() {
            Degree::NegInfinity
        } else {
            Degree::Finite(self.coeffs.len() - 1)
        }
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients, highest degree first.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    /// Returns the leading coefficient (0.0 for the zero polynomial).
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[0]
    }

    /// Returns the coefficient of `x^degree` (0.0 above the degree).
    #[must_use]
    pub fn coefficient(&self, degree: usize) -> f64 {
        let len = self.coeffs.len();
        if degree < len {
            self.coeffs[len - 1 - degree]
        } else {
            0.0
        }
    }

    /// Sets the coefficient of `x^degree`.
    ///
    /// Only existing terms can be changed: if `degree` exceeds the current
    /// degree (always the case for the zero polynomial) nothing happens and
    /// `false` is returned. Values within tolerance of zero are stored as
    /// exact zeros and leading zeros are stripped afterwards.
    pub fn set_coefficient(&mut self, degree: usize, value: f64) -> bool {
        let Degree::Finite(d) = self.degree() else {
            return false;
        };
        if degree > d {
            return false;
        }

        self.coeffs[d - degree] = if is_zero(value) { 0.0 } else { value };
        self.normalize();
        true
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        match self.degree() {
            Degree::Finite(d) if d >= 1 => Self::new(
                self.coeffs[..d]
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| c * (d - i) as f64)
                    .collect(),
            ),
            _ => Self::zero(),
        }
    }

    /// Divides through by the leading coefficient.
    pub fn monic(&self) -> PolyResult<Self> {
        if self.is_zero() {
            return Err(PolyError::ZeroPolynomial);
        }
        let lc = self.leading_coefficient();
        Ok(Self::new(self.coeffs.iter().map(|&c| c / lc).collect()))
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self::new(self.coeffs.iter().map(|&x| x * c).collect())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        Self::new(combine(&self.coeffs, &other.coeffs, 1.0))
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        Self::new(combine(&self.coeffs, &other.coeffs, -1.0))
    }

    /// Negates the polynomial.
    #[must_use]
    pub fn neg_ref(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }

    /// Multiplies two polynomials via FFT convolution.
    ///
    /// Leading coefficients that round to zero are stripped. Every other
    /// coefficient carries the transform's rounding, so `p * 1` equals `p`
    /// only up to [`Polynomial::approx_eq`].
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let a: Vec<f64> = self.coeffs.iter().rev().copied().collect();
        let b: Vec<f64> = other.coeffs.iter().rev().copied().collect();

        let coeffs = fft_convolve(&a, &b).into_iter().rev().collect();

        Self::new(coeffs)
    }

    /// Raises to the n-th power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        trace!("polynomial power: degree {:?}, exponent {n}", self.degree());

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_ref(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_ref(&base);
            }
        }

        result
    }

    /// Coefficient-wise comparison under an explicit tolerance.
    ///
    /// Polynomials of different length are compared as if the shorter one
    /// were padded with leading zeros.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|d| tol.approx_eq(self.coefficient(d), other.coefficient(d)))
    }

    fn normalize(&mut self) {
        let first = self
            .coeffs
            .iter()
            .position(|&c| !is_zero(c))
            .unwrap_or(self.coeffs.len());
        self.coeffs.drain(..first);

        if self.coeffs.is_empty() {
            self.coeffs.push(0.0);
        }
    }
}

/// Coefficient-wise `a + sign * b`, aligned at the constant term.
fn combine(a: &[f64], b: &[f64], sign: f64) -> Vec<f64> {
    let mut out = vec![0.0; a.len().max(b.len())];
    for (o, &x) in out.iter_mut().rev().zip(a.iter().rev()) {
        *o += x;
    }
    for (o, &y) in out.iter_mut().rev().zip(b.iter().rev()) {
        *o += sign * y;
    }
    out
}
