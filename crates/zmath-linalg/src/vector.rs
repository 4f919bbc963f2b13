//! Oriented real vectors.
//!
//! A [`Vector`] carries an [`Orientation`] because the meaning of a
//! vector-vector product depends on it: a row times a column is an inner
//! product, a column times a row is an outer product, and every other
//! pairing is rejected.

use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::dense_matrix::Matrix;
use crate::error::{LinalgError, LinalgResult};

/// Whether a vector is laid out as a row or as a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A `1 x n` vector.
    Row,
    /// An `n x 1` vector.
    #[default]
    Col,
}

impl Orientation {
    /// Returns the opposite orientation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Row => Orientation::Col,
            Orientation::Col => Orientation::Row,
        }
    }
}

/// Result of multiplying two vectors.
#[derive(Clone, Debug, PartialEq)]
pub enum MulResult {
    /// Inner product of a row and a column vector.
    Scalar(f64),
    /// Outer product of a column and a row vector.
    Matrix(Matrix),
}

impl MulResult {
    /// Returns the matrix if this is an outer product.
    #[must_use]
    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            MulResult::Scalar(_) => None,
            MulResult::Matrix(m) => Some(m),
        }
    }
}

/// Owned real vector with an orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
    orientation: Orientation,
}

impl Vector {
    /// Creates a zero-filled vector of length `n`.
    #[must_use]
    pub fn zeros(n: usize, orientation: Orientation) -> Self {
        Self {
            data: vec![0.0; n],
            orientation,
        }
    }

    /// Creates a vector from explicit values.
    #[must_use]
    pub fn from_vec(data: Vec<f64>, orientation: Orientation) -> Self {
        Self { data, orientation }
    }

    /// Creates a column vector from explicit values.
    #[must_use]
    pub fn col(data: Vec<f64>) -> Self {
        Self::from_vec(data, Orientation::Col)
    }

    /// Creates a row vector from explicit values.
    #[must_use]
    pub fn row(data: Vec<f64>) -> Self {
        Self::from_vec(data, Orientation::Row)
    }

    /// Creates the `i`-th standard basis column vector of length `n`.
    ///
    /// Fails with [`LinalgError::IndexOutOfBounds`] if `i >= n`.
    pub fn basis(n: usize, i: usize) -> LinalgResult<Self> {
        let mut v = Self::zeros(n, Orientation::Col);
        v.set(i, 1.0)?;
        Ok(v)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the entries.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the vector and returns its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Checked element read.
    pub fn get(&self, i: usize) -> LinalgResult<f64> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| self.out_of_bounds(i))
    }

    /// Checked element write.
    pub fn set(&mut self, i: usize, value: f64) -> LinalgResult<()> {
        if i >= self.len() {
            return Err(self.out_of_bounds(i));
        }
        self.data[i] = value;
        Ok(())
    }

    /// Returns a copy with the orientation flipped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.clone(),
            orientation: self.orientation.flipped(),
        }
    }

    /// Element-wise sum. The result keeps `self`'s orientation.
    pub fn checked_add(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference. The result keeps `self`'s orientation.
    pub fn checked_sub(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Vector product selected by orientation.
    ///
    /// Row times column gives [`MulResult::Scalar`], column times row gives
    /// [`MulResult::Matrix`].
    pub fn product(&self, rhs: &Self) -> LinalgResult<MulResult> {
        match (self.orientation, rhs.orientation) {
            (Orientation::Row, Orientation::Col) => {
                if self.len() != rhs.len() {
                    return Err(LinalgError::DimensionMismatch {
                        expected: self.len(),
                        found: rhs.len(),
                    });
                }
                let dot = self.data.iter().zip(&rhs.data).map(|(a, b)| a * b).sum();
                Ok(MulResult::Scalar(dot))
            }
            (Orientation::Col, Orientation::Row) => {
                let mut m = Matrix::zeros(self.len(), rhs.len())?;
                for (i, &a) in self.data.iter().enumerate() {
                    for (j, &b) in rhs.data.iter().enumerate() {
                        m[(i, j)] = a * b;
                    }
                }
                Ok(MulResult::Matrix(m))
            }
            (lhs, rhs) => Err(LinalgError::OrientationMismatch { lhs, rhs }),
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> LinalgResult<Self> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            orientation: self.orientation,
        })
    }

    fn out_of_bounds(&self, i: usize) -> LinalgError {
        match self.orientation {
            Orientation::Row => LinalgError::IndexOutOfBounds {
                row: 0,
                col: i,
                rows: 1,
                cols: self.len(),
            },
            Orientation::Col => LinalgError::IndexOutOfBounds {
                row: i,
                col: 0,
                rows: self.len(),
                cols: 1,
            },
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.data[i]
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, c: f64) {
        for x in &mut self.data {
            *x *= c;
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, c: f64) -> Vector {
        self *= c;
        self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}
