//! Dense real matrix.
//!
//! Entries are stored in a single row-major buffer. Shape is fixed at
//! construction; entries stay mutable through the checked accessors
//! ([`Matrix::get`], [`Matrix::set`]) or through `(row, col)` indexing,
//! which panics on out-of-range access like slice indexing does.

use std::ops::{Index, IndexMut, Mul, MulAssign};

use zmath_scalar::{approx_eq, Tolerance};

use crate::error::{LinalgError, LinalgResult};
use crate::vector::{Orientation, Vector};

/// Dense `f64` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<f64>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a new matrix filled with zeros.
    pub fn zeros(num_rows: usize, num_cols: usize) -> LinalgResult<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        Ok(Self {
            data: vec![0.0; num_rows * num_cols],
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a 2D literal.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> LinalgResult<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(LinalgError::RaggedRows {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> LinalgResult<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the order `n` of a square matrix.
    pub(crate) fn require_square(&self) -> LinalgResult<usize> {
        if self.is_square() {
            Ok(self.num_rows)
        } else {
            Err(LinalgError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns true if the matrix is square and equal to its transpose
    /// within the default tolerance.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.num_rows;
        (0..n).all(|i| (i..n).all(|j| approx_eq(self[(i, j)], self[(j, i)])))
    }

    /// Returns the entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> LinalgResult<f64> {
        self.check_bounds(row, col)?;
        Ok(self[(row, col)])
    }

    /// Overwrites the entry at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> LinalgResult<()> {
        self.check_bounds(row, col)?;
        self[(row, col)] = value;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> LinalgResult<()> {
        if row < self.num_rows && col < self.num_cols {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfBounds {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Copies a row out as a row vector.
    pub fn row_vector(&self, row: usize) -> LinalgResult<Vector> {
        self.check_bounds(row, 0)?;
        Ok(Vector::row(self.row(row).to_vec()))
    }

    /// Copies a column out as a column vector.
    pub fn col_vector(&self, col: usize) -> LinalgResult<Vector> {
        self.check_bounds(0, col)?;
        Ok(Vector::col(
            (0..self.num_rows).map(|row| self[(row, col)]).collect(),
        ))
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// The result is a column vector of length `num_rows`.
    pub fn mul_vector(&self, x: &Vector) -> LinalgResult<Vector> {
        if x.len() != self.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: x.len(),
            });
        }
        Ok(Vector::col(
            (0..self.num_rows)
                .map(|row| dot(self.row(row), x.as_slice()))
                .collect(),
        ))
    }

    /// Matrix-matrix multiply: C = A * B.
    pub fn matmul(&self, other: &Self) -> LinalgResult<Self> {
        self.check_inner_dims(other)?;
        let mut result = Self::zeros(self.num_rows, other.num_cols)?;
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = 0.0;
                for k in 0..self.num_cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    pub(crate) fn check_inner_dims(&self, other: &Self) -> LinalgResult<()> {
        if self.num_cols == other.num_rows {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: other.num_rows,
            })
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)]);
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Element-wise sum.
    pub fn checked_add(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn checked_sub(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> LinalgResult<Self> {
        if self.num_rows != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                found: other.num_rows,
            });
        }
        if self.num_cols != other.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: other.num_cols,
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Returns true if both matrices have the same shape and all entries
    /// agree within `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && tol.approx_eq_slice(&self.data, &other.data)
    }

    /// Swaps two rows in-place.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    pub(crate) fn from_parts(data: Vec<f64>, num_rows: usize, num_cols: usize) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.num_cols, "column {col} out of range");
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.num_cols, "column {col} out of range");
        &mut self.data[row * self.num_cols + col]
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, c: f64) {
        for x in &mut self.data {
            *x *= c;
        }
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, c: f64) -> Matrix {
        self *= c;
        self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, m: Matrix) -> Matrix {
        m * self
    }
}

impl From<Vector> for Matrix {
    /// Lifts a vector into a `1 x n` or `n x 1` matrix according to its orientation.
    ///
    /// An empty vector becomes a `1 x 1` zero matrix.
    fn from(v: Vector) -> Self {
        let n = v.len().max(1);
        let orientation = v.orientation();
        let mut data = v.into_vec();
        data.resize(n, 0.0);
        match orientation {
            Orientation::Row => Self::from_parts(data, 1, n),
            Orientation::Col => Self::from_parts(data, n, 1),
        }
    }
}
