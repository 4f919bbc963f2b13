//! Parallel matrix operations.
//!
//! Row-parallel versions of the dense products using rayon. Each output
//! row is computed by exactly the same arithmetic as the sequential
//! version, so results are bit-for-bit identical.

use rayon::prelude::*;

use crate::dense_matrix::{dot, Matrix};
use crate::error::{LinalgError, LinalgResult};
use crate::vector::Vector;

/// Configuration for the parallel products.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of output rows to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Parallel matrix-matrix multiply: C = A * B.
///
/// Falls back to [`Matrix::matmul`] below the configured threshold.
pub fn parallel_matmul(a: &Matrix, b: &Matrix, config: &ParallelConfig) -> LinalgResult<Matrix> {
    if a.num_rows() < config.parallel_threshold {
        return a.matmul(b);
    }
    a.check_inner_dims(b)?;

    let bt = b.transpose();
    let bt = &bt;
    let data: Vec<f64> = (0..a.num_rows())
        .into_par_iter()
        .flat_map_iter(|i| {
            let row = a.row(i);
            (0..bt.num_rows()).map(move |j| sequential_sum(row, bt.row(j)))
        })
        .collect();

    Ok(Matrix::from_parts(data, a.num_rows(), b.num_cols()))
}

/// Parallel matrix-vector multiply: y = A * x.
pub fn parallel_mul_vector(a: &Matrix, x: &Vector, config: &ParallelConfig) -> LinalgResult<Vector> {
    if a.num_rows() < config.parallel_threshold {
        return a.mul_vector(x);
    }
    if x.len() != a.num_cols() {
        return Err(LinalgError::DimensionMismatch {
            expected: a.num_cols(),
            found: x.len(),
        });
    }

    Ok(Vector::col(
        (0..a.num_rows())
            .into_par_iter()
            .map(|i| dot(a.row(i), x.as_slice()))
            .collect(),
    ))
}

/// Left-to-right accumulation, matching the loop order of [`Matrix::matmul`].
fn sequential_sum(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b) {
        sum += x * y;
    }
    sum
}

impl Matrix {
    /// Matrix-matrix multiply, row-parallel above `config.parallel_threshold` rows.
    pub fn matmul_parallel(&self, other: &Self, config: &ParallelConfig) -> LinalgResult<Self> {
        parallel_matmul(self, other, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(rows: usize, cols: usize, offset: f64) -> Matrix {
        Matrix::from_rows(
            (0..rows)
                .map(|i| {
                    (0..cols)
                        .map(|j| ((i * cols + j) as f64 * 0.37 + offset).sin())
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_parallel_matmul_matches_sequential() {
        let a = ramp(7, 5, 0.0);
        let b = ramp(5, 6, 1.0);

        let config = ParallelConfig {
            parallel_threshold: 1, // Force parallel path for testing
        };

        let seq = a.matmul(&b).unwrap();
        let par = a.matmul_parallel(&b, &config).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_parallel_matmul_dimension_mismatch() {
        let a = ramp(3, 2, 0.0);
        let config = ParallelConfig {
            parallel_threshold: 1,
        };
        assert!(matches!(
            parallel_matmul(&a, &a, &config),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_parallel_mul_vector() {
        let a = ramp(9, 4, 0.5);
        let x = Vector::col(vec![1.0, -2.0, 0.5, 3.0]);
        let config = ParallelConfig {
            parallel_threshold: 1,
        };
        assert_eq!(
            parallel_mul_vector(&a, &x, &config).unwrap(),
            a.mul_vector(&x).unwrap()
        );
        assert!(parallel_mul_vector(&a, &Vector::col(vec![1.0]), &config).is_err());
    }

    #[test]
    fn test_default_threshold_uses_sequential_path() {
        let a = ramp(2, 2, 0.0);
        let product = parallel_matmul(&a, &a, &ParallelConfig::default()).unwrap();
        assert_eq!(product, a.matmul(&a).unwrap());
    }
}
