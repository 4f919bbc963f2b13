//! LU factorization and the solvers built on it.
//!
//! [`Matrix::lu_decompose`] is plain Doolittle elimination without row
//! exchanges: it fails on the first (near-)zero pivot even when the matrix
//! is non-singular. Callers that need stability on such inputs use
//! [`Matrix::plu_decompose`], which applies partial pivoting and records
//! the row permutation explicitly.
//!
//! Both factorizations pack L and U into one matrix: entries below the
//! diagonal are the L multipliers (unit diagonal implied), entries on and
//! above it are U.

use log::{debug, trace};
use zmath_scalar::is_zero;

use crate::dense_matrix::{dot, Matrix};
use crate::error::{LinalgError, LinalgResult};
use crate::vector::Vector;

/// Unpivoted LU factorization `A = L U`.
#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition {
    lu: Matrix,
}

impl LuDecomposition {
    /// Returns the packed L/U matrix.
    #[must_use]
    pub fn factors(&self) -> &Matrix {
        &self.lu
    }

    /// Order of the factorized matrix.
    #[must_use]
    pub fn order(&self) -> usize {
        self.lu.num_rows()
    }

    /// Unit lower-triangular factor L.
    #[must_use]
    pub fn lower(&self) -> Matrix {
        unpack_lower(&self.lu)
    }

    /// Upper-triangular factor U.
    #[must_use]
    pub fn upper(&self) -> Matrix {
        unpack_upper(&self.lu)
    }

    /// Forward substitution: solves `L y = b`.
    pub fn solve_lower(&self, b: &Vector) -> LinalgResult<Vector> {
        check_rhs(self.order(), b)?;
        Ok(Vector::col(forward_substitute(&self.lu, b.as_slice())))
    }

    /// Backward substitution: solves `U x = y`.
    ///
    /// Fails with [`LinalgError::SingularMatrix`] if a diagonal entry of U
    /// is (near-)zero.
    pub fn solve_upper(&self, y: &Vector) -> LinalgResult<Vector> {
        check_rhs(self.order(), y)?;
        back_substitute(&self.lu, y.as_slice()).map(Vector::col)
    }

    /// Solves `A x = b` with the stored factors.
    pub fn solve(&self, b: &Vector) -> LinalgResult<Vector> {
        let y = self.solve_lower(b)?;
        self.solve_upper(&y)
    }

    /// Product of the diagonal of U.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        diagonal_product(&self.lu)
    }

    /// Inverse of the factorized matrix, one substitution pair per column.
    pub fn inverse(&self) -> LinalgResult<Matrix> {
        invert_with(self.order(), |e| self.solve(e))
    }
}

/// LU factorization with partial pivoting: `P A = L U`.
#[derive(Clone, Debug, PartialEq)]
pub struct PluDecomposition {
    lu: Matrix,
    /// `perm[i]` is the row of `A` that ended up in row `i`.
    perm: Vec<usize>,
    /// True if an odd number of row swaps was applied.
    odd: bool,
}

impl PluDecomposition {
    /// Returns the packed L/U matrix of `P A`.
    #[must_use]
    pub fn factors(&self) -> &Matrix {
        &self.lu
    }

    /// Returns the row permutation: row `i` of `P A` is row `perm[i]` of `A`.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// Order of the factorized matrix.
    #[must_use]
    pub fn order(&self) -> usize {
        self.lu.num_rows()
    }

    /// Unit lower-triangular factor L.
    #[must_use]
    pub fn lower(&self) -> Matrix {
        unpack_lower(&self.lu)
    }

    /// Upper-triangular factor U.
    #[must_use]
    pub fn upper(&self) -> Matrix {
        unpack_upper(&self.lu)
    }

    /// Solves `A x = b`.
    pub fn solve(&self, b: &Vector) -> LinalgResult<Vector> {
        check_rhs(self.order(), b)?;
        let permuted: Vec<f64> = self.perm.iter().map(|&p| b[p]).collect();
        let y = forward_substitute(&self.lu, &permuted);
        back_substitute(&self.lu, &y).map(Vector::col)
    }

    /// Determinant of `A`, sign-corrected for the row swaps.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let det = diagonal_product(&self.lu);
        if self.odd {
            -det
        } else {
            det
        }
    }

    /// Inverse of `A`.
    pub fn inverse(&self) -> LinalgResult<Matrix> {
        invert_with(self.order(), |e| self.solve(e))
    }
}

impl Matrix {
    /// Doolittle LU factorization without pivoting.
    ///
    /// For each column `j` the sub-diagonal entries are scaled by
    /// `1 / U[j][j]` and the trailing submatrix is eliminated. Fails with
    /// [`LinalgError::NotSquare`] for rectangular input and with
    /// [`LinalgError::SingularMatrix`] when a pivot used as a divisor is
    /// (near-)zero. No rows are exchanged, so a non-singular matrix with a
    /// zero leading minor is rejected as well.
    pub fn lu_decompose(&self) -> LinalgResult<LuDecomposition> {
        let n = self.require_square()?;
        debug!("LU factorization of {n}x{n} matrix");

        let mut lu = self.clone();
        for j in 0..n.saturating_sub(1) {
            let pivot = lu[(j, j)];
            if is_zero(pivot) {
                return Err(LinalgError::SingularMatrix { pivot: j });
            }
            trace!("eliminating column {j}, pivot {pivot}");
            eliminate_column(&mut lu, j, n);
        }

        Ok(LuDecomposition { lu })
    }

    /// LU factorization with partial pivoting.
    ///
    /// At each step the row with the largest absolute entry in the current
    /// column is swapped into the pivot position. Fails with
    /// [`LinalgError::SingularMatrix`] only if the whole remaining column is
    /// (near-)zero.
    pub fn plu_decompose(&self) -> LinalgResult<PluDecomposition> {
        let n = self.require_square()?;
        debug!("PLU factorization of {n}x{n} matrix");

        let mut lu = self.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut odd = false;

        for j in 0..n.saturating_sub(1) {
            let (p, max) = (j..n)
                .map(|i| (i, lu[(i, j)].abs()))
                .fold((j, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
            if is_zero(max) {
                return Err(LinalgError::SingularMatrix { pivot: j });
            }
            if p != j {
                debug!("swapping rows {j} and {p}");
                lu.swap_rows(j, p);
                perm.swap(j, p);
                odd = !odd;
            }
            trace!("eliminating column {j}, pivot {}", lu[(j, j)]);
            eliminate_column(&mut lu, j, n);
        }

        Ok(PluDecomposition { lu, perm, odd })
    }

    /// Solves `A x = b` via [`Matrix::lu_decompose`] and two triangular solves.
    pub fn solve(&self, b: &Vector) -> LinalgResult<Vector> {
        self.lu_decompose()?.solve(b)
    }

    /// Determinant from the diagonal of the LU factors.
    ///
    /// When the unpivoted factorization meets a zero pivot the determinant
    /// is taken from the pivoted one instead; a matrix that is singular
    /// under pivoting as well has determinant `0.0`.
    pub fn determinant(&self) -> LinalgResult<f64> {
        match self.lu_decompose() {
            Ok(lu) => Ok(lu.determinant()),
            Err(LinalgError::SingularMatrix { pivot }) => {
                debug!("zero pivot at {pivot}, retrying determinant with partial pivoting");
                match self.plu_decompose() {
                    Ok(plu) => Ok(plu.determinant()),
                    Err(LinalgError::SingularMatrix { .. }) => Ok(0.0),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Inverse computed from a single LU factorization.
    pub fn inverse(&self) -> LinalgResult<Self> {
        self.lu_decompose()?.inverse()
    }
}

/// Scales column `j` below the diagonal by the pivot and updates the
/// trailing submatrix.
fn eliminate_column(lu: &mut Matrix, j: usize, n: usize) {
    let cj = 1.0 / lu[(j, j)];
    for i in j + 1..n {
        lu[(i, j)] *= cj;
    }
    for i in j + 1..n {
        let lij = lu[(i, j)];
        for k in j + 1..n {
            let ujk = lu[(j, k)];
            lu[(i, k)] -= lij * ujk;
        }
    }
}

fn check_rhs(n: usize, b: &Vector) -> LinalgResult<()> {
    if b.len() == n {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            expected: n,
            found: b.len(),
        })
    }
}

fn forward_substitute(lu: &Matrix, b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let mut x = vec![0.0; n];
    for i in 0..n {
        x[i] = b[i] - dot(&lu.row(i)[..i], &x[..i]);
    }
    x
}

fn back_substitute(lu: &Matrix, y: &[f64]) -> LinalgResult<Vec<f64>> {
    let n = y.len();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = lu.row(i);
        let diag = row[i];
        if is_zero(diag) {
            return Err(LinalgError::SingularMatrix { pivot: i });
        }
        x[i] = (y[i] - dot(&row[i + 1..], &x[i + 1..])) / diag;
    }
    Ok(x)
}

fn diagonal_product(lu: &Matrix) -> f64 {
    (0..lu.num_rows()).map(|i| lu[(i, i)]).product()
}

fn invert_with(
    n: usize,
    solve: impl Fn(&Vector) -> LinalgResult<Vector>,
) -> LinalgResult<Matrix> {
    let mut inv = Matrix::zeros(n, n)?;
    for j in 0..n {
        let xj = solve(&Vector::basis(n, j)?)?;
        for (i, &v) in xj.as_slice().iter().enumerate() {
            inv[(i, j)] = v;
        }
    }
    Ok(inv)
}

fn unpack_lower(lu: &Matrix) -> Matrix {
    let n = lu.num_rows();
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n..i * n + i].copy_from_slice(&lu.row(i)[..i]);
        data[i * n + i] = 1.0;
    }
    Matrix::from_parts(data, n, n)
}

fn unpack_upper(lu: &Matrix) -> Matrix {
    let n = lu.num_rows();
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i..(i + 1) * n].copy_from_slice(&lu.row(i)[i..]);
    }
    Matrix::from_parts(data, n, n)
}
