//! Property-based tests for LU-based solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use zmath_scalar::Tolerance;

    use crate::dense_matrix::Matrix;
    use crate::vector::Vector;

    // Strictly diagonally dominant matrices never meet a zero pivot in
    // unpivoted elimination.
    fn dominant_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=6).prop_flat_map(|n| {
            proptest::collection::vec(-1.0f64..1.0, n * n).prop_map(move |vals| {
                let rows = (0..n)
                    .map(|i| {
                        (0..n)
                            .map(|j| {
                                let v = vals[i * n + j];
                                if i == j {
                                    n as f64 + v.abs() + 0.5
                                } else {
                                    v
                                }
                            })
                            .collect()
                    })
                    .collect();
                Matrix::from_rows(rows).unwrap()
            })
        })
    }

    fn square_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=5).prop_flat_map(|n| {
            proptest::collection::vec(-10.0f64..10.0, n * n).prop_map(move |vals| {
                Matrix::from_rows(vals.chunks(n).map(<[f64]>::to_vec).collect()).unwrap()
            })
        })
    }

    fn system() -> impl Strategy<Value = (Matrix, Vector)> {
        dominant_matrix().prop_flat_map(|a| {
            let n = a.num_rows();
            proptest::collection::vec(-100.0f64..100.0, n)
                .prop_map(move |b| (a.clone(), Vector::col(b)))
        })
    }

    proptest! {
        #[test]
        fn solve_satisfies_system((a, b) in system()) {
            let x = a.solve(&b).unwrap();
            let ax = a.mul_vector(&x).unwrap();
            prop_assert!(
                Tolerance::new(1e-9).approx_eq_slice(ax.as_slice(), b.as_slice()),
                "A x = {:?}, b = {:?}", ax.as_slice(), b.as_slice()
            );
        }

        #[test]
        fn inverse_is_two_sided(a in dominant_matrix()) {
            let inv = a.inverse().unwrap();
            let id = Matrix::identity(a.num_rows()).unwrap();
            let tol = Tolerance::new(1e-10);
            prop_assert!(a.matmul(&inv).unwrap().approx_eq(&id, &tol));
            prop_assert!(inv.matmul(&a).unwrap().approx_eq(&id, &tol));
        }

        #[test]
        fn determinant_invariant_under_transpose(a in square_matrix()) {
            let d = a.determinant().unwrap();
            let dt = a.transpose().determinant().unwrap();
            // Hadamard's bound on |det| sets the scale of the rounding error.
            let hadamard: f64 = (0..a.num_rows())
                .map(|i| a.row(i).iter().map(|v| v * v).sum::<f64>().sqrt())
                .product();
            prop_assert!(
                (d - dt).abs() <= 1e-8 * hadamard.max(1.0),
                "det = {}, det(T) = {}", d, dt
            );
        }

        #[test]
        fn lu_and_plu_agree_on_determinant(a in dominant_matrix()) {
            let lu = a.lu_decompose().unwrap().determinant();
            let plu = a.plu_decompose().unwrap().determinant();
            prop_assert!((lu - plu).abs() <= 1e-9 * lu.abs().max(1.0));
        }

        #[test]
        fn lower_times_upper_reconstructs(a in dominant_matrix()) {
            let lu = a.lu_decompose().unwrap();
            let product = lu.lower().matmul(&lu.upper()).unwrap();
            prop_assert!(product.approx_eq(&a, &Tolerance::new(1e-10)));
        }

        #[test]
        fn transpose_is_involution(a in square_matrix()) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn symmetric_part_is_symmetric(a in square_matrix()) {
            let s = a.checked_add(&a.transpose()).unwrap();
            prop_assert!(s.is_symmetric());
        }
    }
}
