//! Property-based tests for polynomial arithmetic and the FFT.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;
    use zmath_scalar::{is_zero, Tolerance};

    use crate::algorithms::fft::{fft, ifft};
    use crate::polynomial::{Degree, Polynomial};

    // Strategy for generating small real coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        -10.0f64..10.0
    }

    // Strategy for generating small polynomials (degree 0-7)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=8).prop_map(Polynomial::new)
    }

    // Strategy for generating polynomials of degree at least one
    fn nonconstant_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must have degree >= 1", |p| {
            p.degree() >= Degree::Finite(1)
        })
    }

    // Reference quadratic-time product, highest degree first
    fn schoolbook_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                out[i + j] += x * y;
            }
        }
        out
    }

    // Evaluates the polynomial with every term made non-negative
    fn abs_evaluate(p: &Polynomial, x: f64) -> f64 {
        p.coefficients().iter().fold(0.0, |acc, &c| acc * x.abs() + c.abs())
    }

    fn loose() -> Tolerance {
        Tolerance::new(1e-7)
    }

    proptest! {
        #[test]
        fn mul_evaluates_pointwise(a in small_poly(), b in small_poly(), x in -2.0f64..2.0) {
            // (p*q)(x) = p(x) q(x)
            let lhs = (&a * &b).evaluate(x);
            let rhs = a.evaluate(x) * b.evaluate(x);
            let bound = abs_evaluate(&a, x) * abs_evaluate(&b, x);
            prop_assert!((lhs - rhs).abs() <= 1e-9 * bound.max(1.0), "{} vs {}", lhs, rhs);
        }

        #[test]
        fn mul_matches_schoolbook(a in small_poly(), b in small_poly()) {
            let expected = Polynomial::new(schoolbook_mul(a.coefficients(), b.coefficients()));
            prop_assert!((&a * &b).approx_eq(&expected, &loose()));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert!((&a * &b).approx_eq(&(&b * &a), &loose()));
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn sub_self_is_zero(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn add_identity(a in small_poly()) {
            prop_assert_eq!(&a + &Polynomial::zero(), a.clone());
            prop_assert_eq!(&Polynomial::zero() + &a, a);
        }

        #[test]
        fn derivative_lowers_degree(p in nonconstant_poly()) {
            let Degree::Finite(d) = p.degree() else {
                unreachable!("filtered to non-constant polynomials");
            };
            prop_assert_eq!(p.derivative().degree(), Degree::Finite(d - 1));
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            let lhs = (&a + &b).derivative();
            let rhs = &a.derivative() + &b.derivative();
            prop_assert!(lhs.approx_eq(&rhs, &loose()));
        }

        #[test]
        fn pow_zero_is_one(a in small_poly()) {
            prop_assert_eq!(a.pow(0), Polynomial::one());
        }

        #[test]
        fn pow_matches_repeated_mul(a in small_poly(), n in 1u32..4) {
            let mut expected = Polynomial::one();
            for _ in 0..n {
                expected = &expected * &a;
            }
            let x = 0.75;
            let got = a.pow(n).evaluate(x);
            let want = expected.evaluate(x);
            prop_assert!((got - want).abs() <= 1e-6 * want.abs().max(1.0));
        }

        #[test]
        fn monic_has_unit_leading_coefficient(p in small_poly()) {
            prop_assume!(!p.is_zero());
            let m = p.monic().unwrap();
            prop_assert!((m.leading_coefficient() - 1.0).abs() < 1e-12);
            prop_assert_eq!(m.degree(), p.degree());
        }

        #[test]
        fn normalized_leading_coefficient(coeffs in proptest::collection::vec(small_coeff(), 0..8)) {
            let p = Polynomial::new(coeffs);
            prop_assert!(!p.coefficients().is_empty());
            prop_assert!(p.is_zero() || !is_zero(p.leading_coefficient()));
        }

        #[test]
        fn ifft_inverts_fft(
            values in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=6),
            log_len in 0u32..7,
        ) {
            let n = 1usize << log_len;
            let mut data: Vec<Complex64> = values
                .iter()
                .cycle()
                .take(n)
                .map(|&(re, im)| Complex64::new(re, im))
                .collect();
            let original = data.clone();

            fft(&mut data).unwrap();
            ifft(&mut data).unwrap();

            for (x, y) in data.iter().zip(&original) {
                prop_assert!((x - y).norm() < 1e-9);
            }
        }
    }
}
