//! Property-based tests for the tolerance helpers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{approx_eq, deg2rad, is_zero, rad2deg, Tolerance};

    proptest! {
        #[test]
        fn approx_eq_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(approx_eq(a, b), approx_eq(b, a));
        }

        #[test]
        fn approx_eq_reflexive(a in -1e6f64..1e6) {
            prop_assert!(approx_eq(a, a));
        }

        #[test]
        fn is_zero_matches_approx_eq_zero(d in -1e-6f64..1e-6) {
            prop_assert_eq!(is_zero(d), approx_eq(d, 0.0));
        }

        #[test]
        fn wider_tolerance_accepts_more(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            // Anything equal under the default is equal under a wider tolerance.
            if approx_eq(a, b) {
                prop_assert!(Tolerance::new(1e-6).approx_eq(a, b));
            }
        }

        #[test]
        fn angle_conversion_roundtrip(deg in -720.0f64..720.0) {
            prop_assert!(Tolerance::new(1e-9).approx_eq(rad2deg(deg2rad(deg)), deg));
        }
    }
}
