//! Property tests for the number-theory kernel and the formatting layer.

use proptest::prelude::*;
use reckoner_eval::builtins::number_theory::{combination, gcd, lcm, permutation};
use reckoner_eval::format::{format_number, parse_in_base, render_radix};
use reckoner_eval::Base;

proptest! {
    #[test]
    fn gcd_commutes(a in 0u32..100_000, b in 0u32..100_000) {
        prop_assert_eq!(gcd(a as f64, b as f64), gcd(b as f64, a as f64));
    }

    #[test]
    fn gcd_with_zero_is_identity(a in 1u32..1_000_000) {
        prop_assert_eq!(gcd(a as f64, 0.0), a as f64);
    }

    #[test]
    fn gcd_divides_both(a in 1u32..100_000, b in 1u32..100_000) {
        let g = gcd(a as f64, b as f64);
        prop_assert!(g >= 1.0);
        prop_assert_eq!(a as f64 % g, 0.0);
        prop_assert_eq!(b as f64 % g, 0.0);
    }

    #[test]
    fn lcm_is_a_common_multiple(a in 1u32..2_000, b in 1u32..2_000) {
        let m = lcm(a as f64, b as f64);
        prop_assert_eq!(m % a as f64, 0.0);
        prop_assert_eq!(m % b as f64, 0.0);
    }

    #[test]
    fn pascal_identity_holds(n in 1i64..40, r in 1i64..40) {
        prop_assume!(r <= n);
        // C(n, r) = C(n-1, r-1) + C(n-1, r)
        prop_assert_eq!(
            combination(n, r),
            combination(n - 1, r - 1) + combination(n - 1, r)
        );
    }

    #[test]
    fn permutation_majorizes_combination(n in 0i64..60, r in 0i64..60) {
        prop_assert!(permutation(n, r) >= combination(n, r) || r > n);
    }

    #[test]
    fn format_reparse_roundtrips(x in -1e12f64..1e12) {
        // inside the plain-decimal window, format → parse recovers the value
        // up to the 12-decimal rounding the formatter applies
        let s = format_number(x).unwrap();
        let back: f64 = s.parse().unwrap();
        prop_assert!((back - x).abs() <= 5e-13 * x.abs().max(1.0), "{} -> {} -> {}", x, s, back);
    }

    #[test]
    fn radix_roundtrips(i in i64::MIN / 2..i64::MAX / 2) {
        for base in [Base::Dec, Base::Hex, Base::Oct, Base::Bin] {
            let rendered = render_radix(i, base);
            prop_assert_eq!(parse_in_base(&rendered, base).unwrap(), i);
        }
    }
}
