//! Gamma function via the Lanczos approximation (g = 7, 9 coefficients).

use reckoner_common::CalcError;
use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Γ(x) for x > 0. Values in (0, 1) go through the recurrence
/// Γ(x) = Γ(x+1) / x; everything else is evaluated directly.
pub fn gamma(x: f64) -> Result<f64, CalcError> {
    if x.is_nan() || x <= 0.0 {
        return Err(CalcError::new_domain().with_message("gamma is defined for x > 0 only"));
    }
    if x < 1.0 {
        Ok(lanczos(x + 1.0) / x)
    } else {
        Ok(lanczos(x))
    }
}

/// Lanczos series; the reflection formula handles arguments below 0.5.
fn lanczos(x: f64) -> f64 {
    if x < 0.5 {
        return PI / ((PI * x).sin() * lanczos(1.0 - x));
    }

    let x = x - 1.0;
    let mut a = LANCZOS_COEFFS[0];
    for (i, c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        a += c / (x + i as f64);
    }

    let t = x + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9 * b.abs().max(1.0), "{a} !~= {b}");
    }

    #[test]
    fn gamma_matches_factorial_on_integers() {
        assert_close(gamma(1.0).unwrap(), 1.0);
        assert_close(gamma(2.0).unwrap(), 1.0);
        assert_close(gamma(5.0).unwrap(), 24.0);
        assert_close(gamma(11.0).unwrap(), 3628800.0);
    }

    #[test]
    fn gamma_half_is_sqrt_pi() {
        assert_close(gamma(0.5).unwrap(), PI.sqrt());
        // Γ(1.5) = √π / 2
        assert_close(gamma(1.5).unwrap(), PI.sqrt() / 2.0);
    }

    #[test]
    fn gamma_recurrence_holds_below_one() {
        // Γ(x) = Γ(x+1) / x
        let x = 0.3;
        assert_close(gamma(x).unwrap(), gamma(x + 1.0).unwrap() / x);
    }

    #[test]
    fn gamma_rejects_non_positive_arguments() {
        assert!(gamma(0.0).is_err());
        assert!(gamma(-1.0).is_err());
        assert!(gamma(-0.5).is_err());
        assert!(gamma(f64::NAN).is_err());
    }
}
