//! Result formatting.
//!
//! Numbers leave the evaluator as raw `f64`; everything the display shows
//! goes through here. Thresholds: magnitudes above `1e15` or (nonzero) below
//! `1e-10` render in exponential notation with 10 fractional digits, all
//! other results are rounded to 12 decimal places to absorb float noise.

use crate::config::Base;
use reckoner_common::CalcError;

const EXP_UPPER: f64 = 1e15;
const EXP_LOWER: f64 = 1e-10;

/// Format a finite result for the display; non-finite input is the error case.
pub fn format_number(x: f64) -> Result<String, CalcError> {
    if x.is_nan() || x.is_infinite() {
        return Err(CalcError::new_div().with_message("result is not finite"));
    }

    if x.abs() > EXP_UPPER || (x != 0.0 && x.abs() < EXP_LOWER) {
        return Ok(to_exponential(x, 10));
    }

    // Round to avoid floating point errors
    let rounded = (x * 1e12).round() / 1e12;
    if rounded == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{rounded}"))
}

/// Exponential notation with an explicit exponent sign (`1.2300000000e+16`).
fn to_exponential(x: f64, digits: usize) -> String {
    let s = format!("{x:.digits$e}");
    match s.find('e') {
        Some(i) if !s[i + 1..].starts_with('-') => {
            format!("{}e+{}", &s[..i], &s[i + 1..])
        }
        _ => s,
    }
}

/// Floor a numeric result and render it in the given base (hex uppercase).
pub fn format_in_base(x: f64, base: Base) -> Result<String, CalcError> {
    if x.is_nan() || x.is_infinite() {
        return Err(CalcError::new_div().with_message("result is not finite"));
    }
    let n = x.floor();
    if n < i64::MIN as f64 || n > i64::MAX as f64 {
        return Err(CalcError::new_overflow().with_message("result out of integer range"));
    }
    Ok(render_radix(n as i64, base))
}

/// Render a signed integer in the given base, sign first.
pub fn render_radix(i: i64, base: Base) -> String {
    let mag = i.unsigned_abs();
    let digits = match base {
        Base::Dec => format!("{mag}"),
        Base::Hex => format!("{mag:X}"),
        Base::Oct => format!("{mag:o}"),
        Base::Bin => format!("{mag:b}"),
    };
    if i < 0 { format!("-{digits}") } else { digits }
}

/// Parse display text as an integer in the given base.
pub fn parse_in_base(s: &str, base: Base) -> Result<i64, CalcError> {
    i64::from_str_radix(s.trim(), base.radix()).map_err(|_| {
        CalcError::new_value().with_message(format!("'{s}' is not a base-{} integer", base.radix()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_results_are_rounded_to_12_places() {
        // 0.1 + 0.2 noise collapses back to 0.3
        assert_eq!(format_number(0.1 + 0.2).unwrap(), "0.3");
        assert_eq!(format_number(42.0).unwrap(), "42");
        assert_eq!(format_number(-2.5).unwrap(), "-2.5");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0).unwrap(), "0");
    }

    #[test]
    fn large_results_use_exponential() {
        assert_eq!(format_number(1.23e16).unwrap(), "1.2300000000e+16");
        assert_eq!(format_number(-4e20).unwrap(), "-4.0000000000e+20");
        // The threshold itself stays decimal
        assert_eq!(format_number(1e15).unwrap(), "1000000000000000");
    }

    #[test]
    fn tiny_results_use_exponential() {
        assert_eq!(format_number(5e-11).unwrap(), "5.0000000000e-11");
        assert_eq!(format_number(0.0).unwrap(), "0");
        // The threshold itself stays decimal
        assert_eq!(format_number(1e-10).unwrap(), "0.0000000001");
    }

    #[test]
    fn non_finite_is_an_error() {
        assert!(format_number(f64::NAN).is_err());
        assert!(format_number(f64::INFINITY).is_err());
        assert!(format_number(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn base_rendering_floors_and_uppercases() {
        assert_eq!(format_in_base(255.9, Base::Hex).unwrap(), "FF");
        assert_eq!(format_in_base(255.0, Base::Oct).unwrap(), "377");
        assert_eq!(format_in_base(5.0, Base::Bin).unwrap(), "101");
        assert_eq!(format_in_base(255.0, Base::Dec).unwrap(), "255");
        assert_eq!(format_in_base(-10.0, Base::Hex).unwrap(), "-A");
    }

    #[test]
    fn base_parse_roundtrip() {
        for i in [0i64, 1, 7, 8, 255, 256, 65535, -42] {
            for base in [Base::Dec, Base::Hex, Base::Oct, Base::Bin] {
                let rendered = render_radix(i, base);
                assert_eq!(parse_in_base(&rendered, base).unwrap(), i);
            }
        }
    }

    #[test]
    fn format_reparse_roundtrip_within_tolerance() {
        for x in [0.3, 1234.5678, -0.000123456, 987654321.123456] {
            let s = format_number(x).unwrap();
            let back: f64 = s.parse().unwrap();
            assert!((back - x).abs() < 1e-12, "{x} -> {s} -> {back}");
        }
    }
}
