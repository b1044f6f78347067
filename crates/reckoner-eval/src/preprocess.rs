//! Macro expansion applied to the raw expression text before tokenizing.
//!
//! The rewrite set mirrors what the calculator's input surface produces:
//! constant glyphs and the postfix `nC(r)` / `nP(r)` notation. `gcd(...)` and
//! `lcm(...)` need no rewriting; the parser produces function nodes for them
//! and the interpreter dispatches through the registry.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest decimal expansions that round-trip to `std::f64::consts`.
const PI_LITERAL: &str = "3.141592653589793";
const E_LITERAL: &str = "2.718281828459045";

static PI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"π").unwrap());

/// A bare `e` not followed by a digit is the constant; a digit-preceded
/// `e<digit>` sequence is scientific notation and must survive untouched.
static E_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"e([^0-9]|$)").unwrap());

static COMBINATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)C\((\d+)\)").unwrap());
static PERMUTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)P\((\d+)\)").unwrap());

/// Expand constants and notation macros into plain function-call syntax.
///
/// Constants expand parenthesized so that digit-adjacent uses (`2π`, `2e-1`)
/// stay invalid downstream instead of silently gluing into a longer number.
pub fn preprocess(expr: &str) -> String {
    let expr = PI_RE.replace_all(expr, format!("({PI_LITERAL})").as_str());
    let expr = E_RE.replace_all(&expr, format!("({E_LITERAL})${{1}}").as_str());
    let expr = COMBINATION_RE.replace_all(&expr, "ncr(${1},${2})");
    let expr = PERMUTATION_RE.replace_all(&expr, "npr(${1},${2})");
    expr.into_owned()
}
