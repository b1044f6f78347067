//! Integer functions: gcd/lcm, factorial, primality, counting.
//!
//! The expression-facing wrappers (`gcd`, `lcm`, `ncr`, `npr`) all take
//! exactly two arguments; the plain functions underneath are also called
//! directly by the calculator engine.

use crate::coercion::coerce_num;
use crate::function::Function;
use crate::function_registry::FunctionRegistry;
use reckoner_common::{CalcError, Value};

/// Greatest common divisor via the Euclidean algorithm.
///
/// Inputs are floored, then their magnitude is taken, matching the behavior
/// of the text macro this backs.
pub fn gcd(a: f64, b: f64) -> f64 {
    let mut x = a.floor().abs() as u64;
    let mut y = b.floor().abs() as u64;
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x as f64
}

/// Least common multiple as `|a*b| / gcd(a, b)`.
///
/// `lcm(0, 0)` divides by a zero gcd and yields a non-finite value, which the
/// formatting layer reports as the error sentinel.
pub fn lcm(a: f64, b: f64) -> f64 {
    (a * b).abs() / gcd(a, b)
}

/// Iterative factorial. Defined on `[0, 170]`; `171!` overflows `f64`.
pub fn factorial(n: i64) -> Result<f64, CalcError> {
    if n < 0 {
        return Err(CalcError::new_domain().with_message("factorial of a negative integer"));
    }
    if n > 170 {
        return Err(CalcError::new_overflow().with_message("factorial beyond 170!"));
    }
    let mut result = 1.0_f64;
    for i in 2..=(n as u64) {
        result *= i as f64;
    }
    Ok(result)
}

/// Trial division up to the square root, skipping even candidates after 2.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3_i64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// `C(n, r)` as an iterative product of `(n-i)/(i+1)`, avoiding the
/// intermediate factorials. Out-of-range `r` returns 0; `r == 0` and
/// `r == n` return exactly 1.
pub fn combination(n: i64, r: i64) -> f64 {
    if r > n || r < 0 {
        return 0.0;
    }
    if r == 0 || r == n {
        return 1.0;
    }
    let mut result = 1.0_f64;
    for i in 0..r {
        result *= (n - i) as f64 / (i + 1) as f64;
    }
    result.round()
}

/// `P(n, r)` as an iterative product of `n-i`. Out-of-range `r` returns 0;
/// `r == 0` returns exactly 1.
pub fn permutation(n: i64, r: i64) -> f64 {
    if r > n || r < 0 {
        return 0.0;
    }
    if r == 0 {
        return 1.0;
    }
    let mut result = 1.0_f64;
    for i in 0..r {
        result *= (n - i) as f64;
    }
    result
}

/* ───────────────── expression-facing wrappers ───────────────── */

fn two_nums(args: &[Value]) -> Result<(f64, f64), CalcError> {
    Ok((coerce_num(&args[0])?, coerce_num(&args[1])?))
}

#[derive(Debug)]
pub struct GcdFn;
impl Function for GcdFn {
    fn name(&self) -> &'static str {
        "gcd"
    }
    fn min_args(&self) -> usize {
        2
    }
    fn eval(&self, args: &[Value]) -> Result<Value, CalcError> {
        let (a, b) = two_nums(args)?;
        Ok(Value::Number(gcd(a, b)))
    }
}

#[derive(Debug)]
pub struct LcmFn;
impl Function for LcmFn {
    fn name(&self) -> &'static str {
        "lcm"
    }
    fn min_args(&self) -> usize {
        2
    }
    fn eval(&self, args: &[Value]) -> Result<Value, CalcError> {
        let (a, b) = two_nums(args)?;
        Ok(Value::Number(lcm(a, b)))
    }
}

#[derive(Debug)]
pub struct NcrFn;
impl Function for NcrFn {
    fn name(&self) -> &'static str {
        "ncr"
    }
    fn min_args(&self) -> usize {
        2
    }
    fn eval(&self, args: &[Value]) -> Result<Value, CalcError> {
        let (n, r) = two_nums(args)?;
        Ok(Value::Number(combination(n.trunc() as i64, r.trunc() as i64)))
    }
}

#[derive(Debug)]
pub struct NprFn;
impl Function for NprFn {
    fn name(&self) -> &'static str {
        "npr"
    }
    fn min_args(&self) -> usize {
        2
    }
    fn eval(&self, args: &[Value]) -> Result<Value, CalcError> {
        let (n, r) = two_nums(args)?;
        Ok(Value::Number(permutation(n.trunc() as i64, r.trunc() as i64)))
    }
}

pub fn register_builtins(reg: &mut FunctionRegistry) {
    use std::sync::Arc;
    reg.register(Arc::new(GcdFn));
    reg.register(Arc::new(LcmFn));
    reg.register(Arc::new(NcrFn));
    reg.register(Arc::new(NprFn));
}
