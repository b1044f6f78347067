//! The core `Function` trait implemented by every expression function.

use reckoner_common::{CalcError, Value};

/// Object-safe trait for expression functions.
///
/// Implementations are registered in a [`crate::FunctionRegistry`] and looked
/// up by (case-insensitive) name during interpretation. Every calculator
/// function is a pure scalar function: arguments in, one value out.
pub trait Function: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn min_args(&self) -> usize {
        0
    }

    /// When false, `min_args` is also the exact argument count.
    fn variadic(&self) -> bool {
        false
    }

    fn eval(&self, args: &[Value]) -> Result<Value, CalcError>;
}
