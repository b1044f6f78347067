pub mod gamma;
pub mod number_theory;
pub mod stats;
pub mod trig;

use crate::function_registry::FunctionRegistry;

/// Register every builtin expression function.
pub fn register_builtins(reg: &mut FunctionRegistry) {
    number_theory::register_builtins(reg);
}
