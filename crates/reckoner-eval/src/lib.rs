pub mod builtins;
pub mod calculator;
mod coercion;
pub mod config;
pub mod format;
pub mod function;
pub mod function_registry;
pub mod interpreter;
pub mod preprocess;

pub use builtins::trig::TrigFn;
pub use calculator::{Calculator, HISTORY_LIMIT, StatKey};
pub use config::{AngleMode, Base, CalcMode, EvalConfig};
pub use function::Function;
pub use function_registry::FunctionRegistry;
pub use interpreter::{Interpreter, evaluate_expression};

// Re-export common types
pub use reckoner_common::{CalcError, CalcErrorExtra, CalcErrorKind, Value};
