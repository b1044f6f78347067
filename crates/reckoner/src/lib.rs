//! Meta crate that re-exports the primary Reckoner building blocks with
//! sensible defaults. Downstream users can depend on this crate and opt into
//! specific layers via feature flags while keeping access to the underlying
//! crates when deeper integration is required.

pub use reckoner_common as common;

pub use reckoner_parse as parse;

#[cfg(feature = "eval")]
pub use reckoner_eval as eval;

pub use reckoner_common::{CalcError, CalcErrorExtra, CalcErrorKind, Value};

#[cfg(feature = "eval")]
pub use reckoner_eval::{
    AngleMode, Base, CalcMode, Calculator, EvalConfig, FunctionRegistry, HISTORY_LIMIT, StatKey,
    TrigFn, evaluate_expression,
};
