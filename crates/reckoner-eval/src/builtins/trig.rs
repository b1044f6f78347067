//! The trigonometric family: sin/cos/tan across four variants selected by
//! the inverse and hyperbolic flags, with the angle-unit conversion each
//! variant needs.
//!
//! Conversion placement follows the calculator's contract: plain and
//! hyperbolic variants convert the *input* from the configured unit to
//! radians; inverse converts the *output* back to the configured unit;
//! inverse-hyperbolic converts neither.

use crate::config::{AngleMode, EvalConfig};
use reckoner_common::CalcError;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn base_name(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }
}

fn to_radians(x: f64, mode: AngleMode) -> f64 {
    match mode {
        AngleMode::Deg => x * PI / 180.0,
        AngleMode::Rad => x,
        AngleMode::Grad => x * PI / 200.0,
    }
}

fn from_radians(x: f64, mode: AngleMode) -> f64 {
    match mode {
        AngleMode::Deg => x * 180.0 / PI,
        AngleMode::Rad => x,
        AngleMode::Grad => x * 200.0 / PI,
    }
}

/// Evaluate the variant selected by `config.inverse` × `config.hyperbolic`.
///
/// Out-of-domain inputs (asin/acos outside [−1, 1], acosh below 1, …) come
/// back from the host math calls as NaN and surface as a domain error.
pub fn eval_trig(func: TrigFn, x: f64, config: &EvalConfig) -> Result<f64, CalcError> {
    let result = match (config.inverse, config.hyperbolic) {
        (true, true) => match func {
            TrigFn::Sin => x.asinh(),
            TrigFn::Cos => x.acosh(),
            TrigFn::Tan => x.atanh(),
        },
        (true, false) => {
            let r = match func {
                TrigFn::Sin => x.asin(),
                TrigFn::Cos => x.acos(),
                TrigFn::Tan => x.atan(),
            };
            from_radians(r, config.angle)
        }
        (false, true) => {
            let a = to_radians(x, config.angle);
            match func {
                TrigFn::Sin => a.sinh(),
                TrigFn::Cos => a.cosh(),
                TrigFn::Tan => a.tanh(),
            }
        }
        (false, false) => {
            let a = to_radians(x, config.angle);
            match func {
                TrigFn::Sin => a.sin(),
                TrigFn::Cos => a.cos(),
                TrigFn::Tan => a.tan(),
            }
        }
    };

    if result.is_nan() {
        return Err(CalcError::new_domain()
            .with_message(format!("{}({x}) is out of domain", display_name(func, config))));
    }
    Ok(result)
}

/// The name shown in history entries: `asin`, `sinh`, or plain `sin`.
pub fn display_name(func: TrigFn, config: &EvalConfig) -> String {
    if config.inverse {
        format!("a{}", func.base_name())
    } else if config.hyperbolic {
        format!("{}h", func.base_name())
    } else {
        func.base_name().to_string()
    }
}
