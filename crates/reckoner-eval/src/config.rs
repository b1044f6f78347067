//! Calculation configuration.
//!
//! Every mode the calculator exposes is modelled as an explicit, immutable
//! value passed into the functions that need it. The engine owns one
//! `EvalConfig` and flips it through its toggle methods; the library layer
//! never reads ambient state.

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Angle unit for the trigonometric family.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
    Grad,
}

impl AngleMode {
    /// The next mode in the deg → rad → grad cycle.
    pub fn cycle(self) -> Self {
        match self {
            AngleMode::Deg => AngleMode::Rad,
            AngleMode::Rad => AngleMode::Grad,
            AngleMode::Grad => AngleMode::Deg,
        }
    }
}

impl Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AngleMode::Deg => "DEG",
            AngleMode::Rad => "RAD",
            AngleMode::Grad => "GRAD",
        })
    }
}

/// Integer base for programming mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    #[default]
    Dec,
    Hex,
    Oct,
    Bin,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Dec => 10,
            Base::Hex => 16,
            Base::Oct => 8,
            Base::Bin => 2,
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Base::Dec => "DEC",
            Base::Hex => "HEX",
            Base::Oct => "OCT",
            Base::Bin => "BIN",
        })
    }
}

/// Which button panel / result pipeline is active.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalcMode {
    #[default]
    Basic,
    Scientific,
    Statistics,
    Programming,
}

/// The full calculation configuration, passed by value into the library.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    pub mode: CalcMode,
    pub angle: AngleMode,
    pub base: Base,
    pub inverse: bool,
    pub hyperbolic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_mode_cycles_through_all_three() {
        let mut mode = AngleMode::Deg;
        mode = mode.cycle();
        assert_eq!(mode, AngleMode::Rad);
        mode = mode.cycle();
        assert_eq!(mode, AngleMode::Grad);
        mode = mode.cycle();
        assert_eq!(mode, AngleMode::Deg);
    }

    #[test]
    fn default_config_is_basic_deg_dec() {
        let cfg = EvalConfig::default();
        assert_eq!(cfg.mode, CalcMode::Basic);
        assert_eq!(cfg.angle, AngleMode::Deg);
        assert_eq!(cfg.base, Base::Dec);
        assert!(!cfg.inverse);
        assert!(!cfg.hyperbolic);
    }
}
