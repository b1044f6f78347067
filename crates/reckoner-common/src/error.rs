//! Calculator error representation that is both ergonomic **now**
//! *and* flexible enough to grow new, data-rich variants later.
//!
//! - **`CalcErrorKind`**  : the canonical set of failure classes
//! - **`CalcErrorExtra`** : per-kind "extension slot" (e.g. `NeedsValues`)
//! - **`CalcError`**      : one struct that glues the pieces together
//!
//! When a future error needs its own payload, just add another variant
//! to `CalcErrorExtra`; existing code does not break.

use std::{error::Error, fmt};

use crate::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All recognised failure classes.
///
/// Only two of them surface distinct text on the display (`Data` renders the
/// dataset sentinels); everything else collapses to the fixed `"Error"`
/// sentinel. The finer kinds exist for logs and tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalcErrorKind {
    /// Malformed expression text (tokenizer or parser failure).
    Syntax,
    /// A non-numeric value where a number is required.
    Value,
    /// Evaluation produced a non-finite number (division by zero et al.).
    Div,
    /// Out-of-domain argument, e.g. `factorial(-1)` or `gamma(0)`.
    Domain,
    /// Result exceeds the representable range, e.g. `factorial(171)`.
    Overflow,
    /// Dataset too small (or empty) for the requested statistic.
    Data,
    /// Unknown function name in an expression.
    Unknown,
}

impl fmt::Display for CalcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "syntax error",
            Self::Value => "invalid value",
            Self::Div => "non-finite result",
            Self::Domain => "domain error",
            Self::Overflow => "overflow",
            Self::Data => "insufficient data",
            Self::Unknown => "unknown function",
        })
    }
}

/// Kind-specific payloads ("extension slot").
///
/// Only variants that need extra data get it—rest stay at `None`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CalcErrorExtra {
    /// No additional payload (the vast majority of errors).
    #[default]
    None,

    /// `Data` – the minimum number of dataset values the statistic needs.
    NeedsValues { min: usize },
}

/// The single struct the API passes around.
///
/// It combines:
/// * **kind**    – the mandatory failure class
/// * **message** – optional human explanation
/// * **extra**   – optional, kind-specific data
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalcError {
    pub kind: CalcErrorKind,
    pub message: Option<String>,
    pub extra: CalcErrorExtra,
}

/* ───────────────────── Constructors & helpers ─────────────────────── */

impl From<CalcErrorKind> for CalcError {
    fn from(kind: CalcErrorKind) -> Self {
        Self {
            kind,
            message: None,
            extra: CalcErrorExtra::None,
        }
    }
}

impl CalcError {
    /// Basic constructor (no message, no extra).
    pub fn new(kind: CalcErrorKind) -> Self {
        kind.into()
    }

    /// Attach a human-readable explanation.
    pub fn with_message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Attach kind-specific extra data.
    pub fn with_extra(mut self, extra: CalcErrorExtra) -> Self {
        self.extra = extra;
        self
    }

    pub fn new_syntax() -> Self {
        Self::new(CalcErrorKind::Syntax)
    }
    pub fn new_value() -> Self {
        Self::new(CalcErrorKind::Value)
    }
    pub fn new_div() -> Self {
        Self::new(CalcErrorKind::Div)
    }
    pub fn new_domain() -> Self {
        Self::new(CalcErrorKind::Domain)
    }
    pub fn new_overflow() -> Self {
        Self::new(CalcErrorKind::Overflow)
    }
    pub fn new_unknown() -> Self {
        Self::new(CalcErrorKind::Unknown)
    }

    /// Empty dataset: renders as `"No Data"`.
    pub fn no_data() -> Self {
        Self::new(CalcErrorKind::Data)
    }

    /// Dataset below the statistic's minimum: renders as `"Need {min}+ Values"`.
    pub fn needs_values(min: usize) -> Self {
        Self::new(CalcErrorKind::Data).with_extra(CalcErrorExtra::NeedsValues { min })
    }

    /// The fixed string shown in place of a result on the display surface.
    ///
    /// Per the error contract there are exactly three shapes: the dataset
    /// sentinels and the catch-all `"Error"`.
    pub fn sentinel(&self) -> String {
        match (&self.kind, &self.extra) {
            (CalcErrorKind::Data, CalcErrorExtra::NeedsValues { min }) => {
                format!("Need {min}+ Values")
            }
            (CalcErrorKind::Data, _) => "No Data".to_string(),
            _ => "Error".to_string(),
        }
    }
}

/* ───────────────────────── Display / Error ────────────────────────── */

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(ref msg) = self.message {
            write!(f, ": {msg}")?;
        }

        match &self.extra {
            CalcErrorExtra::None => {}
            CalcErrorExtra::NeedsValues { min } => {
                write!(f, " (needs {min}+ values)")?;
            }
        }

        Ok(())
    }
}

impl Error for CalcError {}

impl From<CalcError> for String {
    fn from(error: CalcError) -> Self {
        format!("{error}")
    }
}

impl From<CalcError> for Value {
    fn from(error: CalcError) -> Self {
        Value::Error(error)
    }
}

impl PartialEq<str> for CalcError {
    fn eq(&self, other: &str) -> bool {
        self.sentinel() == other
    }
}

impl PartialEq<&str> for CalcError {
    fn eq(&self, other: &&str) -> bool {
        self.sentinel() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_shapes() {
        assert_eq!(CalcError::new_syntax().sentinel(), "Error");
        assert_eq!(CalcError::new_domain().sentinel(), "Error");
        assert_eq!(CalcError::no_data().sentinel(), "No Data");
        assert_eq!(CalcError::needs_values(2).sentinel(), "Need 2+ Values");
        assert_eq!(CalcError::needs_values(4).sentinel(), "Need 4+ Values");
    }

    #[test]
    fn display_carries_message() {
        let e = CalcError::new_domain().with_message("gamma is undefined for x <= 0");
        assert_eq!(e.to_string(), "domain error: gamma is undefined for x <= 0");
    }
}
