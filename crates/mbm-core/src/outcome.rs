//! Result of evaluating one operation.

use core::fmt;

use crate::Value;

/// Which axiom family failed to cover an operand pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UndefinedReason {
    Addition,
    Multiplication,
    Division,
}

impl UndefinedReason {
    pub fn message(self) -> &'static str {
        match self {
            UndefinedReason::Addition => "not covered by addition axioms",
            UndefinedReason::Multiplication => "not covered by multiplication axioms",
            UndefinedReason::Division => "not covered by division axioms",
        }
    }
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Every operation is total: it yields a value or one of two explicit
/// non-value markers. Neither marker is an error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "outcome", content = "detail", rename_all = "snake_case")
)]
pub enum Outcome {
    Value(Value),
    /// No axiom covers the operand pair.
    Undefined(UndefinedReason),
    /// Ordinary real division by the real number 0.
    DivisionByRealZero,
}

impl Outcome {
    pub fn value(self) -> Option<Value> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_value(self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => fmt::Display::fmt(v, f),
            Outcome::Undefined(reason) => write!(f, "Undefined ({reason})"),
            Outcome::DivisionByRealZero => {
                f.write_str("Classically Undefined (division by real 0)")
            }
        }
    }
}
