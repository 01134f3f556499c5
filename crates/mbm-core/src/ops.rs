//! The axiom tables for addition, multiplication and division.
//!
//! Match arms are ordered by rule precedence: the first arm that matches is
//! the axiom that applies. Reordering arms changes the algebra.

use core::fmt;
use core::str::FromStr;

use crate::outcome::{Outcome, UndefinedReason};
use crate::value::Value::{self, AbsoluteZero, MeasuredZero, Real, TransientOne};
use crate::{CoreError, CoreResult};

/// The three binary operations of the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    Add,
    Multiply,
    Divide,
}

impl Operator {
    /// Menu order.
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Multiply, Operator::Divide];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Multiply => "×",
            Operator::Divide => "/",
        }
    }

    pub fn apply(self, a: Value, b: Value) -> Outcome {
        match self {
            Operator::Add => add(a, b),
            Operator::Multiply => multiply(a, b),
            Operator::Divide => divide(a, b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "×" | "*" | "x" | "mul" | "multiply" => Ok(Operator::Multiply),
            "/" | "÷" | "div" | "divide" => Ok(Operator::Divide),
            _ => Err(CoreError::UnknownOperator {
                input: s.to_string(),
            }),
        }
    }
}

/// Evaluate `a <op> b`.
#[inline]
pub fn evaluate(op: Operator, a: Value, b: Value) -> Outcome {
    op.apply(a, b)
}

/// Addition axioms.
pub fn add(a: Value, b: Value) -> Outcome {
    let v = match (a, b) {
        // x + 0bm = x
        (AbsoluteZero, other) | (other, AbsoluteZero) => other,
        (TransientOne, TransientOne) => Real(2.0),
        (TransientOne, Real(v)) | (Real(v), TransientOne) => Real(v + 1.0),
        (MeasuredZero, MeasuredZero) => MeasuredZero,
        (Real(v), MeasuredZero) | (MeasuredZero, Real(v)) => Real(v),
        (Real(x), Real(y)) => Real(x + y),
        // 1t + 0m and 0m + 1t
        _ => return Outcome::Undefined(UndefinedReason::Addition),
    };
    Outcome::Value(v)
}

/// Multiplication axioms.
///
/// Total over the four variants: the arms below cover every pair, so
/// `UndefinedReason::Multiplication` never comes out of this table.
pub fn multiply(a: Value, b: Value) -> Outcome {
    let v = match (a, b) {
        // x * 0bm = 0bm, including 1t * 0bm
        (AbsoluteZero, _) | (_, AbsoluteZero) => AbsoluteZero,
        // must precede the identity arm for 1t
        (TransientOne, MeasuredZero) | (MeasuredZero, TransientOne) => MeasuredZero,
        (MeasuredZero, _) | (_, MeasuredZero) => MeasuredZero,
        (TransientOne, other) | (other, TransientOne) => other,
        (Real(x), Real(y)) => Real(x * y),
    };
    Outcome::Value(v)
}

/// Division axioms.
pub fn divide(a: Value, b: Value) -> Outcome {
    let v = match (a, b) {
        // x / 0bm = 0bm, including 0bm / 0bm
        (_, AbsoluteZero) => AbsoluteZero,
        (MeasuredZero, MeasuredZero) => TransientOne,
        (Real(_), Real(d)) if d == 0.0 => return Outcome::DivisionByRealZero,
        (Real(n), Real(d)) => Real(n / d),
        _ => return Outcome::Undefined(UndefinedReason::Division),
    };
    Outcome::Value(v)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            (-1.0e6_f64..1.0e6_f64).prop_map(Real),
            Just(MeasuredZero),
            Just(AbsoluteZero),
            Just(TransientOne),
        ]
    }

    proptest! {
        #[test]
        fn real_add_matches_float_add(x in -1.0e6_f64..1.0e6_f64, y in -1.0e6_f64..1.0e6_f64) {
            prop_assert_eq!(add(Real(x), Real(y)), Outcome::Value(Real(x + y)));
        }

        #[test]
        fn real_multiply_matches_float_multiply(x in -1.0e6_f64..1.0e6_f64, y in -1.0e6_f64..1.0e6_f64) {
            prop_assert_eq!(multiply(Real(x), Real(y)), Outcome::Value(Real(x * y)));
        }

        #[test]
        fn real_divide_matches_float_divide(x in -1.0e6_f64..1.0e6_f64, y in -1.0e6_f64..1.0e6_f64) {
            let out = divide(Real(x), Real(y));
            if y == 0.0 {
                prop_assert_eq!(out, Outcome::DivisionByRealZero);
            } else {
                prop_assert_eq!(out, Outcome::Value(Real(x / y)));
            }
        }

        #[test]
        fn absolute_zero_laws(v in any_value()) {
            prop_assert_eq!(add(AbsoluteZero, v), Outcome::Value(v));
            prop_assert_eq!(add(v, AbsoluteZero), Outcome::Value(v));
            prop_assert_eq!(multiply(AbsoluteZero, v), Outcome::Value(AbsoluteZero));
            prop_assert_eq!(multiply(v, AbsoluteZero), Outcome::Value(AbsoluteZero));
            prop_assert_eq!(divide(v, AbsoluteZero), Outcome::Value(AbsoluteZero));
        }

        #[test]
        fn add_and_multiply_commute(a in any_value(), b in any_value()) {
            prop_assert_eq!(add(a, b), add(b, a));
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }
    }
}
