//! The closed value domain: the reals plus three special elements.

use core::fmt;
use core::str::FromStr;

use crate::numeric::{ensure_finite, is_integral};
use crate::{CoreError, CoreResult};

/// One element of the extended domain.
///
/// Only `Real` carries a payload; the special elements compare by tag alone.
/// Values are `Copy` and every operation returns a fresh one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Value {
    /// An ordinary real number.
    Real(f64),
    /// `0m`: a zero that arose from measurement, distinct from real 0.
    MeasuredZero,
    /// `0bm`: additive identity and multiplicative annihilator.
    AbsoluteZero,
    /// `1t`: emerges from `0m / 0m`.
    TransientOne,
}

impl Value {
    /// The three payload-free elements, in menu order.
    pub const SPECIALS: [Value; 3] = [
        Value::MeasuredZero,
        Value::AbsoluteZero,
        Value::TransientOne,
    ];

    /// Human-readable name of the active variant.
    pub fn kind_name(self) -> &'static str {
        match self {
            Value::Real(_) => "Real",
            Value::MeasuredZero => "Measured Zero",
            Value::AbsoluteZero => "Absolute Zero",
            Value::TransientOne => "Transient One",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // -0.0 has no fractional part but must not print as "-0"
            Value::Real(v) if v == 0.0 => f.write_str("0"),
            Value::Real(v) if is_integral(v) => write!(f, "{v:.0}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::MeasuredZero => f.write_str("0m"),
            Value::AbsoluteZero => f.write_str("0bm"),
            Value::TransientOne => f.write_str("1t"),
        }
    }
}

impl FromStr for Value {
    type Err = CoreError;

    /// Parses a single operand token: `0m`, `0bm`, `1t`, `Real(x)` or a bare
    /// decimal literal.
    fn from_str(s: &str) -> CoreResult<Self> {
        let token = s.trim();

        if token.eq_ignore_ascii_case("0m") {
            return Ok(Value::MeasuredZero);
        }
        if token.eq_ignore_ascii_case("0bm") {
            return Ok(Value::AbsoluteZero);
        }
        if token.eq_ignore_ascii_case("1t") {
            return Ok(Value::TransientOne);
        }

        let literal = strip_real_wrapper(token).unwrap_or(token);
        let v: f64 = literal
            .parse()
            .map_err(|_| CoreError::InvalidValue {
                input: s.to_string(),
            })?;
        Ok(Value::Real(ensure_finite(v, "real literal")?))
    }
}

/// `Real(5)` -> `Some("5")`.
fn strip_real_wrapper(token: &str) -> Option<&str> {
    let head = token.get(..5)?;
    if !head.eq_ignore_ascii_case("real(") {
        return None;
    }
    token[5..].strip_suffix(')').map(str::trim)
}
