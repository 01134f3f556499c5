//! Single calculations: resolve operands, evaluate, present.

use core::fmt;

use mbm_core::{Operator, Outcome, Value, evaluate};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::AppResult;

/// One evaluated `lhs <op> rhs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: Value,
    pub op: Operator,
    pub rhs: Value,
    pub outcome: Outcome,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.outcome)
    }
}

/// Evaluate two already-resolved operands.
pub fn calculate_values(lhs: Value, op: Operator, rhs: Value) -> Calculation {
    let outcome = evaluate(op, lhs, rhs);
    debug!(%lhs, %op, %rhs, %outcome, defined = outcome.is_value(), "evaluated");
    Calculation {
        lhs,
        op,
        rhs,
        outcome,
    }
}

/// Resolve both tokens against the catalog and the operator symbol, then
/// evaluate. Undefined outcomes are returned as results, not errors.
pub fn calculate(catalog: &Catalog, lhs: &str, op: &str, rhs: &str) -> AppResult<Calculation> {
    let lhs = catalog.resolve(lhs)?;
    let op: Operator = op.parse()?;
    let rhs = catalog.resolve(rhs)?;
    Ok(calculate_values(lhs, op, rhs))
}
