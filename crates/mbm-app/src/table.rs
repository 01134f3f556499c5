//! Full operation tables over a catalog.

use core::fmt;

use mbm_core::{Operator, Outcome, Value};
use tracing::debug;

use crate::catalog::Catalog;

const UNDEFINED_CELL: &str = "undef";
const REAL_ZERO_CELL: &str = "div/0";

/// Tally of outcome kinds in a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub values: usize,
    pub undefined: usize,
    pub division_by_real_zero: usize,
}

/// `cells[i][j]` is `operands[i] <op> operands[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationTable {
    pub op: Operator,
    pub operands: Vec<Value>,
    pub cells: Vec<Vec<Outcome>>,
}

impl OperationTable {
    pub fn get(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for outcome in self.cells.iter().flatten() {
            match outcome {
                Outcome::Value(_) => counts.values += 1,
                Outcome::Undefined(_) => counts.undefined += 1,
                Outcome::DivisionByRealZero => counts.division_by_real_zero += 1,
            }
        }
        counts
    }
}

fn cell_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Value(v) => v.to_string(),
        Outcome::Undefined(_) => UNDEFINED_CELL.to_string(),
        Outcome::DivisionByRealZero => REAL_ZERO_CELL.to_string(),
    }
}

impl fmt::Display for OperationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.operands.iter().map(Value::to_string).collect();
        let body: Vec<Vec<String>> = self
            .cells
            .iter()
            .map(|row| row.iter().copied().map(cell_text).collect())
            .collect();

        let width = header
            .iter()
            .chain(body.iter().flatten())
            .map(|s| s.chars().count())
            .chain(std::iter::once(self.op.symbol().chars().count()))
            .max()
            .unwrap_or(1);

        write!(f, "{:>width$}", self.op.symbol())?;
        for h in &header {
            write!(f, " | {h:>width$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat((width + 3) * (header.len() + 1) - 3))?;

        for (label, row) in header.iter().zip(&body) {
            write!(f, "{label:>width$}")?;
            for cell in row {
                write!(f, " | {cell:>width$}")?;
            }
            writeln!(f)?;
        }

        let counts = self.counts();
        writeln!(f)?;
        writeln!(f, "{UNDEFINED_CELL} = not covered by the axioms, {REAL_ZERO_CELL} = division by real 0")?;
        write!(
            f,
            "{} values, {} undefined, {} division by real 0",
            counts.values, counts.undefined, counts.division_by_real_zero
        )
    }
}

/// Evaluate `op` over every ordered pair of catalog operands.
pub fn operation_table(catalog: &Catalog, op: Operator) -> OperationTable {
    let operands: Vec<Value> = catalog.values().collect();
    let cells = operands
        .iter()
        .map(|&a| operands.iter().map(|&b| op.apply(a, b)).collect())
        .collect();

    let table = OperationTable {
        op,
        operands,
        cells,
    };
    debug!(%op, size = table.operands.len(), counts = ?table.counts(), "built operation table");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogEntry;

    #[test]
    fn division_table_over_default_menu() {
        let table = operation_table(&Catalog::default(), Operator::Divide);
        assert_eq!(table.operands.len(), 8);
        assert_eq!(table.cells.len(), 8);

        // column 6 is 0bm: every dividend gives 0bm
        for row in 0..8 {
            assert_eq!(table.get(row, 6), Some(Outcome::Value(Value::AbsoluteZero)));
        }
        // 0m / 0m
        assert_eq!(table.get(5, 5), Some(Outcome::Value(Value::TransientOne)));
        // Real(5) / Real(0)
        assert_eq!(table.get(0, 4), Some(Outcome::DivisionByRealZero));

        let counts = table.counts();
        assert_eq!(
            counts.values + counts.undefined + counts.division_by_real_zero,
            64
        );
        // five real dividends over Real(0)
        assert_eq!(counts.division_by_real_zero, 5);
    }

    #[test]
    fn multiplication_table_has_no_gaps() {
        let table = operation_table(&Catalog::default(), Operator::Multiply);
        assert_eq!(table.counts().values, 64);
    }

    #[test]
    fn renders_aligned_grid() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("one t", Value::TransientOne),
            CatalogEntry::new("m zero", Value::MeasuredZero),
        ])
        .unwrap();
        let text = operation_table(&catalog, Operator::Add).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    + |    1t |    0m");
        assert_eq!(lines[2], "   1t |     2 | undef");
        assert_eq!(lines[3], "   0m | undef |    0m");
        assert!(text.ends_with("2 values, 2 undefined, 0 division by real 0"));
    }
}
