//! The operand menu offered to frontends.

use std::collections::HashSet;

use mbm_core::{CoreError, Value};

use crate::error::{AppError, AppResult};

/// One selectable operand.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub label: String,
    pub value: Value,
}

impl CatalogEntry {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered, non-empty list of operands with unique labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::Validation(
                "Operand menu must have at least one entry".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.label.trim().is_empty() {
                return Err(AppError::Validation(
                    "Operand labels must not be empty".to_string(),
                ));
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate operand label '{}'",
                    entry.label
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn find(&self, label: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Resolve a frontend token: a menu label first, then a value literal.
    pub fn resolve(&self, token: &str) -> AppResult<Value> {
        if let Some(entry) = self.find(token) {
            return Ok(entry.value);
        }
        match token.parse::<Value>() {
            Ok(value) => Ok(value),
            Err(CoreError::InvalidValue { .. }) => {
                Err(AppError::UnknownOperand(token.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for Catalog {
    /// Representative reals (including zero and a negative) plus one of each
    /// special element.
    fn default() -> Self {
        let reals = [5.0, 7.0, 2.0, -5.0, 0.0]
            .into_iter()
            .map(|x| CatalogEntry::new(format!("Real({x})"), Value::Real(x)));
        let specials = Value::SPECIALS
            .into_iter()
            .map(|v| CatalogEntry::new(format!("{v} ({})", v.kind_name()), v));
        Self {
            entries: reals.chain(specials).collect(),
        }
    }
}
