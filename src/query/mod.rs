//! Query module
//!
//! Provides the equality filter evaluated against a table's records. A filter
//! is a conjunction of `COLUMN == value` conditions; columns absent from the
//! filter are unconstrained and an empty filter matches every record.

use crate::entity::{Entity, Record};
use crate::table::{TableError, TableResult};
use crate::types::Value;

/// Equality filter over named columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `column == value` condition, replacing an earlier one on the same column
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        let value = value.into();
        match self.conditions.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.conditions.push((column, value)),
        }
        self
    }

    /// Build a filter from a record-shaped request body
    ///
    /// Only integer and string values are accepted.
    pub fn from_record(record: &Record) -> TableResult<Self> {
        let mut filter = Self::new();
        for (column, raw) in record {
            let value = Value::from_json(raw).ok_or_else(|| {
                TableError::InvalidRecord(format!(
                    "filter value for {} must be an integer or a string, got {}",
                    column, raw
                ))
            })?;
            filter = filter.with(column.clone(), value);
        }
        Ok(filter)
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Reject conditions on columns `E` does not have
    pub fn validate<E: Entity>(&self) -> TableResult<()> {
        for (column, _) in &self.conditions {
            if E::schema_column(column).is_none() {
                return Err(TableError::UnknownColumn {
                    table: E::TABLE_NAME,
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check whether `row` satisfies every condition
    ///
    /// A value whose type differs from the column's type never matches.
    pub fn matches<E: Entity>(&self, row: &E) -> bool {
        self.conditions
            .iter()
            .all(|(column, expected)| row.column(column).as_ref() == Some(expected))
    }
}
