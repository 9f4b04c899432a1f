//! Foreign-key wiring between tables
//!
//! A dependent table holds one [`ForeignKey`] per referencing column. Each
//! foreign key points at the referenced table through the [`KeySource`]
//! trait, which hands out a read-locked view of that table's primary keys.

use crate::types::EntryId;
use std::fmt;
use std::sync::Arc;

/// Read-only view of a table's primary keys, held under its read lock
pub trait KeySet {
    /// Check whether `key` is present
    fn contains(&self, key: EntryId) -> bool;
}

/// A table that can be referenced by foreign keys
pub trait KeySource: Send + Sync {
    /// Singular entity name of the referenced table (e.g. `Item`)
    fn entity_name(&self) -> &'static str;

    /// Acquire the table's read lock and expose its key set.
    ///
    /// The lock is held until the returned guard is dropped.
    fn read_keys(&self) -> Box<dyn KeySet + '_>;
}

/// A column whose values must exist as primary keys of another table
#[derive(Clone)]
pub struct ForeignKey {
    column: &'static str,
    references: Arc<dyn KeySource>,
}

impl ForeignKey {
    pub fn new(column: &'static str, references: Arc<dyn KeySource>) -> Self {
        Self { column, references }
    }

    /// Referencing column in the dependent table
    pub fn column(&self) -> &'static str {
        self.column
    }

    /// Referenced table
    pub fn references(&self) -> &dyn KeySource {
        self.references.as_ref()
    }

    /// Whether both keys point at the same table
    pub(crate) fn shares_table(&self, other: &ForeignKey) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.references), Arc::as_ptr(&other.references))
    }

    /// Message reported when `value` has no referenced row
    pub(crate) fn missing_message(&self, value: EntryId) -> String {
        format!(
            "{} {} does not exist in the {} table",
            self.column,
            value,
            self.references.entity_name().to_lowercase()
        )
    }
}

impl fmt::Debug for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignKey")
            .field("column", &self.column)
            .field("references", &self.references.entity_name())
            .finish()
    }
}
