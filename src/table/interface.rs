//! Table interface definitions

use crate::entity::{Entity, Record};
use crate::query::Filter;
use crate::table::Table;
use crate::table::error::{Ack, TableError, TableResult};
use crate::types::EntryId;

/// Typed table interface
/// This trait defines the operation set every entity table exposes to the HTTP layer
pub trait TableInterface<E: Entity>: Send + Sync {
    /// Return all records in current order
    fn get_many(&self) -> Vec<E>;

    /// Return the record whose primary key equals `key`
    ///
    /// # Returns
    /// * `Ok(E)` if the record exists
    /// * `Err(TableError::NotFound)` otherwise
    fn get_one(&self, key: EntryId) -> TableResult<E>;

    /// Suggest an identifier for a new record: max key + 1, or 0 when empty.
    /// This is a hint only; `add_one` remains the uniqueness authority.
    ///
    /// # Returns
    /// * `Ok(EntryId)` with the suggested key
    /// * `Err(TableError::Conflict)` when the largest key is `EntryId::MAX`
    fn get_next_id(&self) -> TableResult<EntryId>;

    /// Insert a new record
    ///
    /// # Returns
    /// * `Ok(Ack)` if the record was appended
    /// * `Err(TableError::Conflict)` on a duplicate key or a missing referenced row
    fn add_one(&self, record: E) -> TableResult<Ack>;

    /// Insert records in input order, stopping at the first failure.
    /// Records inserted before the failure are kept.
    fn add_many(&self, records: Vec<E>) -> TableResult<Ack>;

    /// Update the record at `key`, renaming it when `record` carries a
    /// different primary key, or create it when `key` is absent
    ///
    /// # Returns
    /// * `Ok(Ack)` on update or create
    /// * `Err(TableError::NotFound)` when renaming an absent key
    /// * `Err(TableError::Conflict)` when the new key is taken or a reference is missing
    fn update_or_create(&self, key: EntryId, record: E) -> TableResult<Ack>;

    /// Remove the record at `key`. Dependent rows in other tables are left alone.
    fn delete(&self, key: EntryId) -> TableResult<Ack>;

    /// Return the records matching every condition of `filter`, in current order
    fn query(&self, filter: &Filter) -> TableResult<Vec<E>>;
}

/// Record-level table interface
/// Type-erased view used by the registry to load and offload tables uniformly
pub trait RecordTable: Send + Sync {
    /// Resource name of the table
    fn name(&self) -> &'static str;

    /// Number of records
    fn record_count(&self) -> usize;

    /// Convert and insert records through `add_many`
    fn add_records(&self, records: Vec<Record>) -> TableResult<Ack>;

    /// Snapshot all records in current order
    fn records(&self) -> TableResult<Vec<Record>>;
}

impl<E: Entity> RecordTable for Table<E> {
    fn name(&self) -> &'static str {
        E::TABLE_NAME
    }

    fn record_count(&self) -> usize {
        self.len()
    }

    fn add_records(&self, records: Vec<Record>) -> TableResult<Ack> {
        let entities = records
            .into_iter()
            .map(|record| {
                E::from_record(record)
                    .map_err(|e| TableError::InvalidRecord(format!("{}: {}", E::TABLE_NAME, e)))
            })
            .collect::<TableResult<Vec<E>>>()?;
        self.add_many(entities)
    }

    fn records(&self) -> TableResult<Vec<Record>> {
        self.get_many()
            .iter()
            .map(|row| {
                row.to_record()
                    .map_err(|e| TableError::InvalidRecord(format!("{}: {}", E::TABLE_NAME, e)))
            })
            .collect()
    }
}
