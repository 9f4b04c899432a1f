//! Generic keyed table storing one entity's records

use crate::entity::Entity;
use crate::query::Filter;
use crate::table::error::{Ack, TableError, TableResult};
use crate::table::foreign_key::{ForeignKey, KeySet, KeySource};
use crate::table::interface::TableInterface;
use crate::types::EntryId;
use linked_hash_map::LinkedHashMap;
use parking_lot::{RwLock, RwLockReadGuard};
use std::fmt;
use tracing::debug;

/// Rows keyed by primary key, in insertion order
type Rows<E> = LinkedHashMap<EntryId, E>;

/// In-memory table for one entity
///
/// Stores records keyed by primary key with:
/// - rows: Insertion-ordered records behind a single read-write lock
/// - foreign_keys: Referenced tables checked on insert and update
///
/// Mutations hold the write lock for the whole validate-then-apply sequence,
/// so a caller never observes a violated invariant. Before taking its own
/// write lock, a table read-locks the tables its foreign keys reference, in
/// declaration order. Wiring Item before Recipe, and both before their
/// dependents, gives every thread the same global lock order.
pub struct Table<E: Entity> {
    rows: RwLock<Rows<E>>,
    foreign_keys: Vec<ForeignKey>,
}

impl<E: Entity> Table<E> {
    /// Create an empty table without foreign keys
    pub fn new() -> Self {
        Self::with_foreign_keys(Vec::new())
    }

    /// Create an empty table checking the given foreign keys
    ///
    /// Use [`TableBuilder`](crate::table::TableBuilder) to get the keys validated
    /// against the entity schema.
    pub(crate) fn with_foreign_keys(foreign_keys: Vec<ForeignKey>) -> Self {
        Self {
            rows: RwLock::new(LinkedHashMap::new()),
            foreign_keys,
        }
    }

    /// Resource name of this table
    pub fn name(&self) -> &'static str {
        E::TABLE_NAME
    }

    /// Get the foreign keys checked by this table
    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    pub fn contains_key(&self, key: EntryId) -> bool {
        self.rows.read().contains_key(&key)
    }

    /// Read-lock every referenced table, in foreign-key order
    fn lock_references(&self) -> Vec<Box<dyn KeySet + '_>> {
        self.foreign_keys
            .iter()
            .map(|fk| fk.references().read_keys())
            .collect()
    }

    fn check_references(&self, held: &[Box<dyn KeySet + '_>], record: &E) -> TableResult<()> {
        for (fk, keys) in self.foreign_keys.iter().zip(held) {
            let value = record
                .column(fk.column())
                .and_then(|v| v.as_integer())
                .ok_or_else(|| {
                    TableError::InvalidRecord(format!(
                        "{} has no integer column {}",
                        E::DISPLAY_NAME,
                        fk.column()
                    ))
                })?;
            if !keys.contains(value) {
                return Err(TableError::Conflict(fk.missing_message(value)));
            }
        }
        Ok(())
    }

    fn duplicate_key(key: EntryId) -> TableError {
        TableError::Conflict(format!("{} {} already exists", E::PRIMARY_KEY, key))
    }

    fn not_found(key: EntryId) -> TableError {
        TableError::NotFound {
            entity: E::DISPLAY_NAME,
            key,
        }
    }

    /// Insert under already-held locks
    fn insert_locked(
        &self,
        held: &[Box<dyn KeySet + '_>],
        rows: &mut Rows<E>,
        record: E,
    ) -> TableResult<()> {
        let key = record.key();
        if rows.contains_key(&key) {
            return Err(Self::duplicate_key(key));
        }
        self.check_references(held, &record)?;
        rows.insert(key, record);
        debug!(table = E::TABLE_NAME, key, "inserted record");
        Ok(())
    }
}

impl<E: Entity> TableInterface<E> for Table<E> {
    fn get_many(&self) -> Vec<E> {
        self.rows.read().values().cloned().collect()
    }

    fn get_one(&self, key: EntryId) -> TableResult<E> {
        self.rows
            .read()
            .get(&key)
            .cloned()
            .ok_or_else(|| Self::not_found(key))
    }

    fn get_next_id(&self) -> TableResult<EntryId> {
        match self.rows.read().keys().max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                TableError::Conflict(format!("{} {} is the largest id", E::PRIMARY_KEY, max))
            }),
        }
    }

    fn add_one(&self, record: E) -> TableResult<Ack> {
        let held = self.lock_references();
        let mut rows = self.rows.write();
        self.insert_locked(&held, &mut rows, record)?;
        Ok(Ack::new(format!("{} added successfully", E::DISPLAY_NAME)))
    }

    fn add_many(&self, records: Vec<E>) -> TableResult<Ack> {
        let held = self.lock_references();
        let mut rows = self.rows.write();
        // Records inserted before a failure stay in place.
        for record in records {
            self.insert_locked(&held, &mut rows, record)?;
        }
        Ok(Ack::new(format!("{} added successfully", E::PLURAL_NAME)))
    }

    fn update_or_create(&self, key: EntryId, record: E) -> TableResult<Ack> {
        let held = self.lock_references();
        let mut rows = self.rows.write();
        let new_key = record.key();

        if new_key != key {
            if !rows.contains_key(&key) {
                return Err(Self::not_found(key));
            }
            if rows.contains_key(&new_key) {
                return Err(Self::duplicate_key(new_key));
            }
            self.check_references(&held, &record)?;
            rows.remove(&key);
            rows.insert(new_key, record);
            debug!(table = E::TABLE_NAME, old_key = key, new_key, "renamed record");
            return Ok(Ack::new(format!("{} updated successfully", E::DISPLAY_NAME)));
        }

        if !rows.contains_key(&key) {
            self.insert_locked(&held, &mut rows, record)?;
            return Ok(Ack::new(format!("{} created successfully", E::DISPLAY_NAME)));
        }

        self.check_references(&held, &record)?;
        if let Some(slot) = rows.get_mut(&key) {
            *slot = record;
        }
        debug!(table = E::TABLE_NAME, key, "updated record");
        Ok(Ack::new(format!("{} updated successfully", E::DISPLAY_NAME)))
    }

    fn delete(&self, key: EntryId) -> TableResult<Ack> {
        self.rows
            .write()
            .remove(&key)
            .ok_or_else(|| Self::not_found(key))?;
        debug!(table = E::TABLE_NAME, key, "deleted record");
        Ok(Ack::new(format!("{} deleted successfully", E::DISPLAY_NAME)))
    }

    fn query(&self, filter: &Filter) -> TableResult<Vec<E>> {
        filter.validate::<E>()?;
        Ok(self
            .rows
            .read()
            .values()
            .filter(|row| filter.matches(*row))
            .cloned()
            .collect())
    }
}

impl<E: Entity> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for Table<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &E::TABLE_NAME)
            .field("len", &self.len())
            .field("foreign_keys", &self.foreign_keys)
            .finish()
    }
}

impl<E: Entity> KeySet for RwLockReadGuard<'_, Rows<E>> {
    fn contains(&self, key: EntryId) -> bool {
        self.contains_key(&key)
    }
}

impl<E: Entity> KeySource for Table<E> {
    fn entity_name(&self) -> &'static str {
        E::DISPLAY_NAME
    }

    fn read_keys(&self) -> Box<dyn KeySet + '_> {
        Box::new(self.rows.read())
    }
}
