//! In-memory record store

use crate::entity::Record;
use crate::persist::error::{PersistError, PersistResult};
use crate::persist::interface::RecordStore;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Record store keeping every resource in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: Mutex<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a resource has been written
    pub fn contains(&self, resource: &str) -> bool {
        self.resources.lock().contains_key(resource)
    }

    /// Remove a resource, returning its records
    pub fn remove(&self, resource: &str) -> Option<Vec<Record>> {
        self.resources.lock().remove(resource)
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, resource: &str) -> PersistResult<Vec<Record>> {
        self.resources
            .lock()
            .get(resource)
            .cloned()
            .ok_or_else(|| PersistError::NotFound(resource.to_string()))
    }

    fn write(&self, resource: &str, records: &[Record]) -> PersistResult<()> {
        self.resources
            .lock()
            .insert(resource.to_string(), records.to_vec());
        Ok(())
    }
}
