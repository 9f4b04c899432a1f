//! Record store interface definitions

use crate::entity::Record;
use crate::persist::error::PersistResult;

/// Record store trait
/// This trait defines the load/save capability consumed by the registry.
/// Implementations are format-agnostic from the registry's point of view.
pub trait RecordStore: Send + Sync {
    /// Read every record stored under a resource
    ///
    /// # Arguments
    /// * `resource` - Table resource name (e.g. `items`)
    ///
    /// # Returns
    /// * `Ok(Vec<Record>)` in stored order
    /// * `Err(PersistError::NotFound)` if the resource does not exist
    /// * `Err(PersistError)` for any other failure
    fn read(&self, resource: &str) -> PersistResult<Vec<Record>>;

    /// Replace the contents of a resource
    ///
    /// # Arguments
    /// * `resource` - Table resource name
    /// * `records` - Records to store, in order
    ///
    /// # Returns
    /// * `Ok(())` if the records were written
    /// * `Err(PersistError)` if an error occurred
    fn write(&self, resource: &str, records: &[Record]) -> PersistResult<()>;
}
