//! Registry error definitions

use crate::persist::PersistError;
use crate::table::TableError;

/// Registry error types
///
/// Represents all possible errors that can occur while wiring, loading, or
/// offloading the store. Every variant names the table it concerns.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No table registered under this name
    #[error("Table not found: {0}")]
    TableNotFound(String),
    /// Record store failure while reading or writing a table
    #[error("Persistence error on {table}: {source}")]
    Persist {
        table: &'static str,
        #[source]
        source: PersistError,
    },
    /// Table rejected the loaded records, or was wired incorrectly
    #[error("Table error on {table}: {source}")]
    Table {
        table: &'static str,
        #[source]
        source: TableError,
    },
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
