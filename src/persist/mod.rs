//! Persistence module
//!
//! This module provides the record-store interface the registry loads from and
//! offloads to, with a JSON file implementation that keeps one array file per
//! table and an in-memory implementation.

// Re-export error types and result type
pub mod error;
pub use error::{PersistError, PersistResult};

// Re-export interface traits
pub mod interface;
pub use interface::RecordStore;

// Re-export implementations
pub mod json_fs;
pub use json_fs::JsonFs;

pub mod memory;
pub use memory::MemoryStore;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
