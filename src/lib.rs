//! Crafter store library
//!
//! In-memory tables for items, recipes, ingredients, and products, with
//! primary-key uniqueness, foreign-key checks, upserts, equality queries, and
//! snapshot load/offload through a pluggable record store.

// Global type definitions
pub mod types;

// Import various modules
pub mod entity;
pub mod logging;
pub mod persist;
pub mod query;
pub mod registry;
pub mod table;

// Re-export registry items for easier access
pub use registry::error::{RegistryError, RegistryResult};
pub use registry::{OffloadGuard, Store};

// Re-export table items for easier access
pub use table::{Ack, TableError, TableInterface};
