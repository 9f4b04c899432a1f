//! Table module for the in-memory relational engine
//!
//! This module implements one keyed table per entity with the following features:
//! - Primary-key uniqueness and insertion-ordered storage
//! - Foreign-key checks against referenced tables on insert and update
//! - Upsert with primary-key rename
//! - Equality queries through [`crate::query::Filter`]

pub mod builder;
pub mod column;
pub mod error;
pub mod foreign_key;
pub mod interface;
pub mod table;

pub use builder::TableBuilder;
pub use column::Column;
pub use error::{Ack, TableError, TableResult};
pub use foreign_key::{ForeignKey, KeySet, KeySource};
pub use interface::{RecordTable, TableInterface};
pub use table::Table;
