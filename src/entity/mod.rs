//! Entity module for the Crafter data model
//!
//! Each entity is a typed row whose serialized form is a mapping of
//! upper-case column name to scalar value:
//! - Item: ITEM_ID, NAME
//! - Recipe: RECIPE_ID, NAME, DESCRIPTION
//! - Ingredient: INGREDIENT_ID, ITEM_ID, RECIPE_ID, RATE
//! - Product: PRODUCT_ID, ITEM_ID, RECIPE_ID, RATE

use crate::table::Column;
use crate::types::{ColumnType, EntryId, Value};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod ingredient;
pub mod item;
pub mod product;
pub mod recipe;

pub use ingredient::Ingredient;
pub use item::Item;
pub use product::Product;
pub use recipe::Recipe;

/// Format-agnostic row exchanged with persistence adapters
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Per-entity metadata and accessors used by the generic table
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource name of the table (`items`, `recipes`, ...)
    const TABLE_NAME: &'static str;
    /// Singular name used in messages
    const DISPLAY_NAME: &'static str;
    /// Plural name used in batch messages
    const PLURAL_NAME: &'static str;
    /// Primary key column
    const PRIMARY_KEY: &'static str;
    /// Column schema, primary key first
    const COLUMNS: &'static [Column];

    /// Primary key value
    fn key(&self) -> EntryId;

    /// Value of the named column, `None` if the entity has no such column
    fn column(&self, name: &str) -> Option<Value>;

    /// Look up a column definition by name
    fn schema_column(name: &str) -> Option<&'static Column> {
        Self::COLUMNS.iter().find(|c| c.name() == name)
    }

    /// Serialize into a record
    fn to_record(&self) -> Result<Record, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "expected a record, got {}",
                other
            ))),
        }
    }

    /// Deserialize from a record; optional columns take their defaults
    ///
    /// Integer columns also accept decimal strings such as `"12"`.
    fn from_record(mut record: Record) -> Result<Self, serde_json::Error> {
        for column in Self::COLUMNS {
            if column.column_type() != ColumnType::Integer {
                continue;
            }
            let parsed = match record.get(column.name()) {
                Some(serde_json::Value::String(text)) => text.trim().parse::<i64>().ok(),
                _ => None,
            };
            if let Some(n) = parsed {
                record.insert(column.name().to_string(), serde_json::Value::from(n));
            }
        }
        serde_json::from_value(serde_json::Value::Object(record))
    }
}
