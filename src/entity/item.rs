//! Item entity

use crate::entity::Entity;
use crate::table::Column;
use crate::types::{ColumnType, EntryId, Value};
use serde::{Deserialize, Serialize};

/// A craftable or raw item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Item {
    /// Primary key
    pub item_id: EntryId,
    /// Item name
    pub name: String,
}

impl Item {
    pub fn new(item_id: EntryId, name: impl Into<String>) -> Self {
        Self {
            item_id,
            name: name.into(),
        }
    }
}

impl Entity for Item {
    const TABLE_NAME: &'static str = "items";
    const DISPLAY_NAME: &'static str = "Item";
    const PLURAL_NAME: &'static str = "Items";
    const PRIMARY_KEY: &'static str = "ITEM_ID";
    const COLUMNS: &'static [Column] = &[
        Column::new("ITEM_ID", ColumnType::Integer, false, 0),
        Column::new("NAME", ColumnType::Text, false, 1),
    ];

    fn key(&self) -> EntryId {
        self.item_id
    }

    fn column(&self, name: &str) -> Option<Value> {
        match name {
            "ITEM_ID" => Some(Value::Integer(self.item_id)),
            "NAME" => Some(Value::Text(self.name.clone())),
            _ => None,
        }
    }
}
