//! Product entity: an item yielded by a recipe at a given rate

use crate::entity::Entity;
use crate::table::Column;
use crate::types::{ColumnType, EntryId, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Product {
    pub product_id: EntryId,
    pub item_id: EntryId,
    pub recipe_id: EntryId,
    /// Units produced per craft
    pub rate: i64,
}

impl Product {
    pub fn new(product_id: EntryId, item_id: EntryId, recipe_id: EntryId, rate: i64) -> Self {
        Self {
            product_id,
            item_id,
            recipe_id,
            rate,
        }
    }
}

impl Entity for Product {
    const TABLE_NAME: &'static str = "products";
    const DISPLAY_NAME: &'static str = "Product";
    const PLURAL_NAME: &'static str = "Products";
    const PRIMARY_KEY: &'static str = "PRODUCT_ID";
    const COLUMNS: &'static [Column] = &[
        Column::new("PRODUCT_ID", ColumnType::Integer, false, 0),
        Column::new("ITEM_ID", ColumnType::Integer, false, 1),
        Column::new("RECIPE_ID", ColumnType::Integer, false, 2),
        Column::new("RATE", ColumnType::Integer, false, 3),
    ];

    fn key(&self) -> EntryId {
        self.product_id
    }

    fn column(&self, name: &str) -> Option<Value> {
        match name {
            "PRODUCT_ID" => Some(Value::Integer(self.product_id)),
            "ITEM_ID" => Some(Value::Integer(self.item_id)),
            "RECIPE_ID" => Some(Value::Integer(self.recipe_id)),
            "RATE" => Some(Value::Integer(self.rate)),
            _ => None,
        }
    }
}
