//! Ingredient entity: an item consumed by a recipe at a given rate

use crate::entity::Entity;
use crate::table::Column;
use crate::types::{ColumnType, EntryId, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Ingredient {
    /// Primary key
    pub ingredient_id: EntryId,
    /// References Item.ITEM_ID
    pub item_id: EntryId,
    /// References Recipe.RECIPE_ID
    pub recipe_id: EntryId,
    /// Units consumed per craft
    pub rate: i64,
}

impl Ingredient {
    pub fn new(ingredient_id: EntryId, item_id: EntryId, recipe_id: EntryId, rate: i64) -> Self {
        Self {
            ingredient_id,
            item_id,
            recipe_id,
            rate,
        }
    }
}

impl Entity for Ingredient {
    const TABLE_NAME: &'static str = "ingredients";
    const DISPLAY_NAME: &'static str = "Ingredient";
    const PLURAL_NAME: &'static str = "Ingredients";
    const PRIMARY_KEY: &'static str = "INGREDIENT_ID";
    const COLUMNS: &'static [Column] = &[
        Column::new("INGREDIENT_ID", ColumnType::Integer, false, 0),
        Column::new("ITEM_ID", ColumnType::Integer, false, 1),
        Column::new("RECIPE_ID", ColumnType::Integer, false, 2),
        Column::new("RATE", ColumnType::Integer, false, 3),
    ];

    fn key(&self) -> EntryId {
        self.ingredient_id
    }

    fn column(&self, name: &str) -> Option<Value> {
        match name {
            "INGREDIENT_ID" => Some(Value::Integer(self.ingredient_id)),
            "ITEM_ID" => Some(Value::Integer(self.item_id)),
            "RECIPE_ID" => Some(Value::Integer(self.recipe_id)),
            "RATE" => Some(Value::Integer(self.rate)),
            _ => None,
        }
    }
}
