//! Recipe entity

use crate::entity::Entity;
use crate::table::Column;
use crate::types::{ColumnType, EntryId, Value};
use serde::{Deserialize, Serialize};

/// A production recipe
///
/// `DESCRIPTION` is optional on input and defaults to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Recipe {
    /// Primary key
    pub recipe_id: EntryId,
    /// Recipe name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Recipe {
    pub fn new(recipe_id: EntryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            recipe_id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Recipe {
    const TABLE_NAME: &'static str = "recipes";
    const DISPLAY_NAME: &'static str = "Recipe";
    const PLURAL_NAME: &'static str = "Recipes";
    const PRIMARY_KEY: &'static str = "RECIPE_ID";
    const COLUMNS: &'static [Column] = &[
        Column::new("RECIPE_ID", ColumnType::Integer, false, 0),
        Column::new("NAME", ColumnType::Text, false, 1),
        Column::new("DESCRIPTION", ColumnType::Text, true, 2),
    ];

    fn key(&self) -> EntryId {
        self.recipe_id
    }

    fn column(&self, name: &str) -> Option<Value> {
        match name {
            "RECIPE_ID" => Some(Value::Integer(self.recipe_id)),
            "NAME" => Some(Value::Text(self.name.clone())),
            "DESCRIPTION" => Some(Value::Text(self.description.clone())),
            _ => None,
        }
    }
}
