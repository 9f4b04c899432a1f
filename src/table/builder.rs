//! TableBuilder for fluent table construction
//!
//! Provides a builder pattern for creating tables with:
//! - Foreign-key wiring to referenced tables
//! - Validation of each foreign key against the entity schema before build

use crate::entity::Entity;
use crate::table::foreign_key::{ForeignKey, KeySource};
use crate::table::{Table, TableError, TableResult};
use crate::types::ColumnType;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

/// Builder for constructing Table instances
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use crafter::entity::{Ingredient, Item, Recipe};
/// use crafter::table::{Table, TableBuilder};
///
/// let items = Arc::new(Table::<Item>::new());
/// let recipes = Arc::new(Table::<Recipe>::new());
///
/// let ingredients = TableBuilder::<Ingredient>::new()
///     .references("ITEM_ID", items.clone())
///     .references("RECIPE_ID", recipes.clone())
///     .try_build()
///     .unwrap();
/// assert_eq!(ingredients.foreign_keys().len(), 2);
/// ```
pub struct TableBuilder<E: Entity> {
    foreign_keys: Vec<ForeignKey>,
    _entity: PhantomData<E>,
}

impl<E: Entity> TableBuilder<E> {
    /// Create a new table builder
    pub fn new() -> Self {
        Self {
            foreign_keys: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Require values of `column` to exist as keys of `table`
    ///
    /// Foreign keys are read-locked in the order they are added. Every table
    /// in a process must add them in the same global table order (Item before
    /// Recipe), or two writers can deadlock. A table may be referenced once.
    pub fn references(mut self, column: &'static str, table: Arc<dyn KeySource>) -> Self {
        self.foreign_keys.push(ForeignKey::new(column, table));
        self
    }

    /// Build with validation
    ///
    /// Each foreign-key column must be a known, non-key integer column and
    /// appear only once, and each referenced table must be distinct.
    pub fn try_build(self) -> TableResult<Table<E>> {
        let mut seen = HashSet::new();
        for (idx, fk) in self.foreign_keys.iter().enumerate() {
            let column = fk.column();
            let def = E::schema_column(column).ok_or_else(|| {
                TableError::InvalidSchema(format!(
                    "{} has no column {}",
                    E::TABLE_NAME,
                    column
                ))
            })?;
            if column == E::PRIMARY_KEY {
                return Err(TableError::InvalidSchema(format!(
                    "primary key {} cannot be a foreign key",
                    column
                )));
            }
            if def.column_type() != ColumnType::Integer {
                return Err(TableError::InvalidSchema(format!(
                    "foreign key {} must be an integer column",
                    column
                )));
            }
            if !seen.insert(column) {
                return Err(TableError::InvalidSchema(format!(
                    "duplicate foreign key {}",
                    column
                )));
            }
            // A second read lock on the same table can block behind a queued writer.
            if let Some(prior) = self.foreign_keys[..idx].iter().find(|p| p.shares_table(fk)) {
                return Err(TableError::InvalidSchema(format!(
                    "{} and {} reference the same {} table",
                    prior.column(),
                    column,
                    fk.references().entity_name().to_lowercase()
                )));
            }
        }

        Ok(Table::with_foreign_keys(self.foreign_keys))
    }
}

impl<E: Entity> Default for TableBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
