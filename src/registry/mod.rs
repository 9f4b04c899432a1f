use crate::entity::{Entity, Ingredient, Item, Product, Recipe};
use crate::persist::RecordStore;
use crate::registry::error::{RegistryError, RegistryResult};
use crate::table::{RecordTable, Table, TableBuilder, TableResult};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub mod error;

/// Table load order. Referenced tables come before their dependents.
const TABLE_ORDER: [&str; 4] = [
    Item::TABLE_NAME,
    Recipe::TABLE_NAME,
    Ingredient::TABLE_NAME,
    Product::TABLE_NAME,
];

/// The set of Crafter tables, wired with their foreign keys
///
/// Constructed once at startup and shared by handle. Ingredient and Product
/// reference Item and Recipe; no other table references anything.
pub struct Store {
    items: Arc<Table<Item>>,
    recipes: Arc<Table<Recipe>>,
    ingredients: Arc<Table<Ingredient>>,
    products: Arc<Table<Product>>,
}

impl Store {
    /// Build empty tables
    pub fn new() -> RegistryResult<Self> {
        let items = Arc::new(Table::<Item>::new());
        let recipes = Arc::new(Table::<Recipe>::new());

        let ingredients = Self::dependent::<Ingredient>(&items, &recipes).map_err(|source| {
            RegistryError::Table {
                table: Ingredient::TABLE_NAME,
                source,
            }
        })?;
        let products = Self::dependent::<Product>(&items, &recipes).map_err(|source| {
            RegistryError::Table {
                table: Product::TABLE_NAME,
                source,
            }
        })?;

        Ok(Self {
            items,
            recipes,
            ingredients: Arc::new(ingredients),
            products: Arc::new(products),
        })
    }

    /// Build empty tables and populate them from `source`
    pub fn open(source: &dyn RecordStore) -> RegistryResult<Self> {
        let store = Self::new()?;
        store.load(source)?;
        Ok(store)
    }

    fn dependent<E: Entity>(
        items: &Arc<Table<Item>>,
        recipes: &Arc<Table<Recipe>>,
    ) -> TableResult<Table<E>> {
        TableBuilder::<E>::new()
            .references(Item::PRIMARY_KEY, items.clone())
            .references(Recipe::PRIMARY_KEY, recipes.clone())
            .try_build()
    }

    pub fn items(&self) -> &Arc<Table<Item>> {
        &self.items
    }

    pub fn recipes(&self) -> &Arc<Table<Recipe>> {
        &self.recipes
    }

    pub fn ingredients(&self) -> &Arc<Table<Ingredient>> {
        &self.ingredients
    }

    pub fn products(&self) -> &Arc<Table<Product>> {
        &self.products
    }

    /// Table names in load order
    pub fn table_names() -> [&'static str; 4] {
        TABLE_ORDER
    }

    /// All tables in load order
    pub fn tables(&self) -> [&dyn RecordTable; 4] {
        [
            self.items.as_ref(),
            self.recipes.as_ref(),
            self.ingredients.as_ref(),
            self.products.as_ref(),
        ]
    }

    /// Look up a table by resource name
    pub fn table(&self, name: &str) -> RegistryResult<&dyn RecordTable> {
        self.tables()
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| RegistryError::TableNotFound(name.to_string()))
    }

    pub fn table_exists(&self, name: &str) -> bool {
        TABLE_ORDER.contains(&name)
    }

    /// Populate every table from `source`, in load order
    ///
    /// A missing resource leaves its table empty. Any other read failure, or
    /// a record violating a table invariant, aborts the load; records inserted
    /// before the violation stay in place.
    #[instrument(skip_all)]
    pub fn load(&self, source: &dyn RecordStore) -> RegistryResult<()> {
        for table in self.tables() {
            let name = table.name();
            info!(table = name, "loading table");

            let records = match source.read(name) {
                Ok(records) => records,
                Err(err) if err.is_not_found() => {
                    warn!(table = name, error = %err, "snapshot not found, table starts empty");
                    continue;
                }
                Err(err) => {
                    return Err(RegistryError::Persist {
                        table: name,
                        source: err,
                    });
                }
            };

            table
                .add_records(records)
                .map_err(|source| RegistryError::Table { table: name, source })?;
            info!(table = name, count = table.record_count(), "loaded table");
        }
        Ok(())
    }

    /// Write every table to `sink`, in load order
    #[instrument(skip_all)]
    pub fn offload(&self, sink: &dyn RecordStore) -> RegistryResult<()> {
        for table in self.tables() {
            let name = table.name();
            let records = table
                .records()
                .map_err(|source| RegistryError::Table { table: name, source })?;
            sink.write(name, &records)
                .map_err(|source| RegistryError::Persist { table: name, source })?;
            info!(table = name, count = records.len(), "offloaded table");
        }
        Ok(())
    }
}

/// Offloads a store exactly once, at shutdown
///
/// Call [`OffloadGuard::finish`] to offload and observe the result. If the
/// guard is dropped without `finish` (early return, unwinding), it offloads
/// from `Drop` and logs any failure.
pub struct OffloadGuard {
    store: Arc<Store>,
    sink: Arc<dyn RecordStore>,
    done: bool,
}

impl OffloadGuard {
    pub fn new(store: Arc<Store>, sink: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            sink,
            done: false,
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Offload now and disarm the guard
    pub fn finish(mut self) -> RegistryResult<()> {
        self.done = true;
        self.store.offload(self.sink.as_ref())
    }
}

impl Drop for OffloadGuard {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        if let Err(err) = self.store.offload(self.sink.as_ref()) {
            error!(error = %err, "offload at shutdown failed");
        }
    }
}
