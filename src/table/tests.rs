// Table module tests

#[cfg(test)]
mod table_tests {
    use crate::entity::{Entity, Ingredient, Item, Product, Recipe};
    use crate::query::Filter;
    use crate::table::{RecordTable, Table, TableBuilder, TableError, TableInterface};
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    struct Fixture {
        items: Arc<Table<Item>>,
        recipes: Arc<Table<Recipe>>,
        ingredients: Table<Ingredient>,
        products: Table<Product>,
    }

    fn fixture() -> Fixture {
        let items = Arc::new(Table::<Item>::new());
        let recipes = Arc::new(Table::<Recipe>::new());
        let ingredients = TableBuilder::<Ingredient>::new()
            .references("ITEM_ID", items.clone())
            .references("RECIPE_ID", recipes.clone())
            .try_build()
            .unwrap();
        let products = TableBuilder::<Product>::new()
            .references("ITEM_ID", items.clone())
            .references("RECIPE_ID", recipes.clone())
            .try_build()
            .unwrap();
        Fixture {
            items,
            recipes,
            ingredients,
            products,
        }
    }

    fn seeded() -> Fixture {
        let f = fixture();
        f.items.add_one(Item::new(1, "Ore")).unwrap();
        f.recipes.add_one(Recipe::new(1, "Smelt", "desc")).unwrap();
        f
    }

    #[test]
    fn test_add_then_get_one() {
        let table = Table::<Item>::new();
        let ack = table.add_one(Item::new(1, "Ore")).unwrap();
        assert_eq!(ack.message, "Item added successfully");
        assert_eq!(table.get_one(1).unwrap(), Item::new(1, "Ore"));
    }

    #[test]
    fn test_duplicate_add_is_conflict_and_unchanged() {
        let table = Table::<Item>::new();
        table.add_one(Item::new(1, "Ore")).unwrap();

        let err = table.add_one(Item::new(1, "X")).unwrap_err();
        assert_eq!(err, TableError::Conflict("ITEM_ID 1 already exists".to_string()));
        assert_eq!(table.get_many(), vec![Item::new(1, "Ore")]);
    }

    #[test]
    fn test_item_scenario() {
        let table = Table::<Item>::new();
        table
            .add_many(vec![Item::new(1, "Ore"), Item::new(2, "Bar")])
            .unwrap();
        assert_eq!(
            table.get_many(),
            vec![Item::new(1, "Ore"), Item::new(2, "Bar")]
        );
        assert!(table.add_one(Item::new(1, "X")).unwrap_err().is_conflict());
        assert_eq!(table.get_next_id(), Ok(3));
    }

    #[test]
    fn test_add_many_keeps_partial_effect() {
        let table = Table::<Item>::new();
        let result = table.add_many(vec![
            Item::new(1, "Ore"),
            Item::new(2, "Bar"),
            Item::new(1, "Dup"),
            Item::new(3, "Never"),
        ]);
        assert!(result.unwrap_err().is_conflict());
        assert_eq!(table.len(), 2);
        assert!(!table.contains_key(3));
    }

    #[test]
    fn test_add_many_ack_message() {
        let table = Table::<Recipe>::new();
        let ack = table.add_many(vec![Recipe::new(1, "Smelt", "")]).unwrap();
        assert_eq!(ack.message, "Recipes added successfully");
    }

    #[test]
    fn test_get_one_missing() {
        let table = Table::<Recipe>::new();
        let err = table.get_one(9).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Recipe with id 9 not found");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_delete_present_and_absent() {
        let table = Table::<Item>::new();
        table
            .add_many(vec![Item::new(1, "Ore"), Item::new(2, "Bar")])
            .unwrap();

        let ack = table.delete(1).unwrap();
        assert_eq!(ack.message, "Item deleted successfully");
        assert_eq!(table.len(), 1);
        assert!(table.get_one(1).unwrap_err().is_not_found());

        assert!(table.delete(1).unwrap_err().is_not_found());
        assert!(table.delete(42).unwrap_err().is_not_found());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_update_in_place_keeps_position() {
        let table = Table::<Item>::new();
        table
            .add_many(vec![Item::new(1, "Ore"), Item::new(2, "Bar"), Item::new(3, "Gear")])
            .unwrap();

        let ack = table.update_or_create(2, Item::new(2, "Ingot")).unwrap();
        assert_eq!(ack.message, "Item updated successfully");
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get_many(),
            vec![Item::new(1, "Ore"), Item::new(2, "Ingot"), Item::new(3, "Gear")]
        );
    }

    #[test]
    fn test_update_or_create_creates_when_absent() {
        let table = Table::<Item>::new();
        let ack = table.update_or_create(4, Item::new(4, "Coil")).unwrap();
        assert_eq!(ack.message, "Item created successfully");
        assert_eq!(table.get_one(4).unwrap().name, "Coil");
    }

    #[test]
    fn test_update_rename_moves_record() {
        let table = Table::<Item>::new();
        table
            .add_many(vec![Item::new(1, "Ore"), Item::new(2, "Bar")])
            .unwrap();

        table.update_or_create(1, Item::new(10, "Ore")).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.get_one(1).unwrap_err().is_not_found());
        assert_eq!(table.get_one(10).unwrap(), Item::new(10, "Ore"));
        assert_eq!(
            table.get_many(),
            vec![Item::new(2, "Bar"), Item::new(10, "Ore")]
        );
    }

    #[test]
    fn test_update_rename_errors() {
        let table = Table::<Item>::new();
        table
            .add_many(vec![Item::new(1, "Ore"), Item::new(2, "Bar")])
            .unwrap();

        let err = table.update_or_create(7, Item::new(8, "X")).unwrap_err();
        assert_eq!(err.to_string(), "Item with id 7 not found");

        let err = table.update_or_create(1, Item::new(2, "X")).unwrap_err();
        assert_eq!(err.to_string(), "ITEM_ID 2 already exists");

        assert_eq!(
            table.get_many(),
            vec![Item::new(1, "Ore"), Item::new(2, "Bar")]
        );
    }

    #[test]
    fn test_ingredient_scenario() {
        let f = seeded();
        f.ingredients.add_one(Ingredient::new(1, 1, 1, 2)).unwrap();

        let err = f.ingredients.add_one(Ingredient::new(2, 99, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            TableError::Conflict("ITEM_ID 99 does not exist in the item table".to_string())
        );
        assert_eq!(err.status_code(), 409);
        assert_eq!(f.ingredients.get_many(), vec![Ingredient::new(1, 1, 1, 2)]);
    }

    #[test]
    fn test_missing_recipe_reference() {
        let f = seeded();
        let err = f.products.add_one(Product::new(1, 1, 5, 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "RECIPE_ID 5 does not exist in the recipe table"
        );
        assert!(f.products.is_empty());
    }

    #[test]
    fn test_duplicate_key_checked_before_references() {
        let f = seeded();
        f.products.add_one(Product::new(1, 1, 1, 1)).unwrap();
        let err = f.products.add_one(Product::new(1, 99, 99, 1)).unwrap_err();
        assert_eq!(err.to_string(), "PRODUCT_ID 1 already exists");
    }

    #[test]
    fn test_update_revalidates_references() {
        let f = seeded();
        f.products.add_one(Product::new(1, 1, 1, 3)).unwrap();

        let err = f
            .products
            .update_or_create(1, Product::new(1, 42, 1, 3))
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(f.products.get_one(1).unwrap(), Product::new(1, 1, 1, 3));

        let err = f
            .products
            .update_or_create(1, Product::new(2, 1, 42, 3))
            .unwrap_err();
        assert!(err.is_conflict());
        assert!(f.products.contains_key(1));
        assert!(!f.products.contains_key(2));

        f.products
            .update_or_create(1, Product::new(1, 1, 1, 6))
            .unwrap();
        assert_eq!(f.products.get_one(1).unwrap().rate, 6);
    }

    #[test]
    fn test_delete_does_not_cascade() {
        let f = seeded();
        f.ingredients.add_one(Ingredient::new(1, 1, 1, 2)).unwrap();

        f.items.delete(1).unwrap();
        assert_eq!(f.ingredients.get_one(1).unwrap().item_id, 1);

        // The dangling row can still be updated only once the reference is back.
        assert!(
            f.ingredients
                .update_or_create(1, Ingredient::new(1, 1, 1, 4))
                .unwrap_err()
                .is_conflict()
        );
        f.items.add_one(Item::new(1, "Ore")).unwrap();
        f.ingredients
            .update_or_create(1, Ingredient::new(1, 1, 1, 4))
            .unwrap();
    }

    #[test]
    fn test_query() {
        let f = seeded();
        f.items.add_one(Item::new(2, "Bar")).unwrap();
        f.recipes.add_one(Recipe::new(2, "Forge", "")).unwrap();
        f.ingredients
            .add_many(vec![
                Ingredient::new(1, 1, 1, 2),
                Ingredient::new(2, 2, 2, 1),
                Ingredient::new(3, 1, 2, 4),
                Ingredient::new(4, 2, 1, 1),
            ])
            .unwrap();

        assert_eq!(f.ingredients.query(&Filter::new()).unwrap().len(), 4);

        let by_item = f.ingredients.query(&Filter::new().with("ITEM_ID", 1)).unwrap();
        let keys: Vec<i64> = by_item.iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec![1, 3]);

        let both = f
            .ingredients
            .query(&Filter::new().with("ITEM_ID", 2).with("RECIPE_ID", 1))
            .unwrap();
        assert_eq!(both, vec![Ingredient::new(4, 2, 1, 1)]);

        let none = f.ingredients.query(&Filter::new().with("RATE", 100)).unwrap();
        assert!(none.is_empty());

        let err = f
            .ingredients
            .query(&Filter::new().with("NAME", "Ore"))
            .unwrap_err();
        assert!(matches!(err, TableError::UnknownColumn { .. }));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_query_by_text_column() {
        let table = Table::<Recipe>::new();
        table
            .add_many(vec![
                Recipe::new(1, "Smelt", ""),
                Recipe::new(2, "Forge", "hot"),
                Recipe::new(3, "Smelt", "again"),
            ])
            .unwrap();

        let smelts = table.query(&Filter::new().with("NAME", "Smelt")).unwrap();
        assert_eq!(smelts.len(), 2);
        assert_eq!(smelts[1].recipe_id, 3);

        let blank = table.query(&Filter::new().with("DESCRIPTION", "")).unwrap();
        assert_eq!(blank, vec![Recipe::new(1, "Smelt", "")]);
    }

    #[test]
    fn test_record_table_fills_defaults() {
        let table = Table::<Recipe>::new();
        let records = vec![
            json!({"RECIPE_ID": 1, "NAME": "Smelt"})
                .as_object()
                .cloned()
                .unwrap(),
        ];
        table.add_records(records).unwrap();

        let out = table.records().unwrap();
        assert_eq!(out[0].get("DESCRIPTION"), Some(&json!("")));
        assert_eq!(RecordTable::name(&table), "recipes");
        assert_eq!(table.record_count(), 1);
    }

    #[test]
    fn test_record_table_rejects_malformed() {
        let table = Table::<Item>::new();
        let records = vec![json!({"ITEM_ID": "one"}).as_object().cloned().unwrap()];
        let err = table.add_records(records).unwrap_err();
        assert!(matches!(err, TableError::InvalidRecord(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        let f = seeded();
        let ingredients = Arc::new(f.ingredients);
        let mut handles = Vec::new();

        for t in 0..4i64 {
            let ingredients = Arc::clone(&ingredients);
            let items = Arc::clone(&f.items);
            handles.push(thread::spawn(move || {
                for i in 0..50i64 {
                    let id = t * 1000 + i;
                    let _ = items.update_or_create(1, Item::new(1, "Ore"));
                    ingredients.add_one(Ingredient::new(id, 1, 1, i)).unwrap();
                    // Every thread also races on one shared key.
                    let _ = ingredients.add_one(Ingredient::new(-1, 1, 1, 0));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ingredients.len(), 4 * 50 + 1);
        let mut keys: Vec<i64> = ingredients.get_many().iter().map(|r| r.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4 * 50 + 1);
    }
}
