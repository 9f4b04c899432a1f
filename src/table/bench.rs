use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::thread;

use crafter::entity::{Ingredient, Item, Recipe};
use crafter::query::Filter;
use crafter::table::{Table, TableBuilder, TableInterface};

// Test configuration
const THREAD_COUNT: i64 = 8;
const OPERATIONS_PER_THREAD: i64 = 1_000;
const SEED_ROWS: i64 = 10_000;

fn ingredient_table() -> (Arc<Table<Item>>, Arc<Table<Recipe>>, Arc<Table<Ingredient>>) {
    let items = Arc::new(Table::<Item>::new());
    let recipes = Arc::new(Table::<Recipe>::new());
    items.add_one(Item::new(1, "Ore")).unwrap();
    recipes.add_one(Recipe::new(1, "Smelt", "")).unwrap();
    let ingredients = TableBuilder::<Ingredient>::new()
        .references("ITEM_ID", items.clone())
        .references("RECIPE_ID", recipes.clone())
        .try_build()
        .unwrap();
    (items, recipes, Arc::new(ingredients))
}

// Single-threaded inserts with foreign-key checks
pub fn bench_add_one_with_references(c: &mut Criterion) {
    let mut group = c.benchmark_group("AddOne");

    group.bench_function("Ingredient", |b| {
        b.iter(|| {
            let (_items, _recipes, ingredients) = ingredient_table();
            for i in 0..OPERATIONS_PER_THREAD {
                ingredients.add_one(Ingredient::new(i, 1, 1, i)).unwrap();
            }
        });
    });

    group.finish();
}

// Concurrent inserts contending on the same table
pub fn bench_concurrent_add_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("ConcurrentAddOne");

    group.bench_function("Ingredient", |b| {
        b.iter(|| {
            let (_items, _recipes, ingredients) = ingredient_table();

            let handles: Vec<_> = (0..THREAD_COUNT)
                .map(|thread_id| {
                    let ingredients = ingredients.clone();
                    thread::spawn(move || {
                        for i in 0..OPERATIONS_PER_THREAD {
                            let id = thread_id * OPERATIONS_PER_THREAD + i;
                            ingredients.add_one(Ingredient::new(id, 1, 1, i)).unwrap();
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// In-place upserts and equality queries over a seeded table
pub fn bench_update_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReadWrite");
    let table = Table::<Item>::new();
    let seed: Vec<Item> = (0..SEED_ROWS)
        .map(|i| Item::new(i, format!("item-{}", i % 100)))
        .collect();
    table.add_many(seed).unwrap();

    group.bench_function("UpdateInPlace", |b| {
        let mut key = 0;
        b.iter(|| {
            key = (key + 1) % SEED_ROWS;
            table
                .update_or_create(key, Item::new(key, "renamed"))
                .unwrap();
        });
    });

    group.bench_function("QueryByName", |b| {
        let filter = Filter::new().with("NAME", "item-42");
        b.iter(|| black_box(table.query(&filter).unwrap()));
    });

    group.bench_function("NextId", |b| {
        b.iter(|| black_box(table.get_next_id().unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_one_with_references,
    bench_concurrent_add_one,
    bench_update_and_query
);

criterion_main!(benches);
