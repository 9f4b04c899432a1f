//! Crafter main program entry
//!
//! Loads the table snapshot, reports the inventory, and offloads it again on
//! shutdown. An optional first argument names a JSON config file.

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use anyhow::Context;
use crafter::logging::init_logging;
use crafter::persist::{JsonFs, RecordStore};
use crafter::table::RecordTable;
use crafter::types::CrafterConfig;
use crafter::{OffloadGuard, Store};
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => CrafterConfig::from_file(&path)
            .with_context(|| format!("failed to load config file {}", path))?,
        None => CrafterConfig::default(),
    };

    init_logging(config.log_level);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.data_dir.display(),
        "Crafter store starting"
    );

    let snapshot: Arc<dyn RecordStore> = Arc::new(JsonFs::from_config(&config));
    let store = Arc::new(Store::open(snapshot.as_ref()).context("failed to load tables")?);
    let guard = OffloadGuard::new(Arc::clone(&store), snapshot);

    for table in store.tables() {
        info!(table = table.name(), records = table.record_count(), "table ready");
    }

    guard.finish().context("failed to offload tables")?;
    info!("Crafter store stopped");
    Ok(())
}
