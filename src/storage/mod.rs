// Catalog persistence behind one trait so pipeline stages never touch files directly.

pub mod json;
pub mod memory;
pub mod sqlite;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use chrono::Utc;

use crate::catalog::Catalog;
use crate::config::{AppConfig, StoreKind};
use crate::model::StorageError;
use crate::utils::format_datetime;

pub trait CatalogStore: Send {
    /// A store that has never been saved loads as an empty catalog.
    fn load(&self) -> Result<Catalog, StorageError>;
    /// Replaces the stored catalog as a whole.
    fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

pub fn open_store(config: &AppConfig) -> Result<Box<dyn CatalogStore>, StorageError> {
    Ok(match config.store {
        StoreKind::Json => Box::new(JsonFileStore::new(&config.catalog_path)),
        StoreKind::Sqlite => Box::new(SqliteStore::open(&config.sqlite_path)?),
    })
}

fn last_updated_or_now(catalog: &Catalog) -> String {
    catalog
        .last_updated()
        .map(str::to_string)
        .unwrap_or_else(|| format_datetime(&Utc::now()))
}
