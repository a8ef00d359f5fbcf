use std::sync::Mutex;

use super::{last_updated_or_now, CatalogStore};
use crate::catalog::{Catalog, CatalogFile};
use crate::model::StorageError;

/// Keeps the last saved catalog in memory. Used for tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Option<CatalogFile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: &Catalog) -> Self {
        let store = Self::new();
        *store.slot() = Some(catalog.to_file(last_updated_or_now(catalog)));
        store
    }

    /// Snapshot of the last save, in exposed order.
    pub fn snapshot(&self) -> Option<CatalogFile> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<CatalogFile>> {
        self.saved.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> Result<Catalog, StorageError> {
        Ok(self
            .slot()
            .clone()
            .map(Catalog::from_file)
            .unwrap_or_default())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        *self.slot() = Some(catalog.to_file(last_updated_or_now(catalog)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CanonicalDeal;

    #[test]
    fn round_trips_in_memory() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.snapshot().is_none());

        let catalog = Catalog::from_deals(vec![CanonicalDeal::new("a", "Widget", "")]);
        store.save(&catalog).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        assert!(store.snapshot().unwrap().last_updated.is_some());
    }
}
