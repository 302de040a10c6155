use super::CatalogStore;
use crate::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use folio_model::{BookId, CatalogRecord};
use std::sync::Arc;

/// Catalog kept in a concurrent map keyed by id.
///
/// Clones share the same map. Snapshots are returned in ascending id order so
/// that ties in later ranking stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    records: Arc<DashMap<BookId, CatalogRecord>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(
        records: impl IntoIterator<Item = CatalogRecord>,
    ) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Insert or replace, returning the previous record with that id.
    pub fn insert(&self, record: CatalogRecord) -> Option<CatalogRecord> {
        self.records.insert(record.id, record)
    }

    pub fn get(&self, id: BookId) -> Option<CatalogRecord> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in ascending id order.
    pub fn records(&self) -> Vec<CatalogRecord> {
        let mut records: Vec<CatalogRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.id);
        records
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn snapshot(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.records())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<CatalogRecord>> {
        Ok(self.get(id))
    }

    async fn persist(&self, record: &CatalogRecord) -> Result<()> {
        self.insert(record.clone());
        Ok(())
    }
}
