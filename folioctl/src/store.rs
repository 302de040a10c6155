use async_trait::async_trait;
use folio_core::{
    CatalogError, Result,
    store::{CatalogStore, InMemoryCatalogStore},
};
use folio_model::{BookId, CatalogRecord};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog snapshot backed by a JSON array on disk.
///
/// The file is read once on open and must not repeat an id. Every persisted
/// record rewrites the whole file through a sibling temp file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: InMemoryCatalogStore,
}

impl JsonFileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = tokio::fs::read(&path).await?;
        let records: Vec<CatalogRecord> = serde_json::from_slice(&raw)?;
        let count = records.len();

        let store = InMemoryCatalogStore::new();
        for record in records {
            let id = record.id;
            if store.insert(record).is_some() {
                return Err(CatalogError::Store(format!(
                    "duplicate book id {id} in {}",
                    path.display()
                )));
            }
        }
        debug!(
            path = %path.display(),
            records = count,
            "catalog snapshot loaded"
        );

        Ok(Self {
            path,
            records: store,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self) -> Result<()> {
        let rendered = serde_json::to_vec_pretty(&self.records.records())?;
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, rendered).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        debug!(path = %self.path.display(), "catalog snapshot written");
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn snapshot(&self) -> Result<Vec<CatalogRecord>> {
        self.records.snapshot().await
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<CatalogRecord>> {
        self.records.find_by_id(id).await
    }

    async fn persist(&self, record: &CatalogRecord) -> Result<()> {
        self.records.persist(record).await?;
        self.flush().await
    }
}
