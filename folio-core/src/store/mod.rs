//! Persistence port for the catalog.
//!
//! The engine never owns catalog state; the service asks a [`CatalogStore`]
//! for a snapshot on every call and hands counter changes back to it.

pub mod memory;

pub use memory::InMemoryCatalogStore;

use crate::{
    error::Result,
    query::{
        facade::paged_by_recency,
        pager::{PageRequest, PagedResult},
        predicate::TextQuery,
    },
};
use async_trait::async_trait;
use folio_model::{BookId, CatalogRecord};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Full current catalog.
    async fn snapshot(&self) -> Result<Vec<CatalogRecord>>;

    async fn find_by_id(&self, id: BookId) -> Result<Option<CatalogRecord>>;

    /// Write a record back, replacing any stored record with the same id.
    async fn persist(&self, record: &CatalogRecord) -> Result<()>;

    /// Store-side pagination for the plain listing: free-text filter, newest
    /// first, pages past the end are empty.
    ///
    /// Backends with a query language should override this; the provided
    /// version filters a full snapshot.
    async fn page(
        &self,
        request: PageRequest,
        query: &TextQuery,
    ) -> Result<PagedResult<CatalogRecord>> {
        let snapshot = self.snapshot().await?;
        Ok(paged_by_recency(&snapshot, query, request))
    }
}
