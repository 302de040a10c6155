//! Async catalog service.
//!
//! Wires a [`CatalogStore`] to the query facade: every read fetches a fresh
//! snapshot, and counter requests are resolved, regulated and written back
//! here. Store faults propagate as [`CatalogError`](crate::CatalogError);
//! everything else follows the facade's "negative result, not an error"
//! convention.

use crate::{
    counter::{self, CounterOutcome, FavoriteCountDelta},
    error::Result,
    query::{
        facade::{CatalogQuery, normalize_detail},
        pager::{PageRequest, PagedResult},
        predicate::TextQuery,
        types::SortDirection,
    },
    settings::CatalogSettings,
    store::CatalogStore,
};
use folio_model::{BookId, CatalogRecord};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
    settings: CatalogSettings,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S, settings: CatalogSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    pub async fn list_all(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<CatalogRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(CatalogQuery::new(&snapshot, &self.settings).list_all(query))
    }

    /// Store-backed listing; paging is delegated to [`CatalogStore::page`].
    pub async fn list_paged(
        &self,
        page: usize,
        size: usize,
        query: Option<&str>,
    ) -> Result<PagedResult<CatalogRecord>> {
        self.store
            .page(PageRequest::new(page, size), &TextQuery::new(query))
            .await
    }

    pub async fn advanced_search(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        category: Option<&str>,
        page: usize,
        size: usize,
    ) -> Result<PagedResult<CatalogRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(CatalogQuery::new(&snapshot, &self.settings)
            .advanced_search(title, author, category, page, size))
    }

    pub async fn search_ranked_by_favorites(
        &self,
        page: usize,
        size: usize,
        query: Option<&str>,
        direction: SortDirection,
    ) -> Result<PagedResult<CatalogRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(CatalogQuery::new(&snapshot, &self.settings)
            .search_ranked_by_favorites(page, size, query, direction))
    }

    pub async fn list_all_ranked_by_favorites(
        &self,
        query: Option<&str>,
        direction: SortDirection,
    ) -> Result<Vec<CatalogRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(CatalogQuery::new(&snapshot, &self.settings)
            .list_all_ranked_by_favorites(query, direction))
    }

    /// Normalized detail view. Invalid and unknown ids give `None`.
    pub async fn get_detail(
        &self,
        id: Option<i64>,
    ) -> Result<Option<CatalogRecord>> {
        let Some(id) = BookId::from_raw(id) else {
            return Ok(None);
        };
        let record = self.store.find_by_id(id).await?;
        Ok(record.map(|record| normalize_detail(&record, &self.settings)))
    }

    /// Resolve, regulate and persist a favorite-count change.
    ///
    /// Returns `None` when the id is invalid or unknown. The record is only
    /// written when the regulator changed the value.
    pub async fn apply_favorite_delta(
        &self,
        id: Option<i64>,
        delta: FavoriteCountDelta,
    ) -> Result<Option<CounterOutcome>> {
        let Some(book_id) = BookId::from_raw(id) else {
            warn!(?id, ?delta, "rejecting favorite count change, bad id");
            return Ok(None);
        };
        let Some(mut record) = self.store.find_by_id(book_id).await? else {
            warn!(id = %book_id, ?delta, "favorite count for unknown book");
            return Ok(None);
        };

        let ceiling = self.settings.effective_ceiling();
        let outcome = counter::apply_to_record(&mut record, delta, ceiling);
        match outcome {
            CounterOutcome::Changed(value) => {
                self.store.persist(&record).await.inspect_err(|err| {
                    warn!(
                        id = %book_id,
                        error = %err,
                        "failed to persist favorite count"
                    );
                })?;
                info!(
                    id = %book_id,
                    ?delta,
                    favorite_count = value,
                    "favorite count updated"
                );
            }
            CounterOutcome::Unchanged => {
                debug!(id = %book_id, ?delta, "favorite count at floor");
            }
            CounterOutcome::Rejected => {
                warn!(
                    id = %book_id,
                    ceiling,
                    "favorite count at ceiling, increment refused"
                );
            }
        }

        Ok(Some(outcome))
    }

    /// `true` when the increment completed; `false` for invalid ids, unknown
    /// books and saturated counters.
    pub async fn increment_favorite_count(
        &self,
        id: Option<i64>,
    ) -> Result<bool> {
        let outcome = self
            .apply_favorite_delta(id, FavoriteCountDelta::Increment)
            .await?;
        Ok(outcome.is_some_and(|outcome| outcome.is_success()))
    }

    /// `true` when the decrement completed, including the no-op at zero.
    pub async fn decrement_favorite_count(
        &self,
        id: Option<i64>,
    ) -> Result<bool> {
        let outcome = self
            .apply_favorite_delta(id, FavoriteCountDelta::Decrement)
            .await?;
        Ok(outcome.is_some_and(|outcome| outcome.is_success()))
    }
}
