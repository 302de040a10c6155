//! Public query operations over one catalog snapshot.
//!
//! [`CatalogQuery`] borrows the caller's snapshot for the duration of a call
//! and composes predicate → ranking → pager. Results are fresh copies; the
//! snapshot itself is never modified.

use crate::{
    counter::{self, CounterUpdate, FavoriteCountDelta},
    query::{
        pager::{ClampPolicy, PageRequest, PagedResult, paginate},
        predicate::{StructuredQuery, TextQuery},
        sorting::{RankingPolicy, rank},
        types::SortDirection,
    },
    settings::CatalogSettings,
};
use folio_model::{BookId, CatalogRecord};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Query facade bound to a snapshot and the engine settings.
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    snapshot: &'a [CatalogRecord],
    settings: &'a CatalogSettings,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(
        snapshot: &'a [CatalogRecord],
        settings: &'a CatalogSettings,
    ) -> Self {
        Self { snapshot, settings }
    }

    fn filter_text(&self, query: &TextQuery) -> Vec<CatalogRecord> {
        self.snapshot
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect()
    }

    /// Free-text filter over the whole snapshot, newest first.
    pub fn list_all(&self, query: Option<&str>) -> Vec<CatalogRecord> {
        let query = TextQuery::new(query);
        let candidates = self.filter_text(&query);
        debug!(
            candidates = candidates.len(),
            snapshot = self.snapshot.len(),
            "list_all filtered snapshot"
        );
        rank(candidates, RankingPolicy::Recency)
    }

    /// Free-text filter, newest first, paged the way the store pages:
    /// a page past the end is empty.
    pub fn list_paged(
        &self,
        page: usize,
        size: usize,
        query: Option<&str>,
    ) -> PagedResult<CatalogRecord> {
        paged_by_recency(
            self.snapshot,
            &TextQuery::new(query),
            PageRequest::new(page, size),
        )
    }

    /// Structured title/author/category search, newest first. Pages past the
    /// end fall back to the last full page.
    pub fn advanced_search(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        category: Option<&str>,
        page: usize,
        size: usize,
    ) -> PagedResult<CatalogRecord> {
        let query = StructuredQuery::new(title, author, category);
        let candidates: Vec<CatalogRecord> = self
            .snapshot
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        debug!(
            candidates = candidates.len(),
            page,
            size,
            "advanced_search filtered snapshot"
        );

        paginate(
            rank(candidates, RankingPolicy::Recency),
            PageRequest::new(page, size),
            ClampPolicy::LastFullPage,
        )
    }

    /// Free-text filter ranked by favorite count with the direction-dependent
    /// tie-break. Pages past the end fall back to the first page.
    pub fn search_ranked_by_favorites(
        &self,
        page: usize,
        size: usize,
        query: Option<&str>,
        direction: SortDirection,
    ) -> PagedResult<CatalogRecord> {
        let candidates = self.filter_text(&TextQuery::new(query));
        debug!(
            candidates = candidates.len(),
            page,
            size,
            ?direction,
            "search_ranked_by_favorites filtered snapshot"
        );

        paginate(
            rank(candidates, RankingPolicy::Favorites(direction)),
            PageRequest::new(page, size),
            ClampPolicy::FirstPage,
        )
    }

    /// Free-text filter ranked by favorite count alone, unpaged.
    pub fn list_all_ranked_by_favorites(
        &self,
        query: Option<&str>,
        direction: SortDirection,
    ) -> Vec<CatalogRecord> {
        let candidates = self.filter_text(&TextQuery::new(query));
        rank(candidates, RankingPolicy::FavoritesOnly(direction))
    }

    /// Snapshot lookup by raw identifier. Invalid identifiers find nothing.
    pub fn find(&self, id: Option<i64>) -> Option<&'a CatalogRecord> {
        let id = BookId::from_raw(id)?;
        self.snapshot.iter().find(|record| record.id == id)
    }

    /// Normalized copy of a record for detail views.
    pub fn get_detail(&self, id: Option<i64>) -> Option<CatalogRecord> {
        self.find(id)
            .map(|record| normalize_detail(record, self.settings))
    }

    /// Run the counter regulator against the record `id` resolves to.
    ///
    /// The snapshot is left untouched; a changed record comes back inside the
    /// [`CounterUpdate`] for the caller to persist.
    pub fn update_favorite_count(
        &self,
        id: Option<i64>,
        delta: FavoriteCountDelta,
    ) -> CounterUpdate {
        let Some(found) = self.find(id) else {
            warn!(?id, ?delta, "favorite count update for unknown id");
            return CounterUpdate::Missing;
        };

        let mut record = found.clone();
        let ceiling = self.settings.effective_ceiling();
        let outcome = counter::apply_to_record(&mut record, delta, ceiling);
        debug!(id = %record.id, ?delta, ?outcome, "favorite count regulated");

        CounterUpdate::Applied { record, outcome }
    }

    pub fn increment_favorite_count(&self, id: Option<i64>) -> CounterUpdate {
        self.update_favorite_count(id, FavoriteCountDelta::Increment)
    }

    pub fn decrement_favorite_count(&self, id: Option<i64>) -> CounterUpdate {
        self.update_favorite_count(id, FavoriteCountDelta::Decrement)
    }
}

/// Free-text filter, recency order, unclamped paging.
///
/// Shared by the facade and the provided `CatalogStore::page` method.
pub fn paged_by_recency(
    snapshot: &[CatalogRecord],
    query: &TextQuery,
    request: PageRequest,
) -> PagedResult<CatalogRecord> {
    let candidates: Vec<CatalogRecord> = snapshot
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect();

    paginate(
        rank(candidates, RankingPolicy::Recency),
        request,
        ClampPolicy::Unclamped,
    )
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Apply presentation defaults: placeholder author and category labels, and a
/// zero price when it is missing or negative.
pub fn normalize_detail(
    record: &CatalogRecord,
    settings: &CatalogSettings,
) -> CatalogRecord {
    let mut detail = record.clone();

    if is_blank(detail.author.as_deref()) {
        detail.author = Some(settings.unknown_author_label.clone());
    }
    if is_blank(detail.category.as_deref()) {
        detail.category = Some(settings.uncategorized_label.clone());
    }
    if detail.price.is_none_or(|price| price < Decimal::ZERO) {
        detail.price = Some(Decimal::new(0, 2));
    }

    detail
}
