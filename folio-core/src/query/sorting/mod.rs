//! Ranking of candidate records
//!
//! This module provides:
//! - Sort keys that keep missing data last
//! - The ranking policies used by the query facade
//! - A stable sort that extracts keys once per record

pub mod keys;

pub use keys::*;

use crate::query::types::SortDirection;
use folio_model::CatalogRecord;
use std::cmp::Ordering;

/// Order applied to a filtered candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingPolicy {
    /// Most recently updated first; records never updated go last.
    Recency,
    /// Favorite count in the given direction. Ascending ties fall back to the
    /// title (A to Z, case-insensitive), descending ties to recency.
    Favorites(SortDirection),
    /// Favorite count only; ties keep their snapshot order.
    FavoritesOnly(SortDirection),
}

/// Keys pulled out of a record once before sorting.
#[derive(Debug, Clone)]
struct RankKey {
    favorites: FavoriteKey,
    title: TitleKey,
    updated: OptionalDateKey,
}

impl RankKey {
    fn extract(record: &CatalogRecord) -> Self {
        Self {
            favorites: FavoriteKey::new(record.favorite_count),
            title: TitleKey::new(record.title.as_deref()),
            updated: OptionalDateKey::new(record.last_updated),
        }
    }
}

fn compare_favorites(
    a: &RankKey,
    b: &RankKey,
    direction: SortDirection,
) -> Ordering {
    a.favorites
        .compare_with_order(&b.favorites, !direction.is_ascending())
}

fn compare_keys(a: &RankKey, b: &RankKey, policy: RankingPolicy) -> Ordering {
    match policy {
        RankingPolicy::Recency => {
            a.updated.compare_with_order(&b.updated, true)
        }
        RankingPolicy::Favorites(direction) => {
            compare_favorites(a, b, direction).then_with(|| match direction {
                SortDirection::Ascending => {
                    a.title.compare_with_order(&b.title, false)
                }
                SortDirection::Descending => {
                    a.updated.compare_with_order(&b.updated, true)
                }
            })
        }
        RankingPolicy::FavoritesOnly(direction) => {
            compare_favorites(a, b, direction)
        }
    }
}

/// Compare two records under `policy`.
pub fn compare_records(
    a: &CatalogRecord,
    b: &CatalogRecord,
    policy: RankingPolicy,
) -> Ordering {
    compare_keys(&RankKey::extract(a), &RankKey::extract(b), policy)
}

/// Sort `records` under `policy`. The sort is stable, so records that compare
/// equal keep the order they arrived in.
pub fn rank(
    records: Vec<CatalogRecord>,
    policy: RankingPolicy,
) -> Vec<CatalogRecord> {
    let mut keyed: Vec<(RankKey, CatalogRecord)> = records
        .into_iter()
        .map(|record| (RankKey::extract(&record), record))
        .collect();

    keyed.sort_by(|a, b| compare_keys(&a.0, &b.0, policy));

    keyed.into_iter().map(|(_, record)| record).collect()
}
