//! Property tests for the query facade and the counter regulator.

use chrono::{TimeZone, Utc};
use folio_core::{
    counter::{CounterOutcome, FavoriteCountDelta, regulate},
    query::{CatalogQuery, PageRequest, SortDirection, TextQuery},
    settings::CatalogSettings,
};
use folio_model::{BookId, CatalogRecord};
use proptest::prelude::*;

const WORDS: &[&str] =
    &["Java", "Rust", "Python", "Go", "Basics", "Primer", "Effective"];

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::collection::vec(prop::sample::select(WORDS), 1..3)
            .prop_map(|parts| parts.join(" ")),
    )
}

fn arb_record(id: u64) -> impl Strategy<Value = CatalogRecord> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        prop::option::of(0u32..50),
        prop::option::of(0i64..1_000),
    )
        .prop_map(move |(title, author, category, favorites, hours)| {
            let id = BookId::try_from(id as i64).expect("ids start at one");
            let mut record = CatalogRecord::new(id);
            record.title = title;
            record.author = author;
            record.category = category;
            record.favorite_count = favorites;
            record.last_updated = hours.and_then(|h| {
                Utc.timestamp_opt(1_700_000_000 + h * 3_600, 0).single()
            });
            record
        })
}

fn arb_snapshot() -> impl Strategy<Value = Vec<CatalogRecord>> {
    (0usize..24).prop_flat_map(|len| {
        (1..=len as u64)
            .map(arb_record)
            .collect::<Vec<_>>()
    })
}

fn arb_query() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(WORDS).prop_map(str::to_lowercase))
}

proptest! {
    #[test]
    fn list_all_only_returns_matching_records(
        snapshot in arb_snapshot(),
        query in arb_query(),
    ) {
        let settings = CatalogSettings::default();
        let facade = CatalogQuery::new(&snapshot, &settings);
        let text = TextQuery::new(query.as_deref());

        let listed = facade.list_all(query.as_deref());
        let expected = snapshot.iter().filter(|r| text.matches(r)).count();

        prop_assert_eq!(listed.len(), expected);
        prop_assert!(listed.iter().all(|r| text.matches(r)));
    }

    #[test]
    fn ranked_listing_is_monotonic_in_favorites(
        snapshot in arb_snapshot(),
        query in arb_query(),
        ascending in any::<bool>(),
    ) {
        let settings = CatalogSettings::default();
        let direction = if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        let facade = CatalogQuery::new(&snapshot, &settings);
        let ranked =
            facade.list_all_ranked_by_favorites(query.as_deref(), direction);
        let paged = facade.search_ranked_by_favorites(
            1,
            snapshot.len().max(1),
            query.as_deref(),
            direction,
        );
        prop_assert_eq!(paged.records.len(), ranked.len());

        for list in [&ranked, &paged.records] {
            for pair in list.windows(2) {
                let (a, b) = (
                    pair[0].favorite_count_or_zero(),
                    pair[1].favorite_count_or_zero(),
                );
                if ascending {
                    prop_assert!(a <= b);
                } else {
                    prop_assert!(a >= b);
                }
            }
        }

        for pair in paged.records.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.favorite_count_or_zero() != b.favorite_count_or_zero() {
                continue;
            }
            if ascending {
                let title = |r: &CatalogRecord| {
                    r.title.as_deref().map(str::to_lowercase)
                };
                match (title(a), title(b)) {
                    (Some(left), Some(right)) => prop_assert!(left <= right),
                    (None, right) => prop_assert!(right.is_none()),
                    (Some(_), None) => {}
                }
            } else {
                match (a.last_updated, b.last_updated) {
                    (Some(left), Some(right)) => prop_assert!(left >= right),
                    (None, right) => prop_assert!(right.is_none()),
                    (Some(_), None) => {}
                }
            }
        }
    }

    #[test]
    fn clamped_pages_have_the_exact_expected_length(
        snapshot in arb_snapshot(),
        page in 0usize..8,
        size in 0usize..8,
    ) {
        let settings = CatalogSettings::default();
        let facade = CatalogQuery::new(&snapshot, &settings);
        let total = snapshot.len();
        let raw_from = (page.max(1) - 1) * size;

        let advanced = facade.advanced_search(None, None, None, page, size);
        let from = if raw_from >= total {
            total.saturating_sub(size)
        } else {
            raw_from
        };
        prop_assert_eq!(advanced.total, total);
        prop_assert_eq!(advanced.records.len(), size.min(total - from));

        let ranked = facade.search_ranked_by_favorites(
            page,
            size,
            None,
            SortDirection::Descending,
        );
        let from = if raw_from >= total { 0 } else { raw_from };
        prop_assert_eq!(ranked.total, total);
        prop_assert_eq!(ranked.records.len(), size.min(total - from));
    }

    #[test]
    fn unclamped_pages_cover_the_listing_exactly_once(
        snapshot in arb_snapshot(),
        size in 1usize..6,
    ) {
        let settings = CatalogSettings::default();
        let facade = CatalogQuery::new(&snapshot, &settings);
        let listed = facade.list_all(None);

        let pages = snapshot.len().div_ceil(size) + 1;
        let mut seen = Vec::new();
        for page in 1..=pages {
            let result = facade.list_paged(page, size, None);
            prop_assert_eq!(
                result.total_pages(),
                snapshot.len().div_ceil(size)
            );
            seen.extend(result.records.into_iter().map(|r| r.id));
        }

        let expected: Vec<BookId> = listed.into_iter().map(|r| r.id).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn regulated_counters_respect_the_ceiling(
        current in prop::option::of(0u32..2_000),
        ceiling in 1u32..1_500,
        increment in any::<bool>(),
    ) {
        let delta = if increment {
            FavoriteCountDelta::Increment
        } else {
            FavoriteCountDelta::Decrement
        };
        let regulated = regulate(current, delta, ceiling);

        match regulated.outcome {
            CounterOutcome::Changed(value) => {
                prop_assert_eq!(regulated.value, Some(value));
                prop_assert!(value <= ceiling);
            }
            CounterOutcome::Unchanged => {
                prop_assert_eq!(regulated.value, Some(0));
            }
            CounterOutcome::Rejected => {
                prop_assert!(increment);
                prop_assert!(current.unwrap_or(0) >= ceiling);
                prop_assert_eq!(regulated.value, current);
            }
        }
    }

    #[test]
    fn page_requests_below_one_read_as_the_first_page(
        page in 0usize..2,
        size in 0usize..10,
    ) {
        prop_assert_eq!(PageRequest::new(page, size).effective_page(), 1);
    }
}
