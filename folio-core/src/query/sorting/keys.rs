//! Sort key types for comparing catalog records
//!
//! These types wrap the values extracted from records and handle missing data
//! in their comparisons so that every pair of records stays orderable.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Keys that can be compared for ranking.
pub trait SortKey: Ord + Clone {
    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys in the requested direction while keeping missing
    /// values last either way.
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if reverse {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}

/// Favorite count with the unset state already folded into zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct FavoriteKey(u32);

impl FavoriteKey {
    pub fn new(value: Option<u32>) -> Self {
        FavoriteKey(value.unwrap_or(0))
    }
}

impl SortKey for FavoriteKey {
    fn is_missing(&self) -> bool {
        false
    }
}

/// Case-folded title
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TitleKey(Option<String>);

impl TitleKey {
    pub fn new(value: Option<&str>) -> Self {
        TitleKey(value.map(str::to_lowercase))
    }
}

impl Ord for TitleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Titled records come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for TitleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for TitleKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Date/time key for recency ordering
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalDateKey(Option<DateTime<Utc>>);

impl OptionalDateKey {
    pub fn new(value: Option<DateTime<Utc>>) -> Self {
        OptionalDateKey(value)
    }
}

impl Ord for OptionalDateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with dates come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalDateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalDateKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}
