//! Record predicates for free-text and structured search.
//!
//! Free-text queries match when the needle appears in any searchable field.
//! Structured queries carry independent per-field filters that must all pass;
//! how each filter compares is picked from a small length-bucket table so the
//! policy can be read (and tested) in one place.
//!
//! All comparisons are case-insensitive. A missing field never matches.

use folio_model::CatalogRecord;

/// Comparison applied by a single structured filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Whole field equals the needle.
    Exact,
    /// Field starts with the needle.
    Prefix,
    /// Needle appears anywhere in the field.
    Contains,
}

impl MatchStrategy {
    /// Compare `field` against an already lowercased needle.
    pub fn matches(self, field: &str, needle_lower: &str) -> bool {
        let field = field.to_lowercase();
        match self {
            MatchStrategy::Exact => field == needle_lower,
            MatchStrategy::Prefix => field.starts_with(needle_lower),
            MatchStrategy::Contains => field.contains(needle_lower),
        }
    }
}

/// Length-bucket decision table for one field.
///
/// Rows are `(max_len, strategy)` checked in order against the needle length
/// in characters; the first row whose bound covers the length wins and
/// `fallback` applies past the last bound.
#[derive(Debug, Clone, Copy)]
pub struct StrategyTable {
    buckets: &'static [(usize, MatchStrategy)],
    fallback: MatchStrategy,
}

impl StrategyTable {
    pub const fn new(
        buckets: &'static [(usize, MatchStrategy)],
        fallback: MatchStrategy,
    ) -> Self {
        Self { buckets, fallback }
    }

    pub fn strategy_for(&self, needle: &str) -> MatchStrategy {
        let len = needle.chars().count();
        self.buckets
            .iter()
            .find(|(max_len, _)| len <= *max_len)
            .map(|(_, strategy)| *strategy)
            .unwrap_or(self.fallback)
    }
}

/// Titles: up to 2 chars exact, 3 to 5 prefix, longer substring.
pub const TITLE_STRATEGIES: StrategyTable = StrategyTable::new(
    &[(2, MatchStrategy::Exact), (5, MatchStrategy::Prefix)],
    MatchStrategy::Contains,
);

/// Authors: always substring.
pub const AUTHOR_STRATEGIES: StrategyTable =
    StrategyTable::new(&[], MatchStrategy::Contains);

/// Categories: up to 3 chars exact, longer substring.
pub const CATEGORY_STRATEGIES: StrategyTable = StrategyTable::new(
    &[(3, MatchStrategy::Exact)],
    MatchStrategy::Contains,
);

/// Returns the input when it carries any non-whitespace text.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

/// Single-string query matched across title, author, category and
/// description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: Option<String>,
}

impl TextQuery {
    /// Blank input produces a query that matches every record. Non-blank input
    /// is used as given, surrounding whitespace included.
    pub fn new(raw: Option<&str>) -> Self {
        Self {
            needle: non_blank(raw).map(str::to_lowercase),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_none()
    }

    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    pub fn matches(&self, record: &CatalogRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        [
            record.title.as_deref(),
            record.author.as_deref(),
            record.category.as_deref(),
            record.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| MatchStrategy::Contains.matches(field, needle))
    }
}

/// One active structured filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    needle: String,
    strategy: MatchStrategy,
}

impl FieldFilter {
    fn from_raw(raw: Option<&str>, table: &StrategyTable) -> Option<Self> {
        non_blank(raw).map(|needle| Self {
            strategy: table.strategy_for(needle),
            needle: needle.to_lowercase(),
        })
    }

    /// A missing field fails the filter.
    pub fn matches(&self, field: Option<&str>) -> bool {
        field.is_some_and(|value| self.strategy.matches(value, &self.needle))
    }
}

/// Independent title/author/category filters combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredQuery {
    pub title: Option<FieldFilter>,
    pub author: Option<FieldFilter>,
    pub category: Option<FieldFilter>,
}

impl StructuredQuery {
    /// Blank filters are left unset and impose no constraint.
    pub fn new(
        title: Option<&str>,
        author: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        Self {
            title: FieldFilter::from_raw(title, &TITLE_STRATEGIES),
            author: FieldFilter::from_raw(author, &AUTHOR_STRATEGIES),
            category: FieldFilter::from_raw(category, &CATEGORY_STRATEGIES),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.category.is_none()
    }

    pub fn matches(&self, record: &CatalogRecord) -> bool {
        let passes = |filter: &Option<FieldFilter>, field: Option<&str>| {
            filter.as_ref().is_none_or(|filter| filter.matches(field))
        };

        passes(&self.title, record.title.as_deref())
            && passes(&self.author, record.author.as_deref())
            && passes(&self.category, record.category.as_deref())
    }
}
