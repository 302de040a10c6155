use serde::{Deserialize, Serialize};

/// Highest ceiling a favorite counter may be configured with.
pub const MAX_FAVORITE_CEILING: u32 = 1000;
/// Ceiling applied to favorite counters unless configured otherwise.
pub const DEFAULT_FAVORITE_CEILING: u32 = MAX_FAVORITE_CEILING;
/// Page size used by callers that do not pass one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Tunables for the query engine.
///
/// These only change presentation defaults and the counter ceiling; the
/// filtering and ranking rules themselves are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Highest value a favorite counter may reach through increments.
    /// Values above [`MAX_FAVORITE_CEILING`] are capped at it.
    pub favorite_ceiling: u32,
    /// Label shown in detail views when a record has no author.
    pub unknown_author_label: String,
    /// Label shown in detail views when a record has no category.
    pub uncategorized_label: String,
    /// Page size for callers that leave it unspecified.
    pub default_page_size: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            favorite_ceiling: DEFAULT_FAVORITE_CEILING,
            unknown_author_label: "Unknown author".to_string(),
            uncategorized_label: "Uncategorized".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogSettings {
    /// Ceiling handed to the counter regulator, never above
    /// [`MAX_FAVORITE_CEILING`].
    pub fn effective_ceiling(&self) -> u32 {
        self.favorite_ceiling.min(MAX_FAVORITE_CEILING)
    }
}
