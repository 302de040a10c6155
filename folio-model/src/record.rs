use crate::ids::BookId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One book in the catalog snapshot.
///
/// Everything except the identifier may be missing; the query engine resolves
/// missing values through its own defaulting rules instead of rejecting the
/// record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CatalogRecord {
    pub id: BookId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<Decimal>,
    /// Popularity counter; `None` means the store never initialised it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub favorite_count: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_updated: Option<DateTime<Utc>>,
}

impl CatalogRecord {
    /// Bare record carrying only its identifier.
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            title: None,
            author: None,
            category: None,
            description: None,
            price: None,
            favorite_count: None,
            last_updated: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_favorite_count(mut self, count: u32) -> Self {
        self.favorite_count = Some(count);
        self
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Favorite count with the unset state read as zero.
    pub fn favorite_count_or_zero(&self) -> u32 {
        self.favorite_count.unwrap_or(0)
    }
}
