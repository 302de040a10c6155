pub mod facade;
pub mod pager;
pub mod predicate;
pub mod sorting;
pub mod types;

pub use facade::{CatalogQuery, normalize_detail, paged_by_recency};
pub use pager::{ClampPolicy, PageRequest, PageWindow, PagedResult, paginate};
pub use predicate::{MatchStrategy, StructuredQuery, TextQuery};
pub use sorting::{RankingPolicy, rank};
pub use types::SortDirection;
