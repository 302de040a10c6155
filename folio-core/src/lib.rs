//! # Folio Core
//!
//! Catalog query engine for the Folio bookstore service.
//!
//! Callers hand the engine an in-memory snapshot of [`CatalogRecord`]s and get
//! back filtered, ranked and paginated results. Nothing here keeps catalog
//! state between calls; the persistence collaborator sits behind
//! [`store::CatalogStore`].
//!
//! ## Architecture
//!
//! - [`query`]: predicate engine, ranking engine, pager and the
//!   [`query::CatalogQuery`] facade that composes them
//! - [`counter`]: saturating favorite-count arithmetic
//! - [`store`]: the persistence port plus an in-memory implementation
//! - [`service`]: async orchestration of snapshot fetches, facade calls and
//!   counter persistence
//!
//! ## Examples
//!
//! ```
//! use folio_core::query::{CatalogQuery, SortDirection};
//! use folio_core::settings::CatalogSettings;
//! use folio_model::{BookId, CatalogRecord};
//!
//! let id = |raw| BookId::from_raw(Some(raw)).unwrap();
//! let snapshot = vec![
//!     CatalogRecord::new(id(1))
//!         .with_title("Effective Java")
//!         .with_favorite_count(80),
//!     CatalogRecord::new(id(2))
//!         .with_title("Java Basics")
//!         .with_favorite_count(100),
//! ];
//! let settings = CatalogSettings::default();
//!
//! let ranked = CatalogQuery::new(&snapshot, &settings)
//!     .list_all_ranked_by_favorites(Some("java"), SortDirection::Descending);
//! assert_eq!(ranked[0].title.as_deref(), Some("Java Basics"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Saturating favorite counters
pub mod counter;

/// Error types and error handling utilities
pub mod error;

/// Filtering, ranking and pagination over catalog snapshots
pub mod query;

/// Async orchestration over a catalog store
pub mod service;

/// Engine tunables
pub mod settings;

/// Persistence port consumed by the service
pub mod store;

pub use counter::{CounterOutcome, CounterUpdate, FavoriteCountDelta};
pub use error::{CatalogError, Result};
pub use folio_model::{BookId, CatalogRecord};
pub use service::CatalogService;
pub use settings::CatalogSettings;
