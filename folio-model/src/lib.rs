//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub use ::chrono;
pub use ::rust_decimal;

pub mod ids;
pub mod record;

pub use ids::BookId;
pub use record::CatalogRecord;
