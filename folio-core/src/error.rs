use thiserror::Error;

/// Faults raised by the catalog store collaborator.
///
/// Invalid identifiers, missing records and saturated counters are not
/// errors; they come back as `None`, `false` or an empty page.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
