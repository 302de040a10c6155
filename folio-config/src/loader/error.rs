//! Errors raised while loading configuration.

use crate::validation::ConfigGuardRailError;

use std::path::PathBuf;
use thiserror::Error;

/// Why a [`ConfigLoader`](super::ConfigLoader) gave up.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load catalog configuration: {0}")]
    Catalog(#[source] anyhow::Error),
    #[error("config file {path} does not exist")]
    MissingFile { path: PathBuf },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
