//! Configuration for Folio processes.
//!
//! Resolves a [`CatalogConfig`] from an explicit path, the `FOLIO_CONFIG_*`
//! environment variables, a `folio.toml` next to the process, or built-in
//! defaults, then validates it. `.env` files are read through `dotenvy`.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, CatalogConfig, CatalogConfigSource,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
