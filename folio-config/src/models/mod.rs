//! Serde models for the configuration file.

pub mod catalog;

pub use catalog::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, CatalogConfig, CatalogConfigSource,
};
