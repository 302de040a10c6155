//! Startup configuration loading.
//!
//! [`ConfigLoader`] reads an optional `.env` file, resolves the
//! [`CatalogConfig`] either from an explicit path or through the environment
//! lookup chain, and runs the guard rails before handing the result back.

pub mod error;

use crate::{
    models::{CatalogConfig, CatalogConfigSource},
    validation::{ConfigWarnings, apply_guard_rails},
};
use error::ConfigLoadError;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Validated configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The resolved configuration.
    pub config: CatalogConfig,
    /// Which file, variable or default produced `config`.
    pub source: CatalogConfigSource,
    /// Non-fatal guard rail findings.
    pub warnings: ConfigWarnings,
}

/// Builder that resolves and validates a [`CatalogConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    skip_env_file: bool,
}

impl ConfigLoader {
    /// Loader that reads `./.env` and walks the environment chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file instead of walking the environment chain.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read variables from this file instead of `./.env`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Directory searched for `folio.toml` and friends.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Skip `.env` handling entirely.
    pub fn without_env_file(mut self) -> Self {
        self.skip_env_file = true;
        self
    }

    /// Read the `.env` file, then resolve against the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_env_file()?;
        self.load_with_lookup(|key| env::var(key).ok())
    }

    /// Resolve and validate with an injected variable lookup. The `.env`
    /// file is not read.
    pub fn load_with_lookup<F>(
        &self,
        lookup: F,
    ) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = match &self.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingFile {
                        path: path.clone(),
                    });
                }
                let config = CatalogConfig::load_from_file(path)
                    .map_err(ConfigLoadError::Catalog)?;
                (config, CatalogConfigSource::Explicit(path.clone()))
            }
            None => {
                let base_dir =
                    self.base_dir.as_deref().unwrap_or(Path::new("."));
                CatalogConfig::load_with(lookup, base_dir)
                    .map_err(ConfigLoadError::Catalog)?
            }
        };

        let warnings = apply_guard_rails(&config)?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => warn!(hint = %hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }
        info!(?source, "catalog configuration loaded");

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn load_env_file(&self) -> Result<(), ConfigLoadError> {
        if self.skip_env_file {
            return Ok(());
        }

        let result = match &self.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };

        match result {
            Ok(()) => Ok(()),
            Err(err) if err.not_found() && self.env_file.is_none() => {
                debug!("no .env file found");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
