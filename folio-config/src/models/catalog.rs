use anyhow::{Context, anyhow};
use folio_core::settings::CatalogSettings;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";

/// Environment variable carrying the whole config as inline JSON.
pub const CONFIG_JSON_ENV: &str = "FOLIO_CONFIG_JSON";

const DEFAULT_LOG_FILTER: &str = "info";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Source that produced the catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogConfigSource {
    /// Nothing was found; built-in defaults.
    #[default]
    Default,
    /// File named by `$FOLIO_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON from `$FOLIO_CONFIG_JSON`.
    EnvInline,
    /// Default file discovered in the base directory.
    File(PathBuf),
    /// Path passed explicitly, e.g. `folioctl --config`.
    Explicit(PathBuf),
}

/// Everything a Folio process reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Engine tunables: favorite ceiling, placeholder labels and the page
    /// size used when a caller does not pick one.
    pub catalog: CatalogSettings,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            catalog: CatalogSettings::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration using process environment variables.
    /// Evaluation order:
    /// 1) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$FOLIO_CONFIG_JSON` (inline JSON),
    /// 3) `folio.toml` / `folio.json` in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, CatalogConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same resolution as [`load_from_env`](Self::load_from_env) with an
    /// injected variable lookup and a base directory for the default files.
    pub fn load_with<F>(
        lookup: F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, CatalogConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, CatalogConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, CatalogConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, CatalogConfigSource::File(path)));
        }

        Ok((Self::default(), CatalogConfigSource::Default))
    }

    /// Load a file, picking the format from its extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read catalog config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid catalog config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid catalog config {}: {err}", path.display())
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse TOML, falling back to JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse catalog config {origin}: \
                     toml error: {toml_err}; json error: {json_err}"
                )
            })
        })
    }

    /// Parse an inline JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid catalog config json: {err}"))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "folio.toml",
            "folio.json",
            "config/folio.toml",
            "config/folio.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
