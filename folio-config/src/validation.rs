//! Checks run on a loaded configuration before it is used.

use folio_core::settings::MAX_FAVORITE_CEILING;
use thiserror::Error;

use crate::models::CatalogConfig;

/// Page sizes above this still load, with a warning.
pub const RECOMMENDED_MAX_PAGE_SIZE: usize = 200;

/// Configuration that must not be used.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("favorite_ceiling must be greater than zero")]
    ZeroFavoriteCeiling,
    #[error("favorite_ceiling {ceiling} is above the maximum of {max}")]
    FavoriteCeilingOutOfRange { ceiling: u32, max: u32 },
    #[error("label {field} must not be blank")]
    BlankLabel { field: &'static str },
    #[error("default_page_size must be greater than zero")]
    ZeroDefaultPageSize,
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

/// Configuration that loads but is probably not what was meant.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What looks wrong.
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

/// Warnings collected by [`apply_guard_rails`].
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// Warnings in the order they were found.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning along with a fix.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// `true` when nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Reject unusable values and collect warnings for suspicious ones.
pub fn apply_guard_rails(
    config: &CatalogConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let catalog = &config.catalog;

    if catalog.favorite_ceiling == 0 {
        return Err(ConfigGuardRailError::ZeroFavoriteCeiling);
    }
    if catalog.favorite_ceiling > MAX_FAVORITE_CEILING {
        return Err(ConfigGuardRailError::FavoriteCeilingOutOfRange {
            ceiling: catalog.favorite_ceiling,
            max: MAX_FAVORITE_CEILING,
        });
    }
    if catalog.unknown_author_label.trim().is_empty() {
        return Err(ConfigGuardRailError::BlankLabel {
            field: "unknown_author_label",
        });
    }
    if catalog.uncategorized_label.trim().is_empty() {
        return Err(ConfigGuardRailError::BlankLabel {
            field: "uncategorized_label",
        });
    }
    if catalog.default_page_size == 0 {
        return Err(ConfigGuardRailError::ZeroDefaultPageSize);
    }
    validate_log_filter(&config.log_filter)?;

    if catalog.default_page_size > RECOMMENDED_MAX_PAGE_SIZE {
        warnings.push_with_hint(
            format!(
                "default_page_size {} is above {RECOMMENDED_MAX_PAGE_SIZE}",
                catalog.default_page_size
            ),
            "Large pages copy every record on the page for each request",
        );
    }

    Ok(warnings)
}

/// Cheap syntactic check; directive parsing proper happens in the binary.
fn validate_log_filter(filter: &str) -> Result<(), ConfigGuardRailError> {
    if filter.trim().is_empty() {
        return Err(ConfigGuardRailError::InvalidLogFilter {
            filter: filter.to_string(),
            reason: "filter is empty".into(),
        });
    }
    if filter.chars().any(char::is_whitespace) {
        return Err(ConfigGuardRailError::InvalidLogFilter {
            filter: filter.to_string(),
            reason: "directives are comma separated, whitespace is not allowed"
                .into(),
        });
    }
    Ok(())
}
