use serde::{Deserialize, Serialize};

/// Direction of the favorite-count ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Interpret a raw `sortType`-style parameter.
    ///
    /// Only `asc` (any case) selects ascending; absent, empty and unknown
    /// values all fall back to descending.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("asc") => {
                SortDirection::Ascending
            }
            _ => SortDirection::Descending,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

impl From<&str> for SortDirection {
    fn from(value: &str) -> Self {
        SortDirection::parse_lenient(Some(value))
    }
}
