use std::num::NonZeroU64;

/// Identifier of a catalog record. Always positive once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BookId(NonZeroU64);

impl BookId {
    /// Validate an identifier as it arrives from a caller.
    ///
    /// Absent, zero and negative values are rejected with `None`; callers
    /// treat that the same way as a record that does not exist.
    pub fn from_raw(raw: Option<i64>) -> Option<Self> {
        raw.and_then(|value| u64::try_from(value).ok())
            .and_then(NonZeroU64::new)
            .map(BookId)
    }

    pub fn new(value: NonZeroU64) -> Self {
        BookId(value)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<i64> for BookId {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        BookId::from_raw(Some(value)).ok_or(value)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
