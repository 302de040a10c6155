//! Bounded favorite-count arithmetic.
//!
//! The regulator is a pure function from the stored value and a requested
//! delta to the next value plus a tagged outcome. Callers that only need the
//! historical boolean contract use [`CounterOutcome::is_success`], which reads
//! `true` for both real changes and no-op completions.

use folio_model::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Change requested by the favorite bookkeeping when a user adds or removes
/// a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteCountDelta {
    Increment,
    Decrement,
}

/// Result of one regulator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterOutcome {
    /// The counter now holds this value and must be persisted.
    Changed(u32),
    /// Nothing to write; the operation still completed.
    Unchanged,
    /// The counter is saturated and the request was refused.
    Rejected,
}

impl CounterOutcome {
    /// Boolean view used at the service boundary.
    ///
    /// `true` does not mean the value moved: a decrement at zero reports
    /// success without touching the counter.
    pub fn is_success(&self) -> bool {
        !matches!(self, CounterOutcome::Rejected)
    }}

/// Next counter value together with the outcome that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regulated {
    pub value: Option<u32>,
    pub outcome: CounterOutcome,
}

/// Apply `delta` to `current` under `ceiling`.
///
/// - increment: unset reads as zero; at or above the ceiling the request is
///   rejected, otherwise the value grows by one
/// - decrement: unset is repaired to zero; zero stays zero; anything else
///   shrinks by one and never lands above the ceiling
pub fn regulate(
    current: Option<u32>,
    delta: FavoriteCountDelta,
    ceiling: u32,
) -> Regulated {
    match delta {
        FavoriteCountDelta::Increment => {
            let count = current.unwrap_or(0);
            if count >= ceiling {
                return Regulated {
                    value: current,
                    outcome: CounterOutcome::Rejected,
                };
            }
            let next = count + 1;
            Regulated {
                value: Some(next),
                outcome: CounterOutcome::Changed(next),
            }
        }
        FavoriteCountDelta::Decrement => match current {
            None => Regulated {
                value: Some(0),
                outcome: CounterOutcome::Changed(0),
            },
            Some(0) => Regulated {
                value: Some(0),
                outcome: CounterOutcome::Unchanged,
            },
            Some(count) => {
                let next = (count - 1).min(ceiling);
                Regulated {
                    value: Some(next),
                    outcome: CounterOutcome::Changed(next),
                }
            }
        },
    }
}

/// Run the regulator against a record in place.
pub fn apply_to_record(
    record: &mut CatalogRecord,
    delta: FavoriteCountDelta,
    ceiling: u32,
) -> CounterOutcome {
    let regulated = regulate(record.favorite_count, delta, ceiling);
    record.favorite_count = regulated.value;
    regulated.outcome
}

/// Outcome of a counter request addressed by identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterUpdate {
    /// The identifier was invalid or no record carries it.
    Missing,
    /// The regulator ran; `record` holds the post-operation state.
    Applied {
        record: CatalogRecord,
        outcome: CounterOutcome,
    },
}

impl CounterUpdate {
    pub fn succeeded(&self) -> bool {
        match self {
            CounterUpdate::Missing => false,
            CounterUpdate::Applied { outcome, .. } => outcome.is_success(),
        }
    }

    /// Record the caller has to hand to the store, if any.
    pub fn record_to_persist(&self) -> Option<&CatalogRecord> {
        match self {
            CounterUpdate::Applied {
                record,
                outcome: CounterOutcome::Changed(_),
            } => Some(record),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<CounterOutcome> {
        match self {
            CounterUpdate::Missing => None,
            CounterUpdate::Applied { outcome, .. } => Some(*outcome),
        }
    }
}
