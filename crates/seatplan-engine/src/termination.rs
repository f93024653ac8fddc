//! Commit and termination policy.

use std::fmt;

use seatplan_core::{Assignment, History};

/// Why an engine stopped producing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The roster is empty.
    NoEntities,

    /// N complete rounds exist, the most a Latin square of order N allows.
    LatinBound,

    /// A round could not be completed; it was kept as the last round.
    DeadEnd,

    /// The engine was restored from a state that was already finished.
    Restored,
}

impl TerminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::NoEntities => "no_entities",
            TerminationReason::LatinBound => "latin_bound",
            TerminationReason::DeadEnd => "dead_end",
            TerminationReason::Restored => "restored",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true once `complete_rounds` has reached the Latin-square bound.
pub fn latin_bound_reached(complete_rounds: usize, entity_count: usize) -> bool {
    complete_rounds >= entity_count
}

/// Settles a freshly generated round.
///
/// Complete rounds are committed to history. Returns the reason generation
/// must stop, if it must. A round the history refuses (a different entity
/// count) is treated like an incomplete one and leaves the counter alone.
pub fn settle(
    round: &Assignment,
    history: &mut History,
    complete_rounds: &mut usize,
) -> Option<TerminationReason> {
    if !round.is_complete() || !history.commit(round) {
        return Some(TerminationReason::DeadEnd);
    }
    *complete_rounds += 1;
    latin_bound_reached(*complete_rounds, round.entity_count())
        .then_some(TerminationReason::LatinBound)
}
