//! Error types for SeatPlan

use thiserror::Error;

use crate::seat::Seat;

/// Validation error raised at construction or restore time.
///
/// Dead ends during generation are never reported through this type; they
/// end generation as a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatPlanError {
    /// Two entities share the same label
    #[error("Duplicate entity label: {0:?}")]
    DuplicateEntity(String),

    /// Seat ordinal is zero or larger than the number of seats
    #[error("Seat {seat} of entity {entity} is outside 1..={seats}")]
    SeatOutOfRange {
        entity: usize,
        seat: usize,
        seats: usize,
    },

    /// Two entities hold the same seat in one round
    #[error("Seat {0} is assigned more than once in a round")]
    DuplicateSeat(Seat),

    /// Persisted round length does not match the entity count
    #[error("Round {round} has {found} seats, expected {expected}")]
    SeatCountMismatch {
        round: usize,
        expected: usize,
        found: usize,
    },

    /// Stored completeness flag disagrees with the stored seats
    #[error("Round {round} is flagged complete={flagged} but its seats say otherwise")]
    CompletenessMismatch { round: usize, flagged: bool },

    /// An entity holds the same seat in two complete rounds
    #[error("Entity {entity} holds seat {seat} again in round {round}")]
    RepeatedSeat {
        round: usize,
        entity: usize,
        seat: Seat,
    },

    /// An incomplete round is followed by further rounds
    #[error("Incomplete round {0} is not the last round")]
    IncompleteRoundNotLast(usize),

    /// More complete rounds than a Latin square of this order allows
    #[error("{found} complete rounds exceed the maximum of {max}")]
    TooManyRounds { found: usize, max: usize },

    /// A snapshot is flagged done but holds no rounds for a non-empty roster
    #[error("Snapshot of {entities} entities is marked done but has no rounds")]
    FinishedWithoutRounds { entities: usize },
}

/// Result type alias for SeatPlan operations
pub type Result<T> = std::result::Result<T, SeatPlanError>;
