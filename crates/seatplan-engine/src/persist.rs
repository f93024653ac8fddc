//! Persisted form of rounds and engine state.
//!
//! A round is stored as its completeness flag plus one seat ordinal per
//! entity position. Labels are not repeated per round; they come back from
//! the persisted entity list, matched by position.
//!
//! ```
//! use seatplan_engine::PersistedState;
//!
//! let state = PersistedState::from_json(r#"{
//!     "names": ["Ada", "Bo"],
//!     "randomize": false,
//!     "backtracking": false,
//!     "numberOfEntitiesToUse": 2,
//!     "done": false,
//!     "rounds": [{ "complete": true, "seats": [1, 2] }]
//! }"#).unwrap();
//!
//! assert_eq!(state.rounds[0].seats, vec![Some(1), Some(2)]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seatplan_config::PlannerConfig;
use seatplan_core::{Assignment, History, Seat, SeatPlanError};

use crate::termination::latin_bound_reached;

/// Persistence error
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid persisted state: {0}")]
    Invalid(#[from] SeatPlanError),
}

/// One persisted round.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersistedRound {
    pub complete: bool,
    /// Seat ordinal per entity position; `None` for an unplaced entity.
    pub seats: Vec<Option<usize>>,
}

impl From<&Assignment> for PersistedRound {
    fn from(round: &Assignment) -> Self {
        Self {
            complete: round.is_complete(),
            seats: round
                .seats()
                .iter()
                .map(|seat| seat.map(|s| s.ordinal()))
                .collect(),
        }
    }
}

impl PersistedRound {
    /// Rebuilds the round for a roster of `entity_count` entities.
    ///
    /// `index` is the round's position in the sequence, used in errors.
    ///
    /// # Errors
    ///
    /// Fails if the seat count differs from `entity_count`, a seat is out of
    /// range or repeated, or the completeness flag disagrees with the seats.
    pub fn restore(&self, index: usize, entity_count: usize) -> Result<Assignment, SeatPlanError> {
        if self.seats.len() != entity_count {
            return Err(SeatPlanError::SeatCountMismatch {
                round: index,
                expected: entity_count,
                found: self.seats.len(),
            });
        }

        let seats = self
            .seats
            .iter()
            .enumerate()
            .map(|(entity, ordinal)| match ordinal {
                None => Ok(None),
                Some(ordinal) => Seat::from_ordinal(*ordinal)
                    .map(Some)
                    .ok_or(SeatPlanError::SeatOutOfRange {
                        entity,
                        seat: *ordinal,
                        seats: entity_count,
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let round = Assignment::from_partial(seats)?;
        if round.is_complete() != self.complete {
            return Err(SeatPlanError::CompletenessMismatch {
                round: index,
                flagged: self.complete,
            });
        }
        Ok(round)
    }
}

/// Rounds and history rebuilt from persisted rounds.
#[derive(Debug, Clone)]
pub struct RestoredRounds {
    pub rounds: Vec<Assignment>,
    pub history: History,
    pub complete_rounds: usize,
}

/// Validates and rebuilds a persisted round sequence.
///
/// # Errors
///
/// Besides per-round errors from [`PersistedRound::restore`], fails if an
/// entity repeats a seat across complete rounds, an incomplete round is not
/// last, or there are more than `entity_count` complete rounds.
pub fn restore_rounds(
    prior: &[PersistedRound],
    entity_count: usize,
) -> Result<RestoredRounds, SeatPlanError> {
    let mut history = History::new(entity_count);
    let mut rounds = Vec::with_capacity(prior.len());
    let mut complete_rounds = 0;

    for (index, persisted) in prior.iter().enumerate() {
        let round = persisted.restore(index, entity_count)?;
        if !round.is_complete() {
            if index + 1 != prior.len() {
                return Err(SeatPlanError::IncompleteRoundNotLast(index));
            }
            rounds.push(round);
            continue;
        }

        if let Some((entity, seat)) = history.conflict(&round) {
            return Err(SeatPlanError::RepeatedSeat {
                round: index,
                entity,
                seat,
            });
        }
        if latin_bound_reached(complete_rounds, entity_count) {
            return Err(SeatPlanError::TooManyRounds {
                found: complete_rounds + 1,
                max: entity_count,
            });
        }
        history.commit(&round);
        complete_rounds += 1;
        rounds.push(round);
    }

    Ok(RestoredRounds {
        rounds,
        history,
        complete_rounds,
    })
}

/// Snapshot of an engine for storage between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub names: Vec<String>,
    pub randomize: bool,
    pub backtracking: bool,
    pub number_of_entities_to_use: usize,
    pub done: bool,
    pub rounds: Vec<PersistedRound>,
}

impl PersistedState {
    /// Parses a snapshot from JSON.
    pub fn from_json(s: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Construction options recorded in the snapshot.
    pub fn config(&self) -> PlannerConfig {
        PlannerConfig::new(self.names.iter().cloned())
            .with_randomize(self.randomize)
            .with_backtracking(self.backtracking)
            .with_entity_limit(self.number_of_entities_to_use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(complete: bool, seats: &[Option<usize>]) -> PersistedRound {
        PersistedRound {
            complete,
            seats: seats.to_vec(),
        }
    }

    #[test]
    fn test_round_trip_keeps_mapping() {
        let round =
            Assignment::from_seats(&[Seat::from_index(2), Seat::from_index(0), Seat::from_index(1)])
                .unwrap();
        let stored = PersistedRound::from(&round);
        assert_eq!(stored.seats, vec![Some(3), Some(1), Some(2)]);
        assert_eq!(stored.restore(0, 3).unwrap(), round);
    }

    #[test]
    fn test_incomplete_round_round_trip() {
        let round = Assignment::from_partial(vec![None, Some(Seat::from_index(0))]).unwrap();
        let stored = PersistedRound::from(&round);
        assert!(!stored.complete);
        assert_eq!(stored.restore(0, 2).unwrap(), round);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = persisted(true, &[Some(1), Some(2)]).restore(4, 3).unwrap_err();
        assert_eq!(
            err,
            SeatPlanError::SeatCountMismatch {
                round: 4,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_zero_seat_rejected() {
        let err = persisted(true, &[Some(0), Some(1)]).restore(0, 2).unwrap_err();
        assert!(matches!(err, SeatPlanError::SeatOutOfRange { seat: 0, .. }));
    }

    #[test]
    fn test_completeness_flag_must_match() {
        let err = persisted(true, &[Some(1), None]).restore(2, 2).unwrap_err();
        assert_eq!(
            err,
            SeatPlanError::CompletenessMismatch {
                round: 2,
                flagged: true
            }
        );
    }

    #[test]
    fn test_restore_rounds_rebuilds_history() {
        let prior = [
            persisted(true, &[Some(1), Some(2), Some(3)]),
            persisted(true, &[Some(2), Some(3), Some(1)]),
        ];
        let restored = restore_rounds(&prior, 3).unwrap();
        assert_eq!(restored.complete_rounds, 2);
        assert_eq!(restored.rounds.len(), 2);
        let forbidden: Vec<usize> = restored.history.forbidden(0).map(Seat::ordinal).collect();
        assert_eq!(forbidden, vec![1, 2]);
    }

    #[test]
    fn test_repeated_seat_rejected() {
        let prior = [
            persisted(true, &[Some(1), Some(2), Some(3)]),
            persisted(true, &[Some(1), Some(3), Some(2)]),
        ];
        let err = restore_rounds(&prior, 3).unwrap_err();
        assert_eq!(
            err,
            SeatPlanError::RepeatedSeat {
                round: 1,
                entity: 0,
                seat: Seat::from_index(0)
            }
        );
    }

    #[test]
    fn test_incomplete_round_must_be_last() {
        let prior = [
            persisted(false, &[Some(1), None]),
            persisted(true, &[Some(2), Some(1)]),
        ];
        assert_eq!(
            restore_rounds(&prior, 2).unwrap_err(),
            SeatPlanError::IncompleteRoundNotLast(0)
        );
    }

    #[test]
    fn test_too_many_rounds_rejected() {
        let prior = [persisted(true, &[]), persisted(true, &[])];
        assert_eq!(
            restore_rounds(&prior, 0).unwrap_err(),
            SeatPlanError::TooManyRounds { found: 1, max: 0 }
        );
    }

    #[test]
    fn test_state_json_uses_camel_case() {
        let state = PersistedState {
            names: vec!["Ada".into(), "Bo".into(), "Cy".into()],
            randomize: true,
            backtracking: true,
            number_of_entities_to_use: 2,
            done: false,
            rounds: vec![persisted(true, &[Some(2), Some(1)])],
        };
        let json = state.to_json().unwrap();
        assert!(json.contains("\"numberOfEntitiesToUse\":2"));
        assert_eq!(PersistedState::from_json(&json).unwrap(), state);

        let config = state.config();
        assert_eq!(config.effective_entities(), ["Ada", "Bo"]);
        assert!(config.backtracking);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PersistedState::from_json("{"),
            Err(PersistError::Json(_))
        ));
    }
}
