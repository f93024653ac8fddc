//! Round generation.
//!
//! Visits entities in the order chosen by the policy and lets a forager
//! pick each seat. A dead end either triggers backtracking repair or ends
//! the round as incomplete.

use std::collections::VecDeque;

use rand::Rng;
use tracing::trace;

use seatplan_core::{Assignment, History};

use crate::forager::{FirstFitForager, RotationalForager, SeatForager};
use crate::order::VisitOrder;
use crate::partial::PartialRound;
use crate::repair::{Backtracker, RepairOutcome};

/// Policies in force for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPolicy {
    pub order: VisitOrder,
    pub backtracking: bool,
}

impl RoundPolicy {
    pub fn new(randomize: bool, backtracking: bool) -> Self {
        Self {
            order: VisitOrder::from_randomize(randomize),
            backtracking,
        }
    }
}

/// Read-only inputs for generating one round.
#[derive(Debug, Clone, Copy)]
pub struct RoundInput<'a> {
    pub entity_count: usize,
    pub history: &'a History,
    /// The round immediately before this one, if any.
    pub previous: Option<&'a Assignment>,
    pub policy: RoundPolicy,
}

/// A generated round plus what it took to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRound {
    pub assignment: Assignment,
    pub repairs: usize,
    /// Entity that could not be seated, if the round is incomplete.
    pub stuck: Option<usize>,
}

/// Builds one round.
///
/// The randomized order seats with [`FirstFitForager`]; the rotational
/// order seats with [`RotationalForager`].
pub fn generate_round<R: Rng + ?Sized>(input: &RoundInput<'_>, rng: &mut R) -> GeneratedRound {
    let queue = input.policy.order.queue(input.entity_count, rng);
    match input.policy.order {
        VisitOrder::Randomized => build_round(input, &FirstFitForager::new(), queue),
        VisitOrder::Rotational => build_round(input, &RotationalForager::new(), queue),
    }
}

fn build_round<F: SeatForager>(
    input: &RoundInput<'_>,
    forager: &F,
    mut queue: VecDeque<usize>,
) -> GeneratedRound {
    let mut round = PartialRound::new(input.entity_count);
    let mut backtracker = input
        .policy
        .backtracking
        .then(|| Backtracker::new(input.entity_count));
    let mut stuck = None;

    while let Some(entity) = queue.pop_front() {
        if let Some(seat) = forager.pick_seat(entity, &round, input.history, input.previous) {
            round.place(entity, seat);
            trace!(event = "placed", entity, seat = seat.ordinal());
            continue;
        }

        let Some(repairer) = backtracker.as_mut() else {
            stuck = Some(entity);
            break;
        };
        if let RepairOutcome::Exhausted { .. } = repairer.repair(entity, &mut round, &mut queue) {
            stuck = Some(entity);
            break;
        }
    }

    GeneratedRound {
        assignment: round.into_assignment(),
        repairs: backtracker.as_ref().map_or(0, Backtracker::repairs),
        stuck,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seatplan_core::Seat;

    fn assignment(ordinals: &[usize]) -> Assignment {
        let seats: Vec<Seat> = ordinals.iter().map(|&o| Seat::from_index(o - 1)).collect();
        Assignment::from_seats(&seats).unwrap()
    }

    fn ordinals(round: &Assignment) -> Vec<Option<usize>> {
        round.seats().iter().map(|s| s.map(Seat::ordinal)).collect()
    }

    fn generate(prior: &[Assignment], policy: RoundPolicy) -> GeneratedRound {
        let n = prior[0].entity_count();
        let history = History::replay(n, prior);
        let input = RoundInput {
            entity_count: n,
            history: &history,
            previous: prior.last(),
            policy,
        };
        generate_round(&input, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_rotational_shifts_every_seat() {
        let generated = generate(&[assignment(&[1, 2, 3])], RoundPolicy::new(false, false));
        assert_eq!(ordinals(&generated.assignment), vec![Some(2), Some(3), Some(1)]);
        assert_eq!(generated.stuck, None);
        assert_eq!(generated.repairs, 0);
    }

    #[test]
    fn test_dead_end_without_backtracking() {
        let prior = [assignment(&[1, 2, 3, 4]), assignment(&[2, 4, 1, 3])];
        let generated = generate(&prior, RoundPolicy::new(false, false));

        assert!(!generated.assignment.is_complete());
        assert_eq!(
            ordinals(&generated.assignment),
            vec![Some(3), Some(1), Some(2), None]
        );
        assert_eq!(generated.stuck, Some(3));
    }

    #[test]
    fn test_backtracking_repairs_dead_end() {
        let prior = [assignment(&[1, 2, 3, 4]), assignment(&[2, 4, 1, 3])];
        let generated = generate(&prior, RoundPolicy::new(false, true));

        assert!(generated.assignment.is_complete());
        assert_eq!(
            ordinals(&generated.assignment),
            vec![Some(3), Some(1), Some(4), Some(2)]
        );
        assert!(generated.repairs > 0);
    }

    #[test]
    fn test_backtracking_exhaustion() {
        let prior = [
            assignment(&[1, 2, 3, 4, 5]),
            assignment(&[2, 1, 4, 5, 3]),
            assignment(&[3, 4, 5, 1, 2]),
        ];
        let generated = generate(&prior, RoundPolicy::new(false, true));

        assert!(!generated.assignment.is_complete());
        assert_eq!(
            ordinals(&generated.assignment),
            vec![None, Some(5), Some(1), Some(2), Some(4)]
        );
        assert_eq!(generated.stuck, Some(0));
        assert!(generated.repairs <= 5);
    }

    #[test]
    fn test_randomized_round_respects_history() {
        let prior = [assignment(&[1, 2, 3, 4, 5, 6])];
        let history = History::replay(6, &prior);
        for seed in 0..20 {
            let input = RoundInput {
                entity_count: 6,
                history: &history,
                previous: prior.last(),
                policy: RoundPolicy::new(true, true),
            };
            let generated = generate_round(&input, &mut StdRng::seed_from_u64(seed));
            assert_eq!(history.conflict(&generated.assignment), None);
        }
    }

    #[test]
    fn test_zero_entities() {
        let history = History::new(0);
        let input = RoundInput {
            entity_count: 0,
            history: &history,
            previous: None,
            policy: RoundPolicy::new(true, false),
        };
        let generated = generate_round(&input, &mut StdRng::seed_from_u64(0));
        assert!(generated.assignment.is_complete());
        assert_eq!(generated.assignment.entity_count(), 0);
    }
}
