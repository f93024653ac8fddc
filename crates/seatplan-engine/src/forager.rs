//! Seat foragers for round construction
//!
//! Foragers pick a seat for one entity given the partial round, the
//! entity's seat history and the previous round.

use std::fmt::Debug;

use seatplan_core::{Assignment, History, Seat};

use crate::partial::PartialRound;

/// Trait for picking a seat for an entity.
pub trait SeatForager: Send + Debug {
    /// Returns a seat that is free in `round` and not in the entity's
    /// history, or `None` at a local dead end.
    fn pick_seat(
        &self,
        entity: usize,
        round: &PartialRound,
        history: &History,
        previous: Option<&Assignment>,
    ) -> Option<Seat>;
}

fn is_eligible(entity: usize, seat: Seat, round: &PartialRound, history: &History) -> bool {
    round.is_free(seat) && !history.is_forbidden(entity, seat)
}

/// First Fit forager - scans seats in ascending order and takes the
/// first eligible one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitForager;

impl FirstFitForager {
    pub fn new() -> Self {
        Self
    }
}

impl SeatForager for FirstFitForager {
    fn pick_seat(
        &self,
        entity: usize,
        round: &PartialRound,
        history: &History,
        _previous: Option<&Assignment>,
    ) -> Option<Seat> {
        Seat::all(round.entity_count()).find(|&seat| is_eligible(entity, seat, round, history))
    }
}

/// Rotational forager - moves every entity one seat along from where it sat
/// in the previous round, wrapping from the last seat to the first.
///
/// Falls back to first fit when the advanced seat is taken or already in
/// the entity's history.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationalForager {
    fallback: FirstFitForager,
}

impl RotationalForager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeatForager for RotationalForager {
    fn pick_seat(
        &self,
        entity: usize,
        round: &PartialRound,
        history: &History,
        previous: Option<&Assignment>,
    ) -> Option<Seat> {
        let advanced = previous
            .and_then(|prev| prev.seat_of(entity))
            .map(|seat| seat.advanced(round.entity_count()))
            .filter(|&seat| is_eligible(entity, seat, round, history));

        advanced.or_else(|| self.fallback.pick_seat(entity, round, history, previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(ordinal: usize) -> Seat {
        Seat::from_index(ordinal - 1)
    }

    fn assignment(ordinals: &[usize]) -> Assignment {
        let seats: Vec<Seat> = ordinals.iter().map(|&o| seat(o)).collect();
        Assignment::from_seats(&seats).unwrap()
    }

    #[test]
    fn test_first_fit_skips_history_and_occupied() {
        let mut history = History::new(3);
        history.commit(&assignment(&[1, 2, 3]));
        let mut round = PartialRound::new(3);
        round.place(1, seat(2));

        let picked = FirstFitForager::new().pick_seat(0, &round, &history, None);
        assert_eq!(picked, Some(seat(3)));
    }

    #[test]
    fn test_first_fit_dead_end() {
        let mut history = History::new(2);
        history.commit(&assignment(&[1, 2]));
        let mut round = PartialRound::new(2);
        round.place(1, seat(1));

        assert_eq!(FirstFitForager.pick_seat(0, &round, &history, None), None);
    }

    #[test]
    fn test_rotational_advances_seat() {
        let previous = assignment(&[1, 2, 3]);
        let history = History::replay(3, [&previous]);
        let round = PartialRound::new(3);
        let forager = RotationalForager::new();

        assert_eq!(forager.pick_seat(0, &round, &history, Some(&previous)), Some(seat(2)));
        assert_eq!(forager.pick_seat(2, &round, &history, Some(&previous)), Some(seat(1)));
    }

    #[test]
    fn test_rotational_falls_back_to_first_fit() {
        let previous = assignment(&[1, 2, 3]);
        let history = History::replay(3, [&previous]);
        let mut round = PartialRound::new(3);
        round.place(1, seat(2));

        // Entity 0 would advance to seat 2, which is taken.
        let picked = RotationalForager::new().pick_seat(0, &round, &history, Some(&previous));
        assert_eq!(picked, Some(seat(3)));
    }

    #[test]
    fn test_rotational_without_previous_round() {
        let history = History::new(2);
        let round = PartialRound::new(2);
        let picked = RotationalForager::new().pick_seat(1, &round, &history, None);
        assert_eq!(picked, Some(seat(1)));
    }
}
