//! Seat history per entity.

use crate::assignment::Assignment;
use crate::seat::Seat;

/// Seats each entity has held in committed, complete rounds.
///
/// Stored as a flat `entity * n + seat` table with O(1) conflict checks.
/// History only grows, and only through [`History::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    n: usize,
    held: Vec<bool>,
    counts: Vec<usize>,
}

impl History {
    /// Creates an empty history for `n` entities and `n` seats.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            held: vec![false; n * n],
            counts: vec![0; n],
        }
    }

    /// Rebuilds history by committing each round in order.
    pub fn replay<'a>(n: usize, rounds: impl IntoIterator<Item = &'a Assignment>) -> Self {
        let mut history = Self::new(n);
        for round in rounds {
            history.commit(round);
        }
        history
    }

    /// Returns the number of entities covered.
    pub fn entity_count(&self) -> usize {
        self.n
    }

    /// Returns true if the entity must not receive this seat.
    pub fn is_forbidden(&self, entity: usize, seat: Seat) -> bool {
        entity < self.n && seat.index() < self.n && self.held[entity * self.n + seat.index()]
    }

    /// Seats the entity must not receive in the next round, ascending.
    pub fn forbidden(&self, entity: usize) -> impl Iterator<Item = Seat> + '_ {
        Seat::all(self.n).filter(move |&seat| self.is_forbidden(entity, seat))
    }

    /// Returns how many seats the entity has already held.
    pub fn forbidden_count(&self, entity: usize) -> usize {
        self.counts.get(entity).copied().unwrap_or(0)
    }

    /// Returns true if the entity has held every seat and can never be
    /// placed again.
    pub fn is_exhausted(&self, entity: usize) -> bool {
        self.forbidden_count(entity) >= self.n
    }

    /// Returns the first entity whose seat in `round` is already in history.
    pub fn conflict(&self, round: &Assignment) -> Option<(usize, Seat)> {
        round
            .pairs()
            .find(|&(entity, seat)| self.is_forbidden(entity, seat))
    }

    /// Records every seat of a complete round.
    ///
    /// Incomplete rounds are ignored. Returns whether the round was recorded.
    pub fn commit(&mut self, round: &Assignment) -> bool {
        if !round.is_complete() || round.entity_count() != self.n {
            return false;
        }
        for (entity, seat) in round.pairs() {
            let cell = &mut self.held[entity * self.n + seat.index()];
            if !*cell {
                *cell = true;
                self.counts[entity] += 1;
            }
        }
        true
    }
}
