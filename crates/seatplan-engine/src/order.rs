//! Entity visitation order for one round.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

/// Order in which entities are offered a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitOrder {
    /// Uniformly shuffled permutation of the roster, drawn fresh each round.
    Randomized,

    /// Roster order, every round. Pairs with the rotational forager, which
    /// advances each entity's previous seat by one.
    Rotational,
}

impl VisitOrder {
    /// Maps the `randomize` flag onto an order.
    pub fn from_randomize(randomize: bool) -> Self {
        if randomize {
            VisitOrder::Randomized
        } else {
            VisitOrder::Rotational
        }
    }

    /// Returns `true` if this order draws from the RNG.
    pub fn is_random(&self) -> bool {
        matches!(self, VisitOrder::Randomized)
    }

    /// Builds the visitation queue for `entity_count` entities.
    ///
    /// The queue is consumed from the front; entities re-queued by repair
    /// go to the back.
    pub fn queue<R: Rng + ?Sized>(self, entity_count: usize, rng: &mut R) -> VecDeque<usize> {
        let mut entities: Vec<usize> = (0..entity_count).collect();
        if self.is_random() {
            entities.shuffle(rng);
        }
        entities.into()
    }
}
