//! Backtracking repair for local dead ends.
//!
//! When an entity has no eligible seat, the most recent placement that has
//! not yet been undone during this round is taken back. The stuck entity
//! and the undone entity are queued again, stuck entity first. Each entity
//! is undone at most once per round, so a round needs at most N repairs
//! before it either completes or runs out of candidates.

use std::collections::VecDeque;

use tracing::debug;

use crate::partial::{PartialRound, Placement};

/// Result of one repair attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// A placement was undone and both entities were re-queued.
    Requeued { stuck: usize, undone: Placement },

    /// No placement is left that may be undone.
    Exhausted { stuck: usize },
}

/// Per-round repair state.
#[derive(Debug, Clone)]
pub struct Backtracker {
    undone: Vec<bool>,
    repairs: usize,
}

impl Backtracker {
    pub fn new(entity_count: usize) -> Self {
        Self {
            undone: vec![false; entity_count],
            repairs: 0,
        }
    }

    /// Number of placements undone so far in this round.
    pub fn repairs(&self) -> usize {
        self.repairs
    }

    /// Returns true if the entity has been undone during this round.
    pub fn was_undone(&self, entity: usize) -> bool {
        self.undone.get(entity).copied().unwrap_or(false)
    }

    /// Repairs a dead end for `stuck`.
    pub fn repair(
        &mut self,
        stuck: usize,
        round: &mut PartialRound,
        queue: &mut VecDeque<usize>,
    ) -> RepairOutcome {
        let undone = self.undone.as_slice();
        let Some(placement) =
            round.undo_latest_where(|entity| !undone.get(entity).copied().unwrap_or(true))
        else {
            debug!(event = "repair_exhausted", entity = stuck, repairs = self.repairs);
            return RepairOutcome::Exhausted { stuck };
        };

        self.undone[placement.entity] = true;
        self.repairs += 1;
        queue.push_back(stuck);
        queue.push_back(placement.entity);

        debug!(
            event = "repair",
            entity = stuck,
            undone = placement.entity,
            seat = placement.seat.ordinal(),
            repairs = self.repairs,
        );
        RepairOutcome::Requeued {
            stuck,
            undone: placement,
        }
    }
}
