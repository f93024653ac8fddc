//! Round under construction with its placement stack.

use seatplan_core::{Assignment, AssignmentBuilder, Seat};

/// One seat given to one entity while building a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub entity: usize,
    pub seat: Seat,
    /// Order in which the placement was made, counted from zero per round.
    pub position: usize,
}

/// A partially built round.
///
/// Keeps placements on a stack in the order they were made so that repair
/// can walk back from the most recent one.
#[derive(Debug, Clone)]
pub struct PartialRound {
    builder: AssignmentBuilder,
    stack: Vec<Placement>,
    next_position: usize,
}

impl PartialRound {
    pub fn new(entity_count: usize) -> Self {
        Self {
            builder: AssignmentBuilder::new(entity_count),
            stack: Vec::with_capacity(entity_count),
            next_position: 0,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.builder.entity_count()
    }

    /// Returns true if nobody sits in the seat yet.
    pub fn is_free(&self, seat: Seat) -> bool {
        seat.index() < self.entity_count() && !self.builder.is_occupied(seat)
    }

    /// Placements currently standing, oldest first.
    pub fn placements(&self) -> &[Placement] {
        &self.stack
    }

    /// Seats an entity and pushes the placement.
    ///
    /// Returns `None` if the seat is taken or the entity already placed.
    pub fn place(&mut self, entity: usize, seat: Seat) -> Option<Placement> {
        if !self.builder.place(entity, seat) {
            return None;
        }
        let placement = Placement {
            entity,
            seat,
            position: self.next_position,
        };
        self.next_position += 1;
        self.stack.push(placement);
        Some(placement)
    }

    /// Removes the most recent placement whose entity passes `eligible`.
    ///
    /// Scans from the top of the stack down and stops at the bottom, so an
    /// empty stack simply yields `None`.
    pub fn undo_latest_where<F>(&mut self, mut eligible: F) -> Option<Placement>
    where
        F: FnMut(usize) -> bool,
    {
        let index = self.stack.iter().rposition(|p| eligible(p.entity))?;
        let placement = self.stack.remove(index);
        self.builder.vacate(placement.entity);
        Some(placement)
    }

    /// Finishes the round.
    pub fn into_assignment(self) -> Assignment {
        self.builder.build()
    }
}
