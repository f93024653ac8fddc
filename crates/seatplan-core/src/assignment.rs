//! Rounds: one seat per entity, one entity per seat.
//!
//! An [`Assignment`] is a single relation between entity positions and
//! seats, stored with two lookup views. Both views are written together
//! by [`AssignmentBuilder`] and never change after [`AssignmentBuilder::build`].

use crate::error::{Result, SeatPlanError};
use crate::seat::Seat;

/// One round of the seating sequence.
///
/// Entity positions refer to the roster order. A round is complete when
/// every entity holds a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Entity position -> seat.
    seats: Vec<Option<Seat>>,
    /// Seat index -> entity position.
    occupants: Vec<Option<usize>>,
    complete: bool,
}

impl Assignment {
    /// Creates the round where entity `i` sits in seat `i + 1`.
    pub fn identity(entity_count: usize) -> Self {
        let mut builder = AssignmentBuilder::new(entity_count);
        for (entity, seat) in Seat::all(entity_count).enumerate() {
            builder.place(entity, seat);
        }
        builder.build()
    }

    /// Creates a complete round from a seat permutation, one seat per entity.
    ///
    /// # Errors
    ///
    /// Returns an error if a seat is out of range or used twice.
    pub fn from_seats(seats: &[Seat]) -> Result<Self> {
        Self::from_partial(seats.iter().copied().map(Some).collect())
    }

    /// Creates a round from per-entity seats where `None` marks an
    /// unplaced entity.
    ///
    /// # Errors
    ///
    /// Returns an error if a seat is out of range or used twice.
    pub fn from_partial(seats: Vec<Option<Seat>>) -> Result<Self> {
        let seat_count = seats.len();
        let mut builder = AssignmentBuilder::new(seat_count);
        for (entity, seat) in seats.into_iter().enumerate() {
            let Some(seat) = seat else { continue };
            if seat.ordinal() > seat_count {
                return Err(SeatPlanError::SeatOutOfRange {
                    entity,
                    seat: seat.ordinal(),
                    seats: seat_count,
                });
            }
            if !builder.place(entity, seat) {
                return Err(SeatPlanError::DuplicateSeat(seat));
            }
        }
        Ok(builder.build())
    }

    /// Returns the number of entities (and seats) this round covers.
    pub fn entity_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns the seat held by an entity, if placed.
    pub fn seat_of(&self, entity: usize) -> Option<Seat> {
        self.seats.get(entity).copied().flatten()
    }

    /// Returns the entity sitting in a seat, if any.
    pub fn occupant_of(&self, seat: Seat) -> Option<usize> {
        self.occupants.get(seat.index()).copied().flatten()
    }

    /// Returns true if every entity holds a seat.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the number of placed entities.
    pub fn placed_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    /// Per-entity seats in roster order.
    pub fn seats(&self) -> &[Option<Seat>] {
        &self.seats
    }

    /// Placed `(entity, seat)` pairs in roster order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, Seat)> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(entity, seat)| seat.map(|s| (entity, s)))
    }
}

/// Mutable round under construction.
///
/// Only the generator holds one of these; consumers see the finished
/// [`Assignment`].
#[derive(Debug, Clone)]
pub struct AssignmentBuilder {
    seats: Vec<Option<Seat>>,
    occupants: Vec<Option<usize>>,
}

impl AssignmentBuilder {
    /// Creates an empty round for `entity_count` entities and seats.
    pub fn new(entity_count: usize) -> Self {
        Self {
            seats: vec![None; entity_count],
            occupants: vec![None; entity_count],
        }
    }

    /// Returns the number of entities (and seats).
    pub fn entity_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns true if the seat is taken.
    pub fn is_occupied(&self, seat: Seat) -> bool {
        matches!(self.occupants.get(seat.index()), Some(Some(_)))
    }

    /// Returns the seat held by an entity, if placed.
    pub fn seat_of(&self, entity: usize) -> Option<Seat> {
        self.seats.get(entity).copied().flatten()
    }

    /// Seats an entity.
    ///
    /// Returns false and changes nothing if the entity is already placed,
    /// the seat is taken, or either index is out of range.
    pub fn place(&mut self, entity: usize, seat: Seat) -> bool {
        let (Some(slot), Some(occupant)) = (
            self.seats.get(entity).copied(),
            self.occupants.get(seat.index()).copied(),
        ) else {
            return false;
        };
        if slot.is_some() || occupant.is_some() {
            return false;
        }
        self.seats[entity] = Some(seat);
        self.occupants[seat.index()] = Some(entity);
        true
    }

    /// Removes an entity from its seat and returns the freed seat.
    pub fn vacate(&mut self, entity: usize) -> Option<Seat> {
        let seat = self.seats.get_mut(entity)?.take()?;
        self.occupants[seat.index()] = None;
        Some(seat)
    }

    /// Finishes the round.
    pub fn build(self) -> Assignment {
        let complete = self.seats.iter().all(Option::is_some);
        Assignment {
            seats: self.seats,
            occupants: self.occupants,
            complete,
        }
    }
}
