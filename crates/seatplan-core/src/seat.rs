//! Seat ordinals.

use std::fmt;

/// A seat ordinal in `1..=N`.
///
/// Seats are 1-based, matching how they are shown and persisted.
/// Use [`Seat::index`] for 0-based storage lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat(usize);

impl Seat {
    /// Creates a seat from its 1-based ordinal. Returns `None` for zero.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        (ordinal > 0).then_some(Self(ordinal))
    }

    /// Creates a seat from a 0-based index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the 1-based ordinal.
    pub fn ordinal(self) -> usize {
        self.0
    }

    /// Returns the 0-based index.
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// Returns the next seat, wrapping from `seat_count` back to 1.
    ///
    /// With `seat_count == 0` there is no next seat and the seat is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan_core::Seat;
    ///
    /// assert_eq!(Seat::from_index(0).advanced(3), Seat::from_index(1));
    /// assert_eq!(Seat::from_index(2).advanced(3), Seat::from_index(0));
    /// ```
    pub fn advanced(self, seat_count: usize) -> Self {
        if seat_count == 0 {
            return self;
        }
        Self((self.0 % seat_count) + 1)
    }

    /// Iterates seats `1..=seat_count` in ascending order.
    pub fn all(seat_count: usize) -> impl Iterator<Item = Seat> {
        (0..seat_count).map(Seat::from_index)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_a_seat() {
        assert_eq!(Seat::from_ordinal(0), None);
        assert_eq!(Seat::from_ordinal(1).map(Seat::index), Some(0));
    }

    #[test]
    fn test_advanced_wraps() {
        let seats: Vec<usize> = Seat::all(4).map(|s| s.advanced(4).ordinal()).collect();
        assert_eq!(seats, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_advance_without_seats_keeps_seat() {
        let seat = Seat::from_index(2);
        assert_eq!(seat.advanced(0), seat);
    }

    #[test]
    fn test_single_seat_advances_to_itself() {
        let seat = Seat::from_index(0);
        assert_eq!(seat.advanced(1), seat);
    }
}
