//! Invariant assertions for rounds and round sequences.

use std::collections::HashSet;

use seatplan_core::{Assignment, Seat};

/// Asserts that a complete round seats every entity exactly once and uses
/// every seat exactly once, with both lookup views in agreement.
pub fn assert_bijection(round: &Assignment) {
    let n = round.entity_count();
    assert!(round.is_complete(), "round is not complete: {round:?}");
    assert_eq!(round.placed_count(), n);

    let mut used = HashSet::new();
    for (entity, seat) in round.pairs() {
        assert!(seat.ordinal() <= n, "seat {seat} out of range for {n} entities");
        assert!(used.insert(seat), "seat {seat} used twice");
        assert_eq!(round.occupant_of(seat), Some(entity));
    }
    for seat in Seat::all(n) {
        assert!(round.occupant_of(seat).is_some(), "seat {seat} left empty");
    }
}

/// Asserts that no entity holds the same seat in two complete rounds.
pub fn assert_no_repeated_seats(rounds: &[Assignment]) {
    let mut held: HashSet<(usize, Seat)> = HashSet::new();
    for (index, round) in rounds.iter().enumerate().filter(|(_, r)| r.is_complete()) {
        for pair in round.pairs() {
            assert!(
                held.insert(pair),
                "entity {} repeats seat {} in round {index}",
                pair.0,
                pair.1
            );
        }
    }
}

/// Asserts the shape of a whole sequence for `n` entities: complete rounds
/// are bijections without repeats, at most `n` of them exist, and only the
/// last round may be incomplete.
pub fn assert_sequence(rounds: &[Assignment], n: usize) {
    for (index, round) in rounds.iter().enumerate() {
        assert_eq!(round.entity_count(), n);
        if round.is_complete() {
            assert_bijection(round);
        } else {
            assert_eq!(index + 1, rounds.len(), "incomplete round {index} is not last");
        }
    }
    assert_no_repeated_seats(rounds);

    let complete = rounds.iter().filter(|r| r.is_complete()).count();
    assert!(complete <= n, "{complete} complete rounds for {n} entities");
}
