//! Roster and round fixtures.

use seatplan_core::{Assignment, Seat};

const CLASS: [&str; 12] = [
    "Amara", "Bastian", "Chloe", "Dmitri", "Elif", "Farid", "Greta", "Hiro", "Ines", "Jonas",
    "Kemal", "Lena",
];

/// Returns `n` distinct labels.
///
/// The first twelve are first names; further labels are numbered.
pub fn names(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match CLASS.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("Student {}", i + 1),
        })
        .collect()
}

/// Builds a complete round from 1-based seat ordinals.
///
/// # Panics
///
/// Panics if the ordinals are not a permutation of `1..=len`.
pub fn round(ordinals: &[usize]) -> Assignment {
    let seats: Vec<Seat> = ordinals
        .iter()
        .map(|&o| Seat::from_ordinal(o).expect("seat ordinals start at 1"))
        .collect();
    Assignment::from_seats(&seats).expect("ordinals must form a permutation")
}

/// Per-entity seat ordinals of a round, `None` for unplaced entities.
pub fn ordinals(round: &Assignment) -> Vec<Option<usize>> {
    round.seats().iter().map(|s| s.map(Seat::ordinal)).collect()
}
