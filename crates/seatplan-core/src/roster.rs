//! Ordered entity labels.

use std::collections::HashSet;

use crate::error::{Result, SeatPlanError};
use crate::seat::Seat;

/// Ordered list of distinct entity labels.
///
/// Entity positions in rounds and history index into this list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Creates a roster.
    ///
    /// # Errors
    ///
    /// Returns [`SeatPlanError::DuplicateEntity`] if a label repeats.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(SeatPlanError::DuplicateEntity(name.clone()));
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the label at an entity position.
    pub fn name(&self, entity: usize) -> Option<&str> {
        self.names.get(entity).map(String::as_str)
    }

    /// Returns the position of a label.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Seats `1..=N` for this roster.
    pub fn seats(&self) -> Vec<Seat> {
        Seat::all(self.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let roster = Roster::new(vec!["Ada".into(), "Bo".into()]).unwrap();
        assert_eq!(roster.position("Bo"), Some(1));
        assert_eq!(roster.name(0), Some("Ada"));
        assert_eq!(roster.seats().len(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Roster::new(vec!["Ada".into(), "Ada".into()]).unwrap_err();
        assert_eq!(err, SeatPlanError::DuplicateEntity("Ada".into()));
    }
}
