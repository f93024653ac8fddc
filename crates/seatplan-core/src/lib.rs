//! SeatPlan Core - Core types for seat rotation planning
//!
//! This crate provides the data model shared by the planning engine:
//! - [`Seat`] ordinals `1..=N`
//! - [`Roster`] of distinct entity labels
//! - [`Assignment`] rounds with consistent entity/seat views
//! - [`History`] of seats each entity has already held
//! - [`SeatPlanError`] for boundary validation

pub mod assignment;
pub mod error;
pub mod history;
pub mod roster;
pub mod seat;

pub use assignment::{Assignment, AssignmentBuilder};
pub use error::{Result, SeatPlanError};
pub use history::History;
pub use roster::Roster;
pub use seat::Seat;
