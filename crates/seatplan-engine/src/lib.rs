//! SeatPlan Engine
//!
//! This crate builds seating rounds one at a time:
//! - Visitation order (shuffled or rotational)
//! - Seat foragers (first fit, rotational advance)
//! - Backtracking repair for local dead ends
//! - Commit and termination policy
//! - Persisted form for saving and restoring an engine

pub mod engine;
pub mod forager;
pub mod generator;
pub mod order;
pub mod partial;
pub mod persist;
pub mod repair;
pub mod termination;

pub use engine::{AdvanceOutcome, RoundOverrides, SeatingEngine};
pub use forager::{FirstFitForager, RotationalForager, SeatForager};
pub use generator::{generate_round, GeneratedRound, RoundInput, RoundPolicy};
pub use order::VisitOrder;
pub use partial::{PartialRound, Placement};
pub use persist::{PersistError, PersistedRound, PersistedState};
pub use repair::{Backtracker, RepairOutcome};
pub use termination::TerminationReason;
