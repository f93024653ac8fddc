//! SeatPlan - conflict-free seat rotation rounds
//!
//! Builds a sequence of rounds in which every entity gets one seat, every
//! seat is used once per round, and no entity sits in the same seat twice.
//!
//! # Example
//!
//! ```rust
//! use seatplan::prelude::*;
//!
//! let config = PlannerConfig::new(["Ada", "Bo", "Cy", "Di"])
//!     .with_backtracking(true)
//!     .with_random_seed(42);
//! let mut engine = SeatingEngine::new(&config).unwrap();
//! engine.run_to_terminal();
//!
//! assert!(engine.is_done());
//! assert!(engine.complete_rounds() <= 4);
//! ```

pub mod console;

// Configuration
pub use seatplan_config::{ConfigError, PlannerConfig};

// Round model
pub use seatplan_core::{Assignment, History, Roster, Seat, SeatPlanError};

// Engine and persisted state
pub use seatplan_engine::{
    AdvanceOutcome, PersistError, PersistedRound, PersistedState, RoundOverrides, SeatingEngine,
    TerminationReason,
};

pub mod prelude {
    pub use super::{
        AdvanceOutcome, Assignment, PlannerConfig, RoundOverrides, Seat, SeatingEngine,
        TerminationReason,
    };
}
