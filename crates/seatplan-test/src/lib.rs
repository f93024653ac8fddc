//! Shared test fixtures for SeatPlan crates.
//!
//! This crate provides rosters and invariant checks for testing.
//! It does NOT depend on `seatplan-engine` so the engine can use it as a
//! dev-dependency.
//!
//! - [`roster`] - Entity label fixtures
//! - [`check`] - Assertions for round and sequence invariants
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! seatplan-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use seatplan_test::{check, roster};
//!
//! let names = roster::names(6);
//! check::assert_sequence(engine.rounds(), names.len());
//! ```

pub mod check;
pub mod roster;

pub use check::{assert_bijection, assert_no_repeated_seats, assert_sequence};
pub use roster::{names, ordinals, round};
