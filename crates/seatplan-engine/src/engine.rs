//! The seating engine.
//!
//! Owns the round sequence and the seat history, produces one round per
//! [`SeatingEngine::advance`] call, and stops for good once no further
//! round can be produced.
//!
//! # Example
//!
//! ```
//! use seatplan_config::PlannerConfig;
//! use seatplan_engine::SeatingEngine;
//!
//! let config = PlannerConfig::new(["A", "B", "C"]).with_randomize(false);
//! let mut engine = SeatingEngine::new(&config).unwrap();
//! engine.run_to_terminal();
//!
//! assert!(engine.is_done());
//! assert_eq!(engine.complete_rounds(), 3);
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use seatplan_config::PlannerConfig;
use seatplan_core::{Assignment, History, Result, Roster, Seat, SeatPlanError};

use crate::generator::{generate_round, RoundInput, RoundPolicy};
use crate::persist::{restore_rounds, PersistError, PersistedRound, PersistedState};
use crate::termination::{latin_bound_reached, settle, TerminationReason};

/// Per-call overrides of the engine's default policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundOverrides {
    pub randomize: Option<bool>,
    pub backtracking: Option<bool>,
}

impl RoundOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = Some(randomize);
        self
    }

    pub fn with_backtracking(mut self, backtracking: bool) -> Self {
        self.backtracking = Some(backtracking);
        self
    }
}

/// What a single [`SeatingEngine::advance`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A complete round was appended and committed to history.
    Committed { round: usize },

    /// An incomplete round was appended and generation ended.
    DeadEnd { round: usize },

    /// The engine had already finished; nothing changed.
    AlreadyTerminal,
}

/// Incremental generator of conflict-free seating rounds.
///
/// Not synchronized; wrap in a mutex to share between threads.
#[derive(Debug)]
pub struct SeatingEngine {
    /// Every configured label; the roster is a prefix of it.
    pool: Vec<String>,
    entity_limit: Option<usize>,
    roster: Roster,
    seats: Vec<Seat>,
    rounds: Vec<Assignment>,
    history: History,
    complete_rounds: usize,
    termination: Option<TerminationReason>,
    randomize: bool,
    backtracking: bool,
    rng: StdRng,
}

impl SeatingEngine {
    /// Creates an engine and generates its first round.
    ///
    /// The first round is a random permutation when `randomize` is set and
    /// the identity otherwise. An empty roster yields an engine that is
    /// already done and has no rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if two entities share a label.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        let mut engine = Self::unstarted(config)?;
        if engine.roster.is_empty() {
            engine.finish(TerminationReason::NoEntities);
            return Ok(engine);
        }

        let first = engine.first_round()?;
        engine.push_round(first);
        Ok(engine)
    }

    /// Creates an engine that continues from already generated rounds.
    ///
    /// An empty `prior` behaves like [`SeatingEngine::new`].
    ///
    /// # Errors
    ///
    /// Returns an error if the rounds do not fit the roster: wrong seat
    /// count, invalid seats, a repeated seat for an entity, an incomplete
    /// round before the last one, or more rounds than the roster allows.
    pub fn restore(config: &PlannerConfig, prior: &[PersistedRound]) -> Result<Self> {
        if prior.is_empty() {
            return Self::new(config);
        }

        let mut engine = Self::unstarted(config)?;
        let restored = restore_rounds(prior, engine.roster.len())?;
        engine.rounds = restored.rounds;
        engine.history = restored.history;
        engine.complete_rounds = restored.complete_rounds;

        let ended_incomplete = engine.rounds.last().is_some_and(|r| !r.is_complete());
        if ended_incomplete {
            engine.finish(TerminationReason::DeadEnd);
        } else if latin_bound_reached(engine.complete_rounds, engine.roster.len()) {
            engine.finish(TerminationReason::LatinBound);
        }

        info!(
            event = "engine_restored",
            entities = engine.roster.len(),
            rounds = engine.rounds.len(),
            done = engine.is_done(),
        );
        Ok(engine)
    }

    /// Restores an engine from a snapshot, including its policies.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`SeatingEngine::restore`], rejects a snapshot
    /// flagged done that has entities but no rounds.
    pub fn from_state(state: &PersistedState) -> Result<Self> {
        let config = state.config();
        let entity_count = config.effective_entities().len();
        if state.done && state.rounds.is_empty() && entity_count > 0 {
            return Err(SeatPlanError::FinishedWithoutRounds { entities: entity_count });
        }

        let mut engine = Self::restore(&config, &state.rounds)?;
        if state.done && !engine.is_done() {
            engine.finish(TerminationReason::Restored);
        }
        Ok(engine)
    }

    /// Restores an engine from a JSON snapshot.
    pub fn from_json(json: &str) -> std::result::Result<Self, PersistError> {
        let state = PersistedState::from_json(json)?;
        Ok(Self::from_state(&state)?)
    }

    /// Takes a snapshot of the engine.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            names: self.pool.clone(),
            randomize: self.randomize,
            backtracking: self.backtracking,
            number_of_entities_to_use: self.entity_limit.unwrap_or(self.pool.len()),
            done: self.is_done(),
            rounds: self.rounds.iter().map(PersistedRound::from).collect(),
        }
    }

    /// Encodes a snapshot of the engine as JSON.
    pub fn to_json(&self) -> std::result::Result<String, PersistError> {
        self.snapshot().to_json()
    }

    /// Produces one more round with the default policies.
    pub fn advance(&mut self) -> AdvanceOutcome {
        self.advance_with(RoundOverrides::default())
    }

    /// Produces one more round, overriding the default policies for this
    /// call only. Does nothing once the engine is done.
    pub fn advance_with(&mut self, overrides: RoundOverrides) -> AdvanceOutcome {
        if self.is_done() {
            return AdvanceOutcome::AlreadyTerminal;
        }

        let policy = RoundPolicy::new(
            overrides.randomize.unwrap_or(self.randomize),
            overrides.backtracking.unwrap_or(self.backtracking),
        );
        let input = RoundInput {
            entity_count: self.roster.len(),
            history: &self.history,
            previous: self.rounds.last(),
            policy,
        };
        let generated = generate_round(&input, &mut self.rng);
        if generated.repairs > 0 {
            debug!(
                event = "round_repaired",
                round = self.rounds.len(),
                repairs = generated.repairs,
            );
        }

        let round = self.rounds.len();
        if self.push_round(generated.assignment) {
            AdvanceOutcome::Committed { round }
        } else {
            AdvanceOutcome::DeadEnd { round }
        }
    }

    /// Advances until the engine is done and returns the number of rounds
    /// produced.
    pub fn run_to_terminal(&mut self) -> usize {
        self.run_to_terminal_with(RoundOverrides::default())
    }

    /// Advances with the given overrides until the engine is done.
    ///
    /// Terminates after at most N complete rounds plus one incomplete one.
    pub fn run_to_terminal_with(&mut self, overrides: RoundOverrides) -> usize {
        let mut produced = 0;
        while !self.is_done() {
            self.advance_with(overrides);
            produced += 1;
        }
        produced
    }

    /// Returns true once no further round can be produced.
    pub fn is_done(&self) -> bool {
        self.termination.is_some()
    }

    /// Returns why the engine stopped, if it has.
    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    /// All rounds produced so far, complete ones first and at most one
    /// trailing incomplete round.
    pub fn rounds(&self) -> &[Assignment] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Assignment> {
        self.rounds.get(index)
    }

    /// Number of complete rounds.
    pub fn complete_rounds(&self) -> usize {
        self.complete_rounds
    }

    /// One round as an ordered list of `(label, seat)` pairs.
    pub fn labelled_round(&self, index: usize) -> Option<Vec<(&str, Option<Seat>)>> {
        let round = self.rounds.get(index)?;
        Some(
            self.roster
                .names()
                .iter()
                .enumerate()
                .map(|(entity, name)| (name.as_str(), round.seat_of(entity)))
                .collect(),
        )
    }

    /// Labels in use, after the entity limit.
    pub fn entities(&self) -> &[String] {
        self.roster.names()
    }

    /// Every configured label, including those beyond the entity limit.
    pub fn entity_pool(&self) -> &[String] {
        &self.pool
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn default_randomize(&self) -> bool {
        self.randomize
    }

    pub fn default_backtracking(&self) -> bool {
        self.backtracking
    }

    fn unstarted(config: &PlannerConfig) -> Result<Self> {
        let roster = Roster::new(config.effective_entities().to_vec())?;
        let n = roster.len();
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            event = "engine_created",
            entities = n,
            randomize = config.randomize,
            backtracking = config.backtracking,
        );

        Ok(Self {
            pool: config.entities.clone(),
            entity_limit: config.number_of_entities_to_use,
            seats: roster.seats(),
            roster,
            rounds: Vec::new(),
            history: History::new(n),
            complete_rounds: 0,
            termination: None,
            randomize: config.randomize,
            backtracking: config.backtracking,
            rng,
        })
    }

    fn first_round(&mut self) -> Result<Assignment> {
        let mut seats = self.seats.clone();
        if self.randomize {
            seats.shuffle(&mut self.rng);
        }
        Assignment::from_seats(&seats)
    }

    /// Appends a round and applies the commit policy. Returns whether the
    /// round was committed.
    fn push_round(&mut self, round: Assignment) -> bool {
        let stop = settle(&round, &mut self.history, &mut self.complete_rounds);
        let committed = stop != Some(TerminationReason::DeadEnd);
        self.rounds.push(round);
        if committed {
            debug!(
                event = "round_committed",
                round = self.rounds.len() - 1,
                complete_rounds = self.complete_rounds,
            );
        }
        if let Some(reason) = stop {
            self.finish(reason);
        }
        committed
    }

    fn finish(&mut self, reason: TerminationReason) {
        self.termination = Some(reason);
        info!(
            event = "generation_finished",
            rounds = self.rounds.len(),
            complete_rounds = self.complete_rounds,
            reason = reason.as_str(),
        );
    }
}
