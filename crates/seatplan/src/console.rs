//! Console output for engine events.
//!
//! Provides a `tracing` layer that prints engine lifecycle events as single
//! readable lines.
//!
//! ## Log Levels
//!
//! - **INFO**: Engine created or restored, generation finished
//! - **DEBUG**: Committed and repaired rounds
//! - **TRACE**: Individual seat placements

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "seatplan_engine=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`; otherwise logs engine events at INFO.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(EngineConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats engine events.
pub struct EngineConsoleLayer;

impl<S: Subscriber> Layer<S> for EngineConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("seatplan_engine") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_engine_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    reason: Option<String>,
    entities: Option<u64>,
    rounds: Option<u64>,
    round: Option<u64>,
    complete_rounds: Option<u64>,
    repairs: Option<u64>,
    randomize: Option<bool>,
    backtracking: Option<bool>,
    done: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}").trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "entities" => self.entities = Some(value),
            "rounds" => self.rounds = Some(value),
            "round" => self.round = Some(value),
            "complete_rounds" => self.complete_rounds = Some(value),
            "repairs" => self.repairs = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "randomize" => self.randomize = Some(value),
            "backtracking" => self.backtracking = Some(value),
            "done" => self.done = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn on_off(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "on",
        _ => "off",
    }
}

fn format_engine_event(v: &EventVisitor) -> String {
    let entities = v.entities.unwrap_or(0);
    let rounds = v.rounds.unwrap_or(0);
    let round = v.round.unwrap_or(0);
    let complete = v.complete_rounds.unwrap_or(0);

    match v.event.as_deref() {
        Some("engine_created") => format!(
            "[SeatPlan] {entities} entities, randomize {}, backtracking {}",
            on_off(v.randomize),
            on_off(v.backtracking)
        ),
        Some("engine_restored") => format!(
            "[SeatPlan] restored {rounds} rounds for {entities} entities{}",
            if v.done == Some(true) { " (done)" } else { "" }
        ),
        Some("round_committed") => {
            format!("    -> round {:>4} committed ({complete} complete)", round + 1)
        }
        Some("round_repaired") => format!(
            "    -> round {:>4} needed {} repairs",
            round + 1,
            v.repairs.unwrap_or(0)
        ),
        Some("generation_finished") => format!(
            "[SeatPlan] finished: {rounds} rounds, {complete} complete, reason ({})",
            v.reason.as_deref().unwrap_or("unknown")
        ),
        _ => String::new(),
    }
}
