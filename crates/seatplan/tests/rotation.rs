//! End-to-end runs through the public facade.

use seatplan::prelude::*;
use seatplan::{PersistedState, SeatPlanError};
use seatplan_test::{assert_sequence, names, ordinals};

#[test]
fn test_classroom_rotation_fills_every_seat() {
    seatplan::console::init();

    let config = PlannerConfig::new(names(9))
        .with_randomize(false)
        .with_backtracking(true);
    let mut engine = SeatingEngine::new(&config).unwrap();
    assert_eq!(engine.run_to_terminal(), 8);
    assert_eq!(engine.termination(), Some(TerminationReason::LatinBound));
    assert_sequence(engine.rounds(), 9);

    for entity in 0..9 {
        let mut seen: Vec<usize> = engine
            .rounds()
            .iter()
            .filter_map(|r| r.seat_of(entity))
            .map(|s| s.ordinal())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=9).collect::<Vec<_>>());
    }
}

#[test]
fn test_config_file_drives_engine() {
    let config = PlannerConfig::from_toml_str(
        r#"
        entities = ["Ada", "Bo", "Cy", "Di", "Ed"]
        randomize = false
        number_of_entities_to_use = 3
        "#,
    )
    .unwrap();
    let mut engine = SeatingEngine::new(&config).unwrap();
    engine.run_to_terminal();

    assert_eq!(engine.entities(), ["Ada", "Bo", "Cy"]);
    let last = engine.labelled_round(2).unwrap();
    assert_eq!(
        last,
        vec![
            ("Ada", Seat::from_ordinal(3)),
            ("Bo", Seat::from_ordinal(1)),
            ("Cy", Seat::from_ordinal(2)),
        ]
    );
}

#[test]
fn test_session_survives_json_between_calls() {
    let config = PlannerConfig::new(names(6)).with_random_seed(21);
    let mut engine = SeatingEngine::new(&config).unwrap();
    let mut json = engine.to_json().unwrap();

    // one round per request, state carried only through JSON
    while !engine.is_done() {
        engine = SeatingEngine::from_json(&json).unwrap();
        engine.advance_with(RoundOverrides::new().with_backtracking(true));
        json = engine.to_json().unwrap();
    }

    let state = PersistedState::from_json(&json).unwrap();
    assert!(state.done);
    assert_eq!(state.rounds.len(), engine.rounds().len());
    assert_sequence(engine.rounds(), 6);
}

#[test]
fn test_stored_dead_end_stays_terminal() {
    let json = r#"{
        "names": ["A", "B", "C", "D"],
        "randomize": false,
        "backtracking": false,
        "numberOfEntitiesToUse": 4,
        "done": false,
        "rounds": [
            { "complete": true, "seats": [1, 2, 3, 4] },
            { "complete": true, "seats": [2, 4, 1, 3] },
            { "complete": false, "seats": [3, 1, 2, null] }
        ]
    }"#;
    let mut engine = SeatingEngine::from_json(json).unwrap();
    assert!(engine.is_done());
    assert_eq!(engine.advance(), AdvanceOutcome::AlreadyTerminal);
    assert_eq!(ordinals(&engine.rounds()[2]), vec![Some(3), Some(1), Some(2), None]);
}

#[test]
fn test_repeated_seat_in_stored_rounds_is_rejected() {
    let json = r#"{
        "names": ["A", "B", "C"],
        "randomize": false,
        "backtracking": false,
        "numberOfEntitiesToUse": 3,
        "done": false,
        "rounds": [
            { "complete": true, "seats": [1, 2, 3] },
            { "complete": true, "seats": [1, 3, 2] }
        ]
    }"#;
    let err = SeatingEngine::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        seatplan::PersistError::Invalid(SeatPlanError::RepeatedSeat { entity: 0, .. })
    ));
}
