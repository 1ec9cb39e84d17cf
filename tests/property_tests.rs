//! Property-based tests for the validator and the engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use pdasim::core::{Configuration, InputSymbol, StateId};
use pdasim::engine::{Engine, RunBudget, RunOutcome, RunStatus, StepOutcome};
use pdasim::table::{TransitionTable, STANDARD_ACCEPT, STANDARD_START};
use pdasim::validator::{validate, ValidationError};
use pdasim::SimulatorConfig;
use proptest::prelude::*;
use std::sync::Arc;

fn member(a: usize, n: usize, m: usize) -> String {
    format!(
        "{}{}{}{}",
        "x".repeat(a),
        "y".repeat(2 * n),
        "z".repeat(2 * m + 2),
        "y".repeat(3 * n)
    )
}

/// Run the table directly, without the validator gate.
fn table_accepts(table: &TransitionTable, input: &str, max_steps: usize) -> bool {
    let symbols = input.chars().filter_map(InputSymbol::from_char).collect();
    let mut current = Configuration::initial(STANDARD_START, symbols);
    for _ in 0..max_steps {
        if current.is_accepting(STANDARD_ACCEPT) {
            return true;
        }
        let Some(top) = current.top() else {
            return false;
        };
        match table.lookup(current.state, current.head(), top) {
            Some(transition) => current = current.successor(transition),
            None => return false,
        }
    }
    current.is_accepting(STANDARD_ACCEPT)
}

prop_compose! {
    fn arbitrary_input(max_len: usize)(chars in prop::collection::vec(
        prop_oneof![Just('x'), Just('y'), Just('z')], 1..max_len
    )) -> String {
        chars.into_iter().collect()
    }
}

prop_compose! {
    fn arbitrary_member()(a in 0..4usize, n in 1..5usize, m in 2..6usize) -> (String, usize, usize) {
        (member(a, n, m), n, m)
    }
}

proptest! {
    #[test]
    fn validator_accepts_language_members((input, n, m) in arbitrary_member()) {
        let params = validate(&input).unwrap();
        prop_assert_eq!(params.n, n);
        prop_assert_eq!(params.m, m);
    }

    #[test]
    fn validator_accepted_strings_are_engine_accepted((input, _n, _m) in arbitrary_member()) {
        let mut engine = Engine::standard();
        engine.load(&input).unwrap();
        prop_assert!(engine.run().is_accepted());
    }

    #[test]
    fn validator_matches_closed_form(input in arbitrary_input(24)) {
        let accepted = validate(&input).is_ok();
        let expected = (0..24).any(|a| (1..5).any(|n| (2..11).any(|m| member(a, n, m) == input)));
        prop_assert_eq!(accepted, expected);
    }

    #[test]
    fn independent_engines_step_identically(
        input in prop_oneof![arbitrary_input(20), arbitrary_member().prop_map(|(s, _, _)| s)]
    ) {
        let mut left = Engine::new(Arc::new(TransitionTable::standard()), SimulatorConfig::default());
        let mut right = Engine::new(Arc::new(TransitionTable::standard()), SimulatorConfig::default());
        if left.load(&input).is_err() {
            return Ok(());
        }
        right.load(&input).unwrap();

        for _ in 0..200 {
            let outcome = left.step();
            prop_assert_eq!(&outcome, &right.step());
            prop_assert_eq!(left.current(), right.current());
            if !outcome.is_applied() {
                break;
            }
        }
        prop_assert_eq!(left.status(), right.status());
    }

    #[test]
    fn steps_preserve_stack_and_input_invariants((input, _n, _m) in arbitrary_member()) {
        let mut engine = Engine::standard();
        engine.load(&input).unwrap();

        loop {
            let before = engine.current().unwrap().clone();
            match engine.step() {
                StepOutcome::Applied { transition, .. } => {
                    let after = engine.current().unwrap();
                    prop_assert_eq!(
                        after.stack.len() as isize,
                        before.stack.len() as isize + transition.stack_delta()
                    );
                    let consumed = before.remaining.len() - after.remaining.len();
                    prop_assert_eq!(consumed, usize::from(!transition.read.is_epsilon()));
                }
                _ => break,
            }
        }
    }

    #[test]
    fn accepted_only_in_accepting_configuration(
        input in prop_oneof![arbitrary_input(20), arbitrary_member().prop_map(|(s, _, _)| s)]
    ) {
        let mut engine = Engine::standard();
        if engine.load(&input).is_err() {
            return Ok(());
        }
        let outcome = engine.run_with(RunBudget::unlimited().max_steps(200));
        let current = engine.current().unwrap();
        if matches!(outcome, RunOutcome::Accepted { .. }) {
            prop_assert_eq!(engine.status(), RunStatus::Accepted);
            prop_assert!(current.remaining.is_empty());
            prop_assert!(current.stack.is_empty());
            prop_assert_eq!(current.state, StateId(12));
        } else {
            prop_assert_ne!(engine.status(), RunStatus::Accepted);
        }
    }

    #[test]
    fn history_is_append_only((input, _n, _m) in arbitrary_member(), batches in prop::collection::vec(1..6usize, 1..8)) {
        let mut engine = Engine::standard();
        engine.load(&input).unwrap();
        let mut seen = engine.history().unwrap().entries().to_vec();

        for batch in batches {
            for _ in 0..batch {
                engine.step();
            }
            let history = engine.history().unwrap().entries();
            prop_assert!(history.len() >= seen.len());
            prop_assert_eq!(&history[..seen.len()], seen.as_slice());
            seen = history.to_vec();
        }
    }
}

#[test]
fn validator_gate_implies_engine_acceptance_up_to_length_eleven() {
    let table = TransitionTable::standard();
    let mut layer = vec![String::new()];
    let mut members = 0;

    for _ in 0..11 {
        let mut next = Vec::with_capacity(layer.len() * 3);
        for prefix in &layer {
            for c in ['x', 'y', 'z'] {
                let input = format!("{prefix}{c}");
                if validate(&input).is_ok() {
                    members += 1;
                    assert!(table_accepts(&table, &input, 64), "{input} not accepted");
                }
                next.push(input);
            }
        }
        layer = next;
    }

    // yyzzzzzzyyy is the only member of length ≤ 11
    assert_eq!(members, 1);
}

#[test]
fn table_accepts_strings_outside_validated_language() {
    // the shipped table tolerates x's between y-pairs; the validator does not
    let input = "yyxyyzzzzzzyyyyyy";
    assert_eq!(validate(input), Err(ValidationError::MalformedShape));
    assert!(table_accepts(&TransitionTable::standard(), input, 64));
}
