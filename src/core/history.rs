//! Configurations and the execution history.
//!
//! A [`Configuration`] is an immutable snapshot of the automaton. Applying a
//! transition never mutates a configuration; [`Configuration::successor`]
//! returns a new one, which the engine appends to the [`History`].

use super::state::StateId;
use super::symbol::{InputSymbol, StackSymbol};
use super::transition::{Action, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instantaneous description of the automaton.
///
/// # Example
///
/// ```rust
/// use pdasim::core::{Configuration, InputSymbol, StackSymbol, StateId};
///
/// let initial = Configuration::initial(StateId(0), vec![InputSymbol::Y, InputSymbol::Y]);
///
/// assert_eq!(initial.step, 0);
/// assert_eq!(initial.stack, vec![StackSymbol::Z]);
/// assert_eq!(initial.head(), Some(InputSymbol::Y));
/// assert_eq!(initial.to_string(), "0 | q0 | yy | Z | initial");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Index of this configuration in the history
    pub step: usize,
    /// Current control state
    pub state: StateId,
    /// Input not yet consumed, head first
    pub remaining: Vec<InputSymbol>,
    /// Stack contents, bottom first
    pub stack: Vec<StackSymbol>,
    /// How this configuration was reached
    pub last_action: Action,
}

impl Configuration {
    /// The configuration a run starts from: the whole input and a stack
    /// holding only the bottom marker.
    pub fn initial(start: StateId, input: Vec<InputSymbol>) -> Self {
        Self {
            step: 0,
            state: start,
            remaining: input,
            stack: vec![StackSymbol::BOTTOM],
            last_action: Action::Initial,
        }
    }

    /// Next unread input symbol, if any.
    pub fn head(&self) -> Option<InputSymbol> {
        self.remaining.first().copied()
    }

    /// Symbol on top of the stack, if any.
    pub fn top(&self) -> Option<StackSymbol> {
        self.stack.last().copied()
    }

    /// Apply `transition`, returning the resulting configuration.
    ///
    /// The caller is responsible for having resolved `transition` against this
    /// configuration. A real-symbol read consumes the head of the input; an
    /// ε-read leaves it in place. Exactly one stack symbol is popped, then the
    /// push string is pushed back to front so its first symbol is the new top.
    pub fn successor(&self, transition: &Transition) -> Self {
        let remaining = if transition.read.is_epsilon() {
            self.remaining.clone()
        } else {
            self.remaining.get(1..).unwrap_or_default().to_vec()
        };

        let mut stack = self.stack.clone();
        stack.pop();
        stack.extend(transition.push.iter().rev().copied());

        Self {
            step: self.step + 1,
            state: transition.to,
            remaining,
            stack,
            last_action: Action::Applied(transition.clone()),
        }
    }

    /// Input exhausted, in `accept` and with the stack emptied.
    pub fn is_accepting(&self, accept: StateId) -> bool {
        self.remaining.is_empty() && self.state == accept && self.stack.is_empty()
    }

    pub fn remaining_string(&self) -> String {
        self.remaining.iter().map(|s| s.as_char()).collect()
    }

    /// Stack contents bottom to top, `∅` when empty.
    pub fn stack_string(&self) -> String {
        if self.stack.is_empty() {
            "∅".to_string()
        } else {
            self.stack.iter().map(|s| s.as_char()).collect()
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.step,
            self.state,
            self.remaining_string(),
            self.stack_string(),
            self.last_action
        )
    }
}

/// Append-only sequence of configurations, starting with the initial one.
///
/// Entries never change once recorded and the history never shrinks; a new
/// run starts a new history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Configuration>,
}

impl History {
    /// Start a history from the initial configuration.
    pub fn new(initial: Configuration) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Append a configuration.
    pub fn record(&mut self, configuration: Configuration) {
        self.entries.push(configuration);
    }

    /// The most recent configuration.
    pub fn current(&self) -> &Configuration {
        // never empty: a history starts with the initial configuration
        &self.entries[self.entries.len() - 1]
    }

    pub fn initial(&self) -> &Configuration {
        &self.entries[0]
    }

    pub fn get(&self, index: usize) -> Option<&Configuration> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Configuration] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history is never empty once started.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the most recent configuration.
    pub fn current_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Control states visited, in order, starting with the start state.
    pub fn get_path(&self) -> Vec<StateId> {
        self.entries.iter().map(|c| c.state).collect()
    }

    /// Transitions applied so far, in order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.entries.iter().filter_map(|c| c.last_action.transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Read;

    fn input(text: &str) -> Vec<InputSymbol> {
        text.chars().filter_map(InputSymbol::from_char).collect()
    }

    fn push_yz() -> Transition {
        Transition {
            from: StateId(1),
            read: Read::Symbol(InputSymbol::Y),
            pop: StackSymbol::Z,
            to: StateId(0),
            push: vec![StackSymbol::Y, StackSymbol::Z],
        }
    }

    #[test]
    fn initial_configuration_holds_bottom_marker() {
        let initial = Configuration::initial(StateId(0), input("yy"));
        assert_eq!(initial.stack, vec![StackSymbol::Z]);
        assert_eq!(initial.top(), Some(StackSymbol::Z));
        assert_eq!(initial.last_action, Action::Initial);
    }

    #[test]
    fn successor_consumes_real_symbol() {
        let current = Configuration::initial(StateId(1), input("yz"));
        let next = current.successor(&push_yz());

        assert_eq!(next.remaining, input("z"));
        assert_eq!(next.state, StateId(0));
        assert_eq!(next.step, 1);
    }

    #[test]
    fn successor_puts_first_push_symbol_on_top() {
        let current = Configuration::initial(StateId(1), input("y"));
        let next = current.successor(&push_yz());

        // bottom first: the pushed Z lands below the pushed Y
        assert_eq!(next.stack, vec![StackSymbol::Z, StackSymbol::Y]);
        assert_eq!(next.top(), Some(StackSymbol::Y));
    }

    #[test]
    fn epsilon_successor_keeps_input() {
        let current = Configuration::initial(StateId(11), input("y"));
        let pop = Transition {
            from: StateId(11),
            read: Read::Epsilon,
            pop: StackSymbol::Z,
            to: StateId(12),
            push: vec![],
        };

        let next = current.successor(&pop);
        assert_eq!(next.remaining, input("y"));
        assert!(next.stack.is_empty());
        assert_eq!(next.stack_string(), "∅");
    }

    #[test]
    fn successor_leaves_original_untouched() {
        let current = Configuration::initial(StateId(1), input("y"));
        let snapshot = current.clone();
        let _ = current.successor(&push_yz());
        assert_eq!(current, snapshot);
    }

    #[test]
    fn accepting_requires_all_three_conditions() {
        let mut configuration = Configuration::initial(StateId(12), vec![]);
        assert!(!configuration.is_accepting(StateId(12)));

        configuration.stack.clear();
        assert!(configuration.is_accepting(StateId(12)));
        assert!(!configuration.is_accepting(StateId(11)));

        configuration.remaining = input("y");
        assert!(!configuration.is_accepting(StateId(12)));
    }

    #[test]
    fn history_records_in_order() {
        let initial = Configuration::initial(StateId(1), input("yy"));
        let next = initial.successor(&push_yz());
        let mut history = History::new(initial.clone());
        history.record(next.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.initial(), &initial);
        assert_eq!(history.current(), &next);
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.get_path(), vec![StateId(1), StateId(0)]);
        assert_eq!(history.transitions().count(), 1);
        assert!(!history.is_empty());
    }

    #[test]
    fn configuration_row_renders_trace_columns() {
        let initial = Configuration::initial(StateId(1), input("yz"));
        let next = initial.successor(&push_yz());
        assert_eq!(next.to_string(), "1 | q0 | z | ZY | y,Z/YZ");
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new(Configuration::initial(StateId(1), input("y")));
        let next = history.current().successor(&push_yz());
        history.record(next);

        let json = serde_json::to_value(&history).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["state"], 0);
        assert_eq!(entries[1]["stack"], serde_json::json!(["Z", "Y"]));
    }
}
