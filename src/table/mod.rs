//! Transition tables.
//!
//! A [`TransitionTable`] is built once through [`TransitionTableBuilder`] and is
//! immutable afterwards. Re-initialization means building a new table, never
//! patching an existing one, so a table can be shared between engines behind
//! an `Arc`.
//!
//! # Resolution policy
//!
//! [`TransitionTable::lookup`] makes at most two attempts:
//! 1. the exact-symbol transition for `(state, symbol, top)`, when an input
//!    symbol is available;
//! 2. the ε-transition for `(state, ε, top)`.
//!
//! A real-symbol transition therefore always wins over an ε-transition from the
//! same state and stack top.

pub mod builder;
pub mod error;
#[macro_use]
pub mod macros;

pub use builder::{TransitionSpec, TransitionTableBuilder};
pub use error::{TableError, TableViolation};

use crate::core::{InputSymbol, Read, StackSymbol, StateId, Transition, TransitionKey};
use std::collections::{BTreeSet, HashMap};

/// Start state of the shipped automaton.
pub const STANDARD_START: StateId = StateId(0);

/// Accepting state of the shipped automaton.
pub const STANDARD_ACCEPT: StateId = StateId(12);

/// Immutable, deterministic transition table.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
    index: HashMap<TransitionKey, usize>,
}

impl TransitionTable {
    /// Create a new builder.
    pub fn builder() -> TransitionTableBuilder {
        TransitionTableBuilder::new()
    }

    pub(crate) fn from_parts(
        transitions: Vec<Transition>,
        index: HashMap<TransitionKey, usize>,
    ) -> Self {
        Self { transitions, index }
    }

    /// Definitions of the shipped automaton, in listing order.
    ///
    /// It recognizes `xᵃ y²ⁿ z^{2m+2} y³ⁿ` (a ≥ 0, n ≥ 1, m ≥ 2) from `q0`,
    /// accepting in `q12` with an empty stack.
    pub fn standard_specs() -> Vec<TransitionSpec> {
        transitions! {
            0, "y", 'Z' => 1, "Z";
            0, "y", 'Y' => 1, "Y";
            0, "z", 'Y' => 2, "Y";
            0, "x", 'Z' => 0, "Z";
            0, "x", 'Y' => 0, "Y";
            1, "y", 'Y' => 0, "YY";
            1, "y", 'Z' => 0, "YZ";
            2, "z", 'Y' => 3, "Y";
            3, "z", 'Y' => 4, "Y";
            4, "z", 'Y' => 5, "Y";
            5, "z", 'Y' => 6, "Y";
            6, "z", 'Y' => 7, "Y";
            7, "z", 'Y' => 8, "Y";
            8, "z", 'Y' => 7, "Y";
            7, "y", 'Y' => 9, "Y";
            9, "y", 'Y' => 10, "Y";
            10, "y", 'Y' => 11, "";
            11, "y", 'Y' => 9, "Y";
            11, "", 'Z' => 12, "";
        }
    }

    /// The shipped automaton.
    pub fn standard() -> Self {
        TransitionTableBuilder::new()
            .specs(Self::standard_specs())
            .build()
            .expect("Standard transition table should always build")
    }

    /// Resolve the transition to apply.
    ///
    /// `symbol` is the head of the remaining input, or `None` once the input is
    /// exhausted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdasim::core::{InputSymbol, Read, StackSymbol, StateId};
    /// use pdasim::table::TransitionTable;
    ///
    /// let table = TransitionTable::standard();
    ///
    /// let first = table.lookup(StateId(0), Some(InputSymbol::Y), StackSymbol::Z).unwrap();
    /// assert_eq!(first.to, StateId(1));
    ///
    /// let last = table.lookup(StateId(11), None, StackSymbol::Z).unwrap();
    /// assert_eq!(last.read, Read::Epsilon);
    ///
    /// assert!(table.lookup(StateId(2), Some(InputSymbol::Y), StackSymbol::Y).is_none());
    /// ```
    pub fn lookup(
        &self,
        state: StateId,
        symbol: Option<InputSymbol>,
        top: StackSymbol,
    ) -> Option<&Transition> {
        symbol
            .and_then(|s| self.get(&(state, Read::Symbol(s), top)))
            .or_else(|| self.get(&(state, Read::Epsilon, top)))
    }

    /// Exact-key access, without the ε fallback.
    pub fn get(&self, key: &TransitionKey) -> Option<&Transition> {
        self.index.get(key).map(|&i| &self.transitions[i])
    }

    /// All transitions, in definition order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Every state mentioned as a source or target, ascending.
    pub fn states(&self) -> BTreeSet<StateId> {
        self.transitions
            .iter()
            .flat_map(|t| [t.from, t.to])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn standard_table_has_nineteen_transitions() {
        let table = TransitionTable::standard();
        assert_eq!(table.len(), 19);
        assert!(!table.is_empty());
        assert_eq!(table.states().len(), 13);
        assert_eq!(table.states().first(), Some(&STANDARD_START));
        assert_eq!(table.states().last(), Some(&STANDARD_ACCEPT));
    }

    #[test]
    fn listing_order_is_preserved() {
        let table = TransitionTable::standard();
        let first = &table.transitions()[0];
        let last = &table.transitions()[18];

        assert_eq!(first.to_string(), "q0 --y,Z/Z--> q1");
        assert_eq!(last.to_string(), "q11 --ε,Z/ε--> q12");
    }

    #[test]
    fn real_symbol_wins_over_epsilon() {
        let table = TransitionTable::builder()
            .define(0, "y", 'Z', 1, "Z")
            .define(0, "", 'Z', 2, "")
            .build()
            .unwrap();

        let with_input = table
            .lookup(StateId(0), Some(InputSymbol::Y), StackSymbol::Z)
            .unwrap();
        assert_eq!(with_input.to, StateId(1));

        let other_symbol = table
            .lookup(StateId(0), Some(InputSymbol::X), StackSymbol::Z)
            .unwrap();
        assert_eq!(other_symbol.to, StateId(2));

        let exhausted = table.lookup(StateId(0), None, StackSymbol::Z).unwrap();
        assert_eq!(exhausted.to, StateId(2));
    }

    #[test]
    fn exhausted_input_never_matches_real_symbols() {
        let table = TransitionTable::standard();
        assert!(table.lookup(StateId(0), None, StackSymbol::Z).is_none());
    }

    #[test]
    fn get_does_not_fall_back_to_epsilon() {
        let table = TransitionTable::standard();
        let key = (StateId(11), Read::Symbol(InputSymbol::Y), StackSymbol::Z);
        assert!(table.get(&key).is_none());
    }

    #[test]
    fn table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransitionTable>();

        let table = Arc::new(TransitionTable::standard());
        let handle = {
            let table = Arc::clone(&table);
            std::thread::spawn(move || table.len())
        };
        assert_eq!(handle.join().unwrap(), table.len());
    }
}
