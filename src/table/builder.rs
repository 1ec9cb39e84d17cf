//! Builder for constructing transition tables.

use crate::core::{parse_push, Read, StackSymbol, StateId, Transition, TransitionKey};
use crate::table::error::{TableError, TableViolation};
use crate::table::TransitionTable;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Textual definition of one transition, as written in a table listing or a
/// configuration file.
///
/// `read` and `push` accept `""` or `"ε"` for the empty read and push.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from: u16,
    #[serde(default)]
    pub read: String,
    pub pop: char,
    pub to: u16,
    #[serde(default)]
    pub push: String,
}

impl TransitionSpec {
    pub fn new(from: u16, read: &str, pop: char, to: u16, push: &str) -> Self {
        Self {
            from,
            read: read.to_string(),
            pop,
            to,
            push: push.to_string(),
        }
    }

    /// Parse into a typed transition. `position` is only used for diagnostics.
    fn parse(&self, position: usize) -> Result<Transition, TableViolation> {
        let invalid = |field: &'static str, text: String| TableViolation::InvalidSymbol {
            position,
            field,
            text,
        };

        let read = Read::parse(&self.read).ok_or_else(|| invalid("read symbol", self.read.clone()))?;
        let pop = StackSymbol::from_char(self.pop)
            .ok_or_else(|| invalid("stack symbol", self.pop.to_string()))?;
        let push = parse_push(&self.push).map_err(|_| invalid("push string", self.push.clone()))?;

        Ok(Transition {
            from: StateId(self.from),
            read,
            pop,
            to: StateId(self.to),
            push,
        })
    }
}

/// Builder for transition tables with a fluent API.
///
/// Definitions are checked only on [`build`](Self::build), which reports every
/// malformed or duplicate definition at once instead of stopping at the first.
/// A duplicate `(state, read, pop)` key is an error: the automaton must stay
/// deterministic, and a later definition never shadows an earlier one.
///
/// # Example
///
/// ```rust
/// use pdasim::table::{TableError, TransitionTableBuilder};
///
/// let table = TransitionTableBuilder::new()
///     .define(0, "y", 'Z', 1, "Z")
///     .define(1, "", 'Z', 2, "")
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 2);
///
/// let duplicate = TransitionTableBuilder::new()
///     .define(0, "y", 'Z', 1, "Z")
///     .define(0, "y", 'Z', 2, "YZ")
///     .build();
/// assert!(matches!(duplicate, Err(TableError::Invalid(_))));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionTableBuilder {
    specs: Vec<TransitionSpec>,
}

impl TransitionTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Register one transition `(from, read, pop) → (to, push)`.
    pub fn define(mut self, from: u16, read: &str, pop: char, to: u16, push: &str) -> Self {
        self.specs.push(TransitionSpec::new(from, read, pop, to, push));
        self
    }

    /// Register a pre-parsed definition.
    pub fn spec(mut self, spec: TransitionSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Register multiple definitions at once.
    pub fn specs(mut self, specs: impl IntoIterator<Item = TransitionSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Build the table.
    /// Returns an error listing all invalid and duplicate definitions.
    pub fn build(self) -> Result<TransitionTable, TableError> {
        if self.specs.is_empty() {
            return Err(TableError::NoTransitions);
        }

        let mut transitions: Vec<Transition> = Vec::with_capacity(self.specs.len());
        let mut index: HashMap<TransitionKey, usize> = HashMap::new();
        let mut defined_at: Vec<usize> = Vec::with_capacity(self.specs.len());
        let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

        for (position, spec) in self.specs.iter().enumerate() {
            let check = match spec.parse(position) {
                Ok(transition) => match index.entry(transition.key()) {
                    Entry::Occupied(slot) => Validation::fail(TableViolation::DuplicateTransition {
                        from: spec.from,
                        read: transition.read.to_string(),
                        pop: spec.pop,
                        first: defined_at[*slot.get()],
                        duplicate: position,
                    }),
                    Entry::Vacant(slot) => {
                        slot.insert(transitions.len());
                        transitions.push(transition);
                        defined_at.push(position);
                        Validation::success(())
                    }
                },
                Err(violation) => Validation::fail(violation),
            };
            checks.push(check);
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(TransitionTable::from_parts(transitions, index)),
            Validation::Failure(violations) => {
                Err(TableError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
