//! Transitions of the pushdown automaton.

use super::state::StateId;
use super::symbol::{format_push, Read, StackSymbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup key of a transition: `(state, read-or-ε, stack top)`.
pub type TransitionKey = (StateId, Read, StackSymbol);

/// A single transition `(from, read, pop) → (to, push)`.
///
/// `push` is written in the conventional order: the first symbol of the
/// push string ends up on top of the stack once the transition is applied.
///
/// # Example
///
/// ```rust
/// use pdasim::core::{InputSymbol, Read, StackSymbol, StateId, Transition};
///
/// let transition = Transition {
///     from: StateId(1),
///     read: Read::Symbol(InputSymbol::Y),
///     pop: StackSymbol::Z,
///     to: StateId(0),
///     push: vec![StackSymbol::Y, StackSymbol::Z],
/// };
///
/// assert_eq!(transition.label(), "y,Z/YZ");
/// assert_eq!(transition.to_string(), "q1 --y,Z/YZ--> q0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Source state
    pub from: StateId,
    /// Input symbol consumed, or ε
    pub read: Read,
    /// Stack symbol that must be on top, popped on application
    pub pop: StackSymbol,
    /// Target state
    pub to: StateId,
    /// Symbols pushed after the pop, first symbol on top
    pub push: Vec<StackSymbol>,
}

impl Transition {
    pub fn key(&self) -> TransitionKey {
        (self.from, self.read, self.pop)
    }

    /// Edge label in `read,pop/push` form, ε for an empty read or push.
    pub fn label(&self) -> String {
        format!("{},{}/{}", self.read, self.pop, format_push(&self.push))
    }

    /// Net change in stack height when this transition is applied.
    pub fn stack_delta(&self) -> isize {
        self.push.len() as isize - 1
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.label(), self.to)
    }
}

/// How a configuration was reached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The configuration created by loading an input
    Initial,
    /// The configuration produced by applying a transition
    Applied(Transition),
}

impl Action {
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Initial => None,
            Self::Applied(transition) => Some(transition),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Applied(transition) => write!(f, "{}", transition.label()),
        }
    }
}
