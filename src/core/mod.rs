//! Core automaton types.
//!
//! This module contains the pure data model of the pushdown automaton:
//! - Input and stack alphabets, and the ε-aware read component
//! - Control state identifiers
//! - Transitions and the actions recorded for them
//! - Immutable configurations and the append-only history
//!
//! Nothing in this module performs I/O or holds shared state. Applying a
//! transition produces a new configuration instead of mutating one.

mod history;
mod state;
mod symbol;
mod transition;

pub use history::{Configuration, History};
pub use state::StateId;
pub use symbol::{format_push, parse_push, InputSymbol, Read, StackSymbol, EPSILON};
pub use transition::{Action, Transition, TransitionKey};
