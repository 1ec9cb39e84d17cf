//! Control state identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a control state of the automaton.
///
/// States are plain integers; they display as `q<N>` the way automata are
/// conventionally drawn.
///
/// # Example
///
/// ```rust
/// use pdasim::core::StateId;
///
/// let start = StateId(0);
/// assert_eq!(start.name(), "q0");
/// assert_eq!(StateId(12).to_string(), "q12");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u16);

impl StateId {
    /// Get the state's display name.
    pub fn name(&self) -> String {
        format!("q{}", self.0)
    }
}

impl From<u16> for StateId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
