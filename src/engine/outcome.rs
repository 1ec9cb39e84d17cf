//! Outcomes of engine operations.
//!
//! None of these are errors: a stuck configuration is how the automaton says
//! "not a member", and calling `step`/`run` at the wrong time is a no-op.

use super::budget::BudgetViolation;
use crate::core::{InputSymbol, StackSymbol, StateId, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the engine's current run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No input loaded
    Unloaded,
    /// Loaded, no verdict yet
    Running,
    /// Reached the accepting configuration
    Accepted,
    /// Reached a configuration with no applicable transition
    Rejected,
}

impl RunStatus {
    /// Accepted and rejected runs take no further steps.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unloaded => "unloaded",
            Self::Running => "running",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        f.write_str(text)
    }
}

/// A configuration from which no transition applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StuckConfiguration {
    /// History index of the stuck configuration
    pub step: usize,
    pub state: StateId,
    /// Head of the remaining input, `None` once exhausted
    pub symbol: Option<InputSymbol>,
    /// Top of the stack, `None` once emptied
    pub top: Option<StackSymbol>,
}

impl fmt::Display for StuckConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol.map_or("ε".to_string(), |s| s.to_string());
        let top = self.top.map_or("∅".to_string(), |s| s.to_string());
        write!(f, "no transition for ({}, '{}', '{}')", self.state, symbol, top)
    }
}

/// Result of a single `step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A transition was applied
    Applied {
        /// History index of the new configuration
        step: usize,
        transition: Transition,
        /// Status after the step: `Accepted` or still `Running`
        status: RunStatus,
    },

    /// No transition applied; the run is now rejected
    Stuck(StuckConfiguration),

    /// The run already has a verdict; nothing changed
    AlreadyFinished(RunStatus),

    /// Nothing is loaded; nothing changed
    NotLoaded,
}

impl StepOutcome {
    /// Whether a transition was actually applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Result of `run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run reached the accepting configuration
    Accepted { steps: usize },

    /// The run got stuck
    Rejected {
        steps: usize,
        stuck: StuckConfiguration,
    },

    /// The budget ran out before a verdict; the run can be resumed
    BudgetExceeded {
        steps: usize,
        violation: BudgetViolation,
    },

    /// The run already had a verdict; nothing changed
    AlreadyFinished(RunStatus),

    /// Nothing is loaded; nothing changed
    NotLoaded,
}

impl RunOutcome {
    /// Steps applied by this call to `run`.
    pub fn steps(&self) -> usize {
        match self {
            Self::Accepted { steps }
            | Self::Rejected { steps, .. }
            | Self::BudgetExceeded { steps, .. } => *steps,
            Self::AlreadyFinished(_) | Self::NotLoaded => 0,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
