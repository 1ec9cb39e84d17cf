//! Simulator configuration.
//!
//! Configuration covers what may vary between sessions: the start and
//! accepting states, the default budget for `run`, and optionally a custom
//! transition listing that replaces the shipped table.

use crate::core::StateId;
use crate::engine::RunBudget;
use crate::table::{
    TableError, TransitionSpec, TransitionTable, STANDARD_ACCEPT, STANDARD_START,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configured transition table is invalid: {0}")]
    Table(#[from] TableError),
}

/// Configuration for an engine.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration describing the shipped automaton with no run budget.
///
/// # Example
///
/// ```rust
/// use pdasim::config::SimulatorConfig;
/// use pdasim::core::StateId;
///
/// let config = SimulatorConfig::from_json_str(r#"{ "max_steps": 500 }"#).unwrap();
/// assert_eq!(config.start_state, StateId(0));
/// assert_eq!(config.accept_state, StateId(12));
/// assert_eq!(config.default_budget().max_steps, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// State a loaded run starts in
    pub start_state: StateId,
    /// State that, with empty input and stack, accepts
    pub accept_state: StateId,
    /// Default step limit for `run`
    pub max_steps: Option<usize>,
    /// Default wall-clock limit for `run`, in milliseconds
    pub timeout_ms: Option<u64>,
    /// Custom transition listing; the shipped table when absent
    pub transitions: Option<Vec<TransitionSpec>>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            start_state: STANDARD_START,
            accept_state: STANDARD_ACCEPT,
            max_steps: None,
            timeout_ms: None,
            transitions: None,
        }
    }
}

impl SimulatorConfig {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> SimulatorConfigBuilder {
        SimulatorConfigBuilder::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Budget applied by `Engine::run`.
    #[must_use]
    pub fn default_budget(&self) -> RunBudget {
        RunBudget {
            max_steps: self.max_steps,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }

    /// Build the configured transition table.
    pub fn build_table(&self) -> Result<TransitionTable, ConfigError> {
        match &self.transitions {
            Some(specs) => Ok(TransitionTable::builder()
                .specs(specs.iter().cloned())
                .build()?),
            None => Ok(TransitionTable::standard()),
        }
    }
}

/// Builder for `SimulatorConfig`
#[derive(Debug, Clone, Default)]
pub struct SimulatorConfigBuilder {
    config: SimulatorConfig,
}

impl SimulatorConfigBuilder {
    /// Set the start state
    #[must_use]
    pub fn start_state(mut self, state: impl Into<StateId>) -> Self {
        self.config.start_state = state.into();
        self
    }

    /// Set the accepting state
    #[must_use]
    pub fn accept_state(mut self, state: impl Into<StateId>) -> Self {
        self.config.accept_state = state.into();
        self
    }

    /// Set the default step limit
    #[must_use]
    pub fn max_steps(mut self, n: usize) -> Self {
        self.config.max_steps = Some(n);
        self
    }

    /// Set the default wall-clock limit, rounded up to whole milliseconds
    #[must_use]
    pub fn timeout(mut self, duration: Duration) -> Self {
        let millis = duration.as_nanos().div_ceil(1_000_000);
        self.config.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// Replace the shipped table with a custom listing
    #[must_use]
    pub fn transitions(mut self, specs: Vec<TransitionSpec>) -> Self {
        self.config.transitions = Some(specs);
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> SimulatorConfig {
        self.config
    }
}
