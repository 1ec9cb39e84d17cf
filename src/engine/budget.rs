//! Step and wall-clock budgets for `run`.
//!
//! A run with a transition table that cycles on ε-transitions never ends on
//! its own. A [`RunBudget`] bounds it by step count, elapsed time, or both;
//! exhausting it is reported separately from rejection and leaves the run
//! resumable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Why a budgeted run stopped early.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetViolation {
    #[error("Maximum steps ({max}) exceeded without reaching a verdict")]
    MaxStepsExceeded { max: usize },

    #[error("Timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    TimeoutExceeded {
        timeout: Duration,
        elapsed: Duration,
    },
}

/// Limits applied to a single call to `run`.
///
/// # Example
///
/// ```rust
/// use pdasim::engine::RunBudget;
/// use std::time::Duration;
///
/// let budget = RunBudget::unlimited()
///     .max_steps(1_000)
///     .timeout(Duration::from_secs(1));
///
/// assert_eq!(budget.max_steps, Some(1_000));
/// assert!(!budget.is_unlimited());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunBudget {
    pub max_steps: Option<usize>,
    pub timeout: Option<Duration>,
}

impl RunBudget {
    /// No limits: `run` continues until a verdict.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Limit the number of steps applied by one call to `run`.
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Limit the wall-clock time spent in one call to `run`.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_steps.is_none() && self.timeout.is_none()
    }

    /// Start measuring against this budget.
    pub(crate) fn start(self) -> BudgetClock {
        BudgetClock {
            budget: self,
            started_at: Utc::now(),
        }
    }
}

/// A budget bound to the moment a run started.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BudgetClock {
    budget: RunBudget,
    started_at: DateTime<Utc>,
}

impl BudgetClock {
    /// Elapsed time since the run started.
    pub(crate) fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Check whether another step may be taken after `steps` applied ones.
    pub(crate) fn check(&self, steps: usize) -> Result<(), BudgetViolation> {
        if let Some(max) = self.budget.max_steps {
            if steps >= max {
                return Err(BudgetViolation::MaxStepsExceeded { max });
            }
        }

        if let Some(timeout) = self.budget.timeout {
            let elapsed = self.elapsed();
            if elapsed > timeout {
                return Err(BudgetViolation::TimeoutExceeded { timeout, elapsed });
            }
        }

        Ok(())
    }
}
