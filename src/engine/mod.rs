//! Execution engine for the pushdown automaton.
//!
//! This module is the imperative shell around the pure core: it owns the run
//! created by `load`, applies transitions resolved from a shared
//! [`TransitionTable`](crate::table::TransitionTable), and records every
//! configuration in an append-only history.
//!
//! # Key Concepts
//!
//! - **Engine**: loads validated input, steps, runs, resets
//! - **Outcomes**: stepping and running return values, never errors; a stuck
//!   configuration is an ordinary rejection
//! - **Budgets**: optional step and wall-clock limits keep `run` from
//!   spinning forever on a table with an ε-cycle
//!
//! The engine is synchronous and single-threaded. Every operation runs to
//! completion before returning.

mod budget;
mod error;
mod machine;
mod outcome;

pub use budget::{BudgetViolation, RunBudget};
pub use error::LoadError;
pub use machine::{Engine, LoadSummary};
pub use outcome::{RunOutcome, RunStatus, StepOutcome, StuckConfiguration};

pub(crate) use machine::ActiveRun;
