//! pdasim: a deterministic pushdown automaton simulator
//!
//! pdasim runs a single-stack pushdown automaton one transition at a time and
//! keeps every configuration it passes through, so an external renderer can
//! replay the run step by step.
//!
//! The data model in [`core`] is pure: applying a transition returns a new
//! configuration. The [`engine`] is the thin imperative shell that owns a run.
//!
//! # Core Concepts
//!
//! - **Transition table**: immutable, deterministic `(state, read, top)` map,
//!   validated on construction ([`table`])
//! - **Validator**: static membership test for the target language, applied
//!   before a run starts ([`validator`])
//! - **Engine**: `load`, `step`, `run`, `reset` over an append-only history
//!   ([`engine`])
//! - **Snapshot**: read-only view for renderers ([`observe`])
//!
//! # Example
//!
//! ```rust
//! use pdasim::engine::{Engine, RunOutcome};
//!
//! let mut engine = Engine::standard();
//! engine.load("xxyyzzzzzzyyy").unwrap();
//!
//! assert!(matches!(engine.run(), RunOutcome::Accepted { .. }));
//!
//! for row in engine.snapshot().trace_rows() {
//!     println!("{row}");
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod observe;
pub mod table;
pub mod validator;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use self::core::{Configuration, History, InputSymbol, StackSymbol, StateId, Transition};
pub use engine::{Engine, RunBudget, RunOutcome, RunStatus, StepOutcome};
pub use observe::Snapshot;
pub use table::{TransitionTable, TransitionTableBuilder};
pub use validator::{validate, ValidationError, ValidationResult};
