//! Engine that loads inputs and steps the automaton.

use crate::config::{ConfigError, SimulatorConfig};
use crate::core::{Configuration, History, InputSymbol, StateId};
use crate::engine::budget::RunBudget;
use crate::engine::error::LoadError;
use crate::engine::outcome::{RunOutcome, RunStatus, StepOutcome, StuckConfiguration};
use crate::observe::Snapshot;
use crate::table::TransitionTable;
use crate::validator::{self, LanguageParams};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Returned by a successful `load`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub run_id: Uuid,
    pub params: LanguageParams,
    pub message: String,
}

/// The run owned by an engine between `load` and `reset`.
#[derive(Clone, Debug)]
pub(crate) struct ActiveRun {
    pub(crate) id: Uuid,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) params: LanguageParams,
    pub(crate) history: History,
    pub(crate) status: RunStatus,
    pub(crate) stuck: Option<StuckConfiguration>,
}

/// Deterministic pushdown automaton engine.
///
/// The engine owns at most one run at a time. The transition table is shared
/// and never modified; everything the engine mutates lives in the run.
///
/// # Example
///
/// ```rust
/// use pdasim::engine::{Engine, RunOutcome, RunStatus};
///
/// let mut engine = Engine::standard();
/// let summary = engine.load("yyzzzzzzyyy").unwrap();
/// assert_eq!((summary.params.n, summary.params.m), (1, 2));
///
/// assert!(engine.step().is_applied());
/// assert!(matches!(engine.run(), RunOutcome::Accepted { .. }));
///
/// let snapshot = engine.snapshot();
/// assert_eq!(snapshot.status, RunStatus::Accepted);
/// assert!(snapshot.stack.is_empty());
/// assert!(snapshot.remaining.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    table: Arc<TransitionTable>,
    config: SimulatorConfig,
    run: Option<ActiveRun>,
}

impl Engine {
    /// Create an engine over `table`.
    ///
    /// `table` is the one the engine runs, so any custom listing in
    /// `config.transitions` is dropped. Use [`Engine::from_config`] to build
    /// the table from that listing instead.
    pub fn new(table: Arc<TransitionTable>, config: SimulatorConfig) -> Self {
        Self {
            table,
            config: SimulatorConfig {
                transitions: None,
                ..config
            },
            run: None,
        }
    }

    /// The shipped automaton with default configuration.
    pub fn standard() -> Self {
        Self::new(Arc::new(TransitionTable::standard()), SimulatorConfig::default())
    }

    /// Build the configured table and create an engine over it.
    pub fn from_config(config: SimulatorConfig) -> Result<Self, ConfigError> {
        let table = config.build_table()?;
        Ok(Self {
            table: Arc::new(table),
            config,
            run: None,
        })
    }

    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Get current run status (pure)
    pub fn status(&self) -> RunStatus {
        self.run.as_ref().map_or(RunStatus::Unloaded, |run| run.status)
    }

    /// Get run history (pure). `None` when nothing is loaded.
    pub fn history(&self) -> Option<&History> {
        self.run.as_ref().map(|run| &run.history)
    }

    /// Current configuration (pure). `None` when nothing is loaded.
    pub fn current(&self) -> Option<&Configuration> {
        self.history().map(History::current)
    }

    /// Read-only view for observers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(self.run.as_ref())
    }

    /// Validate `input` and start a new run from it.
    ///
    /// Surrounding whitespace is ignored. On failure the engine is left
    /// unchanged, including any run already loaded.
    pub fn load(&mut self, input: &str) -> Result<LoadSummary, LoadError> {
        let input = input.trim();
        let params = validator::validate(input).inspect_err(|error| {
            warn!(input, %error, "Refusing to load input");
        })?;
        let symbols: Vec<InputSymbol> = input.chars().filter_map(InputSymbol::from_char).collect();

        let run = ActiveRun {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            params,
            history: History::new(Configuration::initial(self.config.start_state, symbols)),
            status: RunStatus::Running,
            stuck: None,
        };

        info!(
            run_id = %run.id,
            input,
            n = params.n,
            m = params.m,
            "Loaded input"
        );

        let summary = LoadSummary {
            run_id: run.id,
            params,
            message: params.message(),
        };
        self.run = Some(run);
        Ok(summary)
    }

    /// Execute one step of the automaton.
    ///
    /// Resolves a transition from the current state, the head of the remaining
    /// input and the top of the stack, applies it and records the resulting
    /// configuration. When nothing applies the run is rejected.
    pub fn step(&mut self) -> StepOutcome {
        let Some(run) = self.run.as_mut() else {
            return StepOutcome::NotLoaded;
        };
        if run.status.is_terminal() {
            return StepOutcome::AlreadyFinished(run.status);
        }

        let current = run.history.current();
        let symbol = current.head();
        let stuck = StuckConfiguration {
            step: current.step,
            state: current.state,
            symbol,
            top: current.top(),
        };

        let transition = current
            .top()
            .and_then(|top| self.table.lookup(current.state, symbol, top));

        let Some(transition) = transition else {
            info!(run_id = %run.id, %stuck, "Run rejected");
            run.status = RunStatus::Rejected;
            run.stuck = Some(stuck.clone());
            return StepOutcome::Stuck(stuck);
        };

        debug!(
            run_id = %run.id,
            step = current.step,
            state = %current.state,
            remaining = %current.remaining_string(),
            stack = %current.stack_string(),
            %transition,
            "Applying transition"
        );

        let next = current.successor(transition);
        let step = next.step;
        if next.is_accepting(self.config.accept_state) {
            run.status = RunStatus::Accepted;
            info!(run_id = %run.id, steps = step, "Run accepted");
        }
        run.history.record(next);

        StepOutcome::Applied {
            step,
            transition: transition.clone(),
            status: run.status,
        }
    }

    /// Step until a verdict, using the configured default budget.
    pub fn run(&mut self) -> RunOutcome {
        self.run_with(self.config.default_budget())
    }

    /// Step until a verdict or until `budget` runs out.
    ///
    /// An exhausted budget leaves the run in `Running`, so calling `run` again
    /// continues where it stopped.
    pub fn run_with(&mut self, budget: RunBudget) -> RunOutcome {
        match self.status() {
            RunStatus::Unloaded => return RunOutcome::NotLoaded,
            status if status.is_terminal() => return RunOutcome::AlreadyFinished(status),
            _ => {}
        }

        let clock = budget.start();
        let mut steps = 0;
        loop {
            if let Err(violation) = clock.check(steps) {
                warn!(steps, %violation, "Run budget exhausted");
                return RunOutcome::BudgetExceeded { steps, violation };
            }

            match self.step() {
                StepOutcome::Applied { status, .. } => {
                    steps += 1;
                    if status == RunStatus::Accepted {
                        return RunOutcome::Accepted { steps };
                    }
                }
                StepOutcome::Stuck(stuck) => return RunOutcome::Rejected { steps, stuck },
                StepOutcome::AlreadyFinished(status) => {
                    return RunOutcome::AlreadyFinished(status)
                }
                StepOutcome::NotLoaded => return RunOutcome::NotLoaded,
            }
        }
    }

    /// Discard the current run, returning to the unloaded state.
    pub fn reset(&mut self) {
        if let Some(run) = self.run.take() {
            debug!(run_id = %run.id, "Run discarded");
        }
    }

    /// Accepting state used by the acceptance check.
    pub fn accept_state(&self) -> StateId {
        self.config.accept_state
    }
}
