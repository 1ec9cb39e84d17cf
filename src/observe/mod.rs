//! Read-only observation of an engine.
//!
//! Renderers poll [`Engine::snapshot`](crate::engine::Engine::snapshot) after
//! every `load`, `step`, `run` or `reset`. A snapshot borrows from the engine,
//! so it cannot outlive the next mutation and cannot be used to change engine
//! state.

use crate::core::{Action, Configuration, InputSymbol, StackSymbol, StateId};
use crate::engine::{ActiveRun, RunStatus, StuckConfiguration};
use crate::validator::LanguageParams;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Everything a renderer needs to draw the current run.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Identifier of the loaded run
    pub run_id: Option<Uuid>,
    /// When the run was loaded
    pub started_at: Option<DateTime<Utc>>,
    pub status: RunStatus,
    /// Parameters derived by the validator at load time
    pub params: Option<LanguageParams>,
    /// Current control state
    pub state: Option<StateId>,
    /// Input not yet consumed, head first
    pub remaining: &'a [InputSymbol],
    /// Stack contents, bottom first
    pub stack: &'a [StackSymbol],
    /// How the current configuration was reached
    pub last_action: Option<&'a Action>,
    /// Every configuration of the run, initial first
    pub history: &'a [Configuration],
    /// History index of the configuration on display
    pub current_index: usize,
    /// Where the run got stuck, once rejected
    pub stuck: Option<&'a StuckConfiguration>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn of(run: Option<&'a ActiveRun>) -> Self {
        let Some(run) = run else {
            return Self::unloaded();
        };

        let current = run.history.current();
        Self {
            run_id: Some(run.id),
            started_at: Some(run.started_at),
            status: run.status,
            params: Some(run.params),
            state: Some(current.state),
            remaining: &current.remaining,
            stack: &current.stack,
            last_action: Some(&current.last_action),
            history: run.history.entries(),
            current_index: run.history.current_index(),
            stuck: run.stuck.as_ref(),
        }
    }

    fn unloaded() -> Self {
        Self {
            run_id: None,
            started_at: None,
            status: RunStatus::Unloaded,
            params: None,
            state: None,
            remaining: &[],
            stack: &[],
            last_action: None,
            history: &[],
            current_index: 0,
            stuck: None,
        }
    }

    /// The configuration on display, if a run is loaded.
    pub fn current(&self) -> Option<&'a Configuration> {
        self.history.get(self.current_index)
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Trace rows, `step | state | remaining | stack | action`.
    pub fn trace_rows(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// Serialize for a renderer living outside the process.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Engine, RunStatus};

    #[test]
    fn unloaded_snapshot_is_empty() {
        let engine = Engine::standard();
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.status, RunStatus::Unloaded);
        assert!(snapshot.state.is_none());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.current().is_none());
        assert!(!snapshot.is_terminal());
    }

    #[test]
    fn snapshot_tracks_latest_configuration() {
        let mut engine = Engine::standard();
        engine.load("yyzzzzzzyyy").unwrap();
        engine.step();
        engine.step();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.current_index, 2);
        assert_eq!(snapshot.history.len(), 3);
        assert_eq!(snapshot.current().map(|c| c.step), Some(2));
        assert_eq!(snapshot.remaining.len(), 9);
        assert_eq!(snapshot.stack.len(), 2);
        assert_eq!(
            snapshot.last_action.map(ToString::to_string).as_deref(),
            Some("y,Z/YZ")
        );
    }

    #[test]
    fn trace_rows_render_each_configuration() {
        let mut engine = Engine::standard();
        engine.load("yyzzzzzzyyy").unwrap();
        engine.run();

        let rows = engine.snapshot().trace_rows();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0], "0 | q0 | yyzzzzzzyyy | Z | initial");
        assert_eq!(rows[1], "1 | q1 | yzzzzzzyyy | Z | y,Z/Z");
        assert_eq!(rows[12], "12 | q12 |  | ∅ | ε,Z/ε");
    }

    #[test]
    fn snapshot_serializes_for_renderers() {
        let mut engine = Engine::standard();
        engine.load("yyzzzzzzyyy").unwrap();
        engine.step();

        let json = engine.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "running");
        assert_eq!(value["state"], 1);
        assert_eq!(value["stack"], serde_json::json!(["Z"]));
        assert_eq!(value["history"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["params"]["m"], 2);
    }
}
