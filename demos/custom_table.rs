//! Custom Table
//!
//! This example configures an engine from JSON with a table that loops on an
//! ε-transition, and shows how a run budget stops it.
//!
//! Key concepts:
//! - Tables are built once from a listing and validated as a whole
//! - Duplicate definitions are reported, never silently shadowed
//! - An exhausted budget is distinct from rejection and can be resumed
//!
//! Run with: cargo run --example custom_table

use pdasim::config::SimulatorConfig;
use pdasim::engine::{Engine, RunBudget, RunOutcome};
use pdasim::table::TransitionTableBuilder;

const CONFIG: &str = r#"{
    "max_steps": 50,
    "transitions": [
        { "from": 0, "read": "y", "pop": "Z", "to": 1, "push": "Z" },
        { "from": 1, "pop": "Z", "to": 1, "push": "Z" }
    ]
}"#;

fn main() {
    println!("=== Custom Table Example ===\n");

    let duplicate = TransitionTableBuilder::new()
        .define(0, "y", 'Z', 1, "Z")
        .define(0, "y", 'Z', 2, "YZ")
        .build();
    if let Err(error) = duplicate {
        println!("Rejected listing: {error}\n");
    }

    let config = match SimulatorConfig::from_json_str(CONFIG) {
        Ok(config) => config,
        Err(error) => {
            println!("Bad configuration: {error}");
            return;
        }
    };
    let mut engine = match Engine::from_config(config) {
        Ok(engine) => engine,
        Err(error) => {
            println!("Bad configuration: {error}");
            return;
        }
    };

    if let Err(error) = engine.load("yyzzzzzzyyy") {
        println!("Cannot simulate: {error}");
        return;
    }

    match engine.run() {
        RunOutcome::BudgetExceeded { steps, violation } => {
            println!("Stopped after {steps} steps: {violation}");
        }
        other => println!("Unexpected outcome: {other:?}"),
    }

    let outcome = engine.run_with(RunBudget::unlimited().max_steps(10));
    println!("Resumed for {} more steps, status: {}", outcome.steps(), engine.status());
    println!("History length: {}", engine.snapshot().history.len());

    println!("\n=== Example Complete ===");
}
