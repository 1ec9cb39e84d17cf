//! Standard Run
//!
//! This example loads an input into the shipped automaton, steps through it
//! one transition at a time, and prints the trace table a renderer would show.
//!
//! Key concepts:
//! - Validation gates `load`
//! - Each `step` appends one configuration to the history
//! - Observers read a snapshot after every mutation
//!
//! Run with: cargo run --example standard_run -- xxyyzzzzzzyyy
//! Set RUST_LOG=pdasim=debug to see every transition as it is applied.

use pdasim::engine::{Engine, StepOutcome};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "yyzzzzzzyyy".to_string());

    println!("=== Standard Run Example ===\n");

    let mut engine = Engine::standard();

    println!("Transition table:");
    for transition in engine.table().transitions() {
        println!("  {transition}");
    }
    println!();

    match engine.load(&input) {
        Ok(summary) => println!("Loaded '{input}': {}\n", summary.message),
        Err(error) => {
            println!("Cannot simulate '{input}': {error}");
            return;
        }
    }

    println!("step | state | remaining | stack | action");
    println!("{}", engine.snapshot().trace_rows()[0]);
    loop {
        match engine.step() {
            StepOutcome::Applied { .. } => {
                if let Some(current) = engine.snapshot().current() {
                    println!("{current}");
                }
            }
            StepOutcome::Stuck(stuck) => {
                println!("\nStuck: {stuck}");
                break;
            }
            StepOutcome::AlreadyFinished(_) | StepOutcome::NotLoaded => break,
        }
    }

    println!("\nVerdict: {}", engine.status());
    println!("\n=== Example Complete ===");
}
