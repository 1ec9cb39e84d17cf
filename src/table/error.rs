//! Errors raised while building a transition table.

use thiserror::Error;

/// A single problem found in a transition definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error(
        "Duplicate transition for (q{from}, {read}, {pop}): definition #{duplicate} repeats definition #{first}"
    )]
    DuplicateTransition {
        from: u16,
        read: String,
        pop: char,
        first: usize,
        duplicate: usize,
    },

    #[error("Definition #{position}: '{text}' is not a valid {field}")]
    InvalidSymbol {
        position: usize,
        field: &'static str,
        text: String,
    },
}

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition table has {} invalid definition(s): {}", .0.len(), join(.0))]
    Invalid(Vec<TableViolation>),
}

fn join(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
