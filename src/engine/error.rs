//! Engine error types.

use crate::validator::ValidationError;
use thiserror::Error;

/// Errors returned by `Engine::load`.
///
/// A failed load leaves the engine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// The validator's diagnostic, as shown to the user.
    pub fn validation(&self) -> &ValidationError {
        match self {
            Self::Validation(error) => error,
        }
    }
}
