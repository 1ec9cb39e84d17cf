//! Validation error types.

use thiserror::Error;

/// Reasons an input is outside `xᵃ y²ⁿ z^{2m+2} y³ⁿ` (a ≥ 0, n ≥ 1, m ≥ 2).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a string to simulate")]
    Empty,

    #[error("Only x, y and z are allowed: found '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Malformed input: expected the shape x* y+ z+ y* with each block contiguous")]
    MalformedShape,

    #[error("y^{{2n}}: the first y-block must hold an even number of y's (at least 2), found {found}")]
    OddOrShortLeadingY { found: usize },

    #[error("z^{{2m+2}}: the z-block must hold an even number of z's (at least 4), found {found}")]
    OddOrShortZRun { found: usize },

    #[error("m must be at least 2 (at least 6 z's), found m={m}")]
    TooFewZ { m: usize },

    #[error("y^{{3n}}: expected {expected} y's at the end, found {found}")]
    TrailingYMismatch { expected: usize, found: usize },
}
