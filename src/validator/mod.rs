//! Static membership test for the target language.
//!
//! The validator checks, without running the automaton, whether an input
//! belongs to
//!
//! ```text
//! L = { xᵃ y²ⁿ z^{2m+2} y³ⁿ : a ≥ 0, n ≥ 1, m ≥ 2 }
//! ```
//!
//! It gates the start of a simulation. It is independent of any transition
//! table: a table may accept more or fewer strings than the validator does.
//!
//! The input is split into maximal runs of equal symbols, which must read
//! `x* y+ z+ y*`. Constraints are then checked in order and the first failure
//! is reported.

mod error;

pub use error::ValidationError;

use crate::core::InputSymbol;
use serde::{Deserialize, Serialize};

/// Parameters of a string accepted by [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageParams {
    /// Length of the optional leading x-block (`a`)
    pub leading_x: usize,
    /// Half the length of the first y-block, at least 1
    pub n: usize,
    /// Half the length of the z-block minus one, at least 2
    pub m: usize,
}

impl LanguageParams {
    pub fn message(&self) -> String {
        format!("valid string: n={}, m={}", self.n, self.m)
    }
}

/// Record form of a validation: `{ valid, message, n, m }`.
///
/// # Example
///
/// ```rust
/// use pdasim::validator::ValidationResult;
///
/// let ok = ValidationResult::check("yyzzzzzzyyy");
/// assert!(ok.valid);
/// assert_eq!((ok.n, ok.m), (Some(1), Some(2)));
/// assert_eq!(ok.message, "valid string: n=1, m=2");
///
/// let bad = ValidationResult::check("ab");
/// assert!(!bad.valid);
/// assert!(bad.n.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    pub n: Option<usize>,
    pub m: Option<usize>,
}

impl ValidationResult {
    pub fn check(input: &str) -> Self {
        validate(input).into()
    }
}

impl From<Result<LanguageParams, ValidationError>> for ValidationResult {
    fn from(result: Result<LanguageParams, ValidationError>) -> Self {
        match result {
            Ok(params) => Self {
                valid: true,
                message: params.message(),
                n: Some(params.n),
                m: Some(params.m),
            },
            Err(error) => Self {
                valid: false,
                message: error.to_string(),
                n: None,
                m: None,
            },
        }
    }
}

/// Check `input` against the target language.
///
/// # Example
///
/// ```rust
/// use pdasim::validator::{validate, ValidationError};
///
/// let params = validate("xxyyzzzzzzyyy").unwrap();
/// assert_eq!((params.leading_x, params.n, params.m), (2, 1, 2));
///
/// assert_eq!(validate("yyzzzzyyy"), Err(ValidationError::TooFewZ { m: 1 }));
/// ```
pub fn validate(input: &str) -> Result<LanguageParams, ValidationError> {
    let symbols = parse_symbols(input)?;
    let runs = runs(&symbols);

    let (leading_x, rest) = match runs.as_slice() {
        [(InputSymbol::X, len), rest @ ..] => (*len, rest),
        rest => (0, rest),
    };

    let (y1, z_total, y2) = match rest {
        [(InputSymbol::Y, y1), (InputSymbol::Z, z)] => (*y1, *z, 0),
        [(InputSymbol::Y, y1), (InputSymbol::Z, z), (InputSymbol::Y, y2)] => (*y1, *z, *y2),
        _ => return Err(ValidationError::MalformedShape),
    };

    if y1 < 2 || y1 % 2 != 0 {
        return Err(ValidationError::OddOrShortLeadingY { found: y1 });
    }
    let n = y1 / 2;

    if z_total < 4 || z_total % 2 != 0 {
        return Err(ValidationError::OddOrShortZRun { found: z_total });
    }
    let m = z_total / 2 - 1;
    if m < 2 {
        return Err(ValidationError::TooFewZ { m });
    }

    if y2 != 3 * n {
        return Err(ValidationError::TrailingYMismatch {
            expected: 3 * n,
            found: y2,
        });
    }

    Ok(LanguageParams { leading_x, n, m })
}

/// Convert input text into symbols, rejecting anything outside `{x, y, z}`.
pub fn parse_symbols(input: &str) -> Result<Vec<InputSymbol>, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }
    input
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            InputSymbol::from_char(symbol)
                .ok_or(ValidationError::InvalidSymbol { symbol, position })
        })
        .collect()
}

/// Maximal runs of equal symbols, in order.
fn runs(symbols: &[InputSymbol]) -> Vec<(InputSymbol, usize)> {
    let mut runs: Vec<(InputSymbol, usize)> = Vec::new();
    for &symbol in symbols {
        match runs.last_mut() {
            Some((last, len)) if *last == symbol => *len += 1,
            _ => runs.push((symbol, 1)),
        }
    }
    runs
}
