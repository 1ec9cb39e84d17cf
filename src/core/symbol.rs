//! Alphabet types for the pushdown automaton.
//!
//! The input alphabet is fixed to `{x, y, z}` and the stack alphabet to
//! `{Y, Z}`, with `Z` doubling as the bottom-of-stack marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display form of the empty read and the empty push string.
pub const EPSILON: char = 'ε';

/// A symbol of the input alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSymbol {
    X,
    Y,
    Z,
}

impl InputSymbol {
    /// Parse a single input character. Returns `None` outside `{x, y, z}`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A symbol of the stack alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackSymbol {
    Y,
    Z,
}

impl StackSymbol {
    /// The symbol placed on the stack when a run is loaded.
    pub const BOTTOM: StackSymbol = StackSymbol::Z;

    /// Parse a single stack character. Returns `None` outside `{Y, Z}`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Self::Y),
            'Z' => Some(Self::Z),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The read component of a transition: a concrete input symbol or ε.
///
/// ε-transitions never advance the input cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Read {
    Symbol(InputSymbol),
    Epsilon,
}

impl Read {
    /// Parse the textual read component used in transition definitions.
    ///
    /// Both `""` and `"ε"` denote the empty read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdasim::core::{InputSymbol, Read};
    ///
    /// assert_eq!(Read::parse("y"), Some(Read::Symbol(InputSymbol::Y)));
    /// assert_eq!(Read::parse(""), Some(Read::Epsilon));
    /// assert_eq!(Read::parse("ε"), Some(Read::Epsilon));
    /// assert_eq!(Read::parse("yy"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Some(Self::Epsilon),
            (Some(EPSILON), None) => Some(Self::Epsilon),
            (Some(c), None) => InputSymbol::from_char(c).map(Self::Symbol),
            _ => None,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    pub fn symbol(&self) -> Option<InputSymbol> {
        match self {
            Self::Symbol(symbol) => Some(*symbol),
            Self::Epsilon => None,
        }
    }
}

impl fmt::Display for Read {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Epsilon => write!(f, "{EPSILON}"),
        }
    }
}

/// Parse a push string such as `"YZ"`. Both `""` and `"ε"` denote an empty push.
///
/// Returns the first offending character on failure.
pub fn parse_push(text: &str) -> Result<Vec<StackSymbol>, char> {
    if text == EPSILON.to_string() {
        return Ok(Vec::new());
    }
    text.chars()
        .map(|c| StackSymbol::from_char(c).ok_or(c))
        .collect()
}

/// Render a push string, using ε for the empty one.
pub fn format_push(push: &[StackSymbol]) -> String {
    if push.is_empty() {
        EPSILON.to_string()
    } else {
        push.iter().map(|s| s.as_char()).collect()
    }
}
