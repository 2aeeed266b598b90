//! # Source Tokens
//!
//! Token and position metadata attached to terminal CST nodes.
//! Positions are preserved end-to-end into every diagnostic the
//! normalization stage emits.
//!
//! ## Example
//!
//! ```rust
//! use rxs_cst::token::Position;
//!
//! let pos = Position::new(3, 14, "pipeline.rxs");
//! assert_eq!(pos.to_string(), "line 3 column 14 in pipeline.rxs");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A location in the original source text.
///
/// Line and column are one-based, matching what the platform's lexer emits.
/// `src` names the compile unit (file name or snippet id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// One-based line number.
    pub line: u32,
    /// One-based column number.
    pub column: u32,
    /// Name of the source the token came from.
    pub src: String,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32, src: impl Into<String>) -> Self {
        Self {
            line,
            column,
            src: src.into(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {} in {}", self.line, self.column, self.src)
    }
}

// =============================================================================
// TOKEN
// =============================================================================

/// The lexer token backing a terminal CST node.
///
/// ## Example
///
/// ```rust
/// use rxs_cst::token::{Position, Token};
///
/// let token = Token::new("number", "42", Position::new(1, 1, "main.rxs"));
/// assert_eq!(token.value, "42");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Lexer token class, as named by the external lexer.
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw token text.
    pub value: String,
    /// Where the token starts in the source.
    pub position: Position,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: impl Into<String>, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            position,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
