//! # Compile Errors
//!
//! Error types for the CST→AST normalization stage.
//!
//! Every structural violation is raised at the point of detection and aborts
//! the compile unit; nothing is caught internally and no partial AST is ever
//! returned. Errors carry the offending node's tag and, when the CST has
//! token metadata for the region, its source position.
//!
//! ## Example
//!
//! ```rust
//! use rxs_ast::error::CompileError;
//! use rxs_cst::NodeKind;
//!
//! let error = CompileError::unexpected_argument(NodeKind::Directive);
//! assert_eq!(error.to_string(), "Unexpected argument type: Directive");
//! ```

use rxs_cst::{NodeKind, Position};
use std::fmt;
use thiserror::Error;

// =============================================================================
// COMPILE ERROR
// =============================================================================

/// A conversion error with optional source location.
///
/// ## Example
///
/// ```rust
/// use rxs_ast::error::CompileError;
/// use rxs_cst::{NodeKind, Position};
///
/// let error = CompileError::syntax_shape(NodeKind::MacroInvocation, "Macro name expected")
///     .with_position(Position::new(2, 1, "main.rxs"));
/// assert!(error.to_string().ends_with("at line 2 column 1 in main.rxs"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    /// Error kind with details.
    pub kind: CompileErrorKind,
    /// Source location, when the offending node has token metadata.
    pub position: Option<Position>,
}

impl CompileError {
    /// Create a new compile error without location.
    pub const fn new(kind: CompileErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Create a required-child or child-ordering violation.
    pub fn syntax_shape(node: NodeKind, message: impl Into<String>) -> Self {
        Self::new(CompileErrorKind::SyntaxShape {
            node: node.name(),
            message: message.into(),
        })
    }

    /// Create an error for a tag that is invalid where it appeared.
    pub fn unexpected_node(node: NodeKind) -> Self {
        Self::new(CompileErrorKind::UnexpectedNode { node: node.name() })
    }

    /// Create an error for a macro argument outside the allow-list.
    pub fn unexpected_argument(node: NodeKind) -> Self {
        Self::new(CompileErrorKind::UnexpectedArgument { node: node.name() })
    }

    /// Create an error for a malformed `$`-prefixed name.
    pub fn identifier_syntax(name: impl Into<String>) -> Self {
        Self::new(CompileErrorKind::IdentifierSyntax { name: name.into() })
    }

    /// Create an error for unparseable numeric text.
    pub fn number_syntax(text: impl Into<String>) -> Self {
        Self::new(CompileErrorKind::NumberSyntax { text: text.into() })
    }

    /// Create an error for input nested past the configured limit.
    pub const fn nesting_depth(max: usize) -> Self {
        Self::new(CompileErrorKind::NestingDepth { max })
    }

    /// Attach a source position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a source position when one is available.
    pub fn at(mut self, position: Option<&Position>) -> Self {
        self.position = position.cloned();
        self
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at {}", self.kind, position),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for CompileError {}

// =============================================================================
// COMPILE ERROR KIND
// =============================================================================

/// Kinds of conversion errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileErrorKind {
    /// A required child is missing, extra, or out of shape.
    #[error("{message} in {node}")]
    SyntaxShape {
        /// Tag of the malformed node.
        node: &'static str,
        /// What the converter expected.
        message: String,
    },

    /// A tag that cannot appear where it was found.
    #[error("Unexpected node type: {node}")]
    UnexpectedNode {
        /// The offending tag.
        node: &'static str,
    },

    /// A macro argument resolved to a disallowed type.
    #[error("Unexpected argument type: {node}")]
    UnexpectedArgument {
        /// Tag of the offending argument.
        node: &'static str,
    },

    /// A variable name violating the `$` + `[A-Za-z_]` rule.
    #[error("Invalid variable identifier '{name}': expected '$' followed by a letter or underscore")]
    IdentifierSyntax {
        /// The malformed name.
        name: String,
    },

    /// Numeric text that does not parse.
    #[error("Invalid number literal '{text}'")]
    NumberSyntax {
        /// The unparseable text.
        text: String,
    },

    /// Input nested deeper than the configured maximum.
    #[error("Maximum nesting depth of {max} exceeded")]
    NestingDepth {
        /// The configured limit.
        max: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
