//! # Concrete Syntax Tree (CST)
//!
//! CST types representing parsed RXS source code.
//! Preserves all syntactic details including whitespace and comments.
//!
//! The tree is produced by the platform's lexer/CST builder and may arrive
//! serialized (the builder runs in a separate process) or constructed
//! directly through the builder helpers on [`CstNode`].
//!
//! ## Example
//!
//! ```rust
//! use rxs_cst::{CstNode, NodeKind};
//!
//! let root = CstNode::with_children(NodeKind::Program, vec![
//!     CstNode::with_value(NodeKind::BooleanLiteral, "true"),
//! ]);
//! assert_eq!(root.kind, NodeKind::Program);
//! assert_eq!(root.children.len(), 1);
//! ```

use crate::token::{Position, Token};
use serde::{Deserialize, Serialize};

// =============================================================================
// CST NODE
// =============================================================================

/// A node in the Concrete Syntax Tree.
///
/// ## Example
///
/// ```rust
/// use rxs_cst::{CstNode, NodeKind};
///
/// let node = CstNode::with_value(NodeKind::StringLiteral, "main_mysql");
/// assert_eq!(node.kind, NodeKind::StringLiteral);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstNode {
    /// Node tag.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Raw source text (for terminals like identifiers and literals).
    #[serde(default)]
    pub value: Option<String>,
    /// Child nodes, in source order.
    #[serde(default)]
    pub children: Vec<CstNode>,
    /// Lexer token backing this node, when it is a terminal.
    #[serde(default)]
    pub token: Option<Token>,
}

impl CstNode {
    /// Create a new CST node with no value, children, or token.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
            token: None,
        }
    }

    /// Create node with raw text content.
    pub fn with_value(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
            token: None,
        }
    }

    /// Create node with children.
    pub fn with_children(kind: NodeKind, children: Vec<CstNode>) -> Self {
        Self {
            kind,
            value: None,
            children,
            token: None,
        }
    }

    /// Create a terminal node carrying both its raw text and lexer token.
    pub fn with_token(kind: NodeKind, value: impl Into<String>, token: Token) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
            token: Some(token),
        }
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: CstNode) {
        self.children.push(child);
    }

    /// Get raw text content, or empty string if none.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Find first child with given kind.
    pub fn find_child(&self, kind: NodeKind) -> Option<&CstNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Find all children with given kind.
    pub fn find_children(&self, kind: NodeKind) -> Vec<&CstNode> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Children that carry meaning, skipping whitespace, newlines,
    /// punctuation, and comments.
    pub fn significant_children(&self) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(|c| !c.kind.is_trivia())
    }

    /// Source position of this node: its own token's position, or the
    /// position of the first descendant that has one.
    pub fn position(&self) -> Option<&Position> {
        if let Some(token) = &self.token {
            return Some(&token.position);
        }
        self.children.iter().find_map(|c| c.position())
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

/// Tags of CST nodes, as emitted by the platform's CST builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // Top-level
    /// Root node containing all statements and directives.
    Program,

    // Trivia
    /// Run of spaces and tabs.
    Whitespace,
    /// Single line break.
    Newline,
    /// Structural punctuation such as `(`, `)`, `{`, `}`, `,`.
    Punctuation,
    /// Line or block comment.
    Comment,

    // Pragmas
    /// `#`-prefixed compiler pragma line.
    Directive,

    // Macros
    /// Macro call like `@db("main_mysql", "dbo.Customer")`.
    MacroInvocation,
    /// Name of the macro being invoked.
    MacroName,
    /// Argument list of a macro invocation.
    MacroArguments,
    /// Single argument wrapper inside an argument list.
    MacroArgument,
    /// Pipe of one invocation's result into another, `a -> b`.
    Chaining,
    /// Guarded two-way selection over macro outcomes.
    Branching,
    /// Ordered block of statements `{ ... }`.
    Grouping,

    // Literals
    /// String literal like `"Users"`.
    StringLiteral,
    /// Number literal like `10` or `3.14`.
    NumberLiteral,
    /// Boolean literal `true` or `false`.
    BooleanLiteral,
    /// Hexadecimal literal like `0x2A`.
    HexadecimalLiteral,
    /// String with embedded variable references.
    StringInterpolation,

    // Variables
    /// `$`-prefixed variable name.
    VariableIdentifier,
    /// Assignment form introducing a variable.
    VariableDeclaration,
    /// Assignment or comparison operator token.
    Operator,

    // Control flow
    /// If/else conditional.
    IfControl,
    /// Switch over a discriminant with case arms.
    SwitchControl,
    /// Try/catch statement.
    TryCatch,
    /// While loop.
    WhileLoop,

    // Member access
    /// Bare identifier segment, e.g. a property name.
    Identifier,
    /// Dotted access chain like `$context.state.input`.
    PropertyAccess,
}

impl NodeKind {
    /// Stable tag name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Whitespace => "Whitespace",
            Self::Newline => "Newline",
            Self::Punctuation => "Punctuation",
            Self::Comment => "Comment",
            Self::Directive => "Directive",
            Self::MacroInvocation => "MacroInvocation",
            Self::MacroName => "MacroName",
            Self::MacroArguments => "MacroArguments",
            Self::MacroArgument => "MacroArgument",
            Self::Chaining => "Chaining",
            Self::Branching => "Branching",
            Self::Grouping => "Grouping",
            Self::StringLiteral => "StringLiteral",
            Self::NumberLiteral => "NumberLiteral",
            Self::BooleanLiteral => "BooleanLiteral",
            Self::HexadecimalLiteral => "HexadecimalLiteral",
            Self::StringInterpolation => "StringInterpolation",
            Self::VariableIdentifier => "VariableIdentifier",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::Operator => "Operator",
            Self::IfControl => "IfControl",
            Self::SwitchControl => "SwitchControl",
            Self::TryCatch => "TryCatch",
            Self::WhileLoop => "WhileLoop",
            Self::Identifier => "Identifier",
            Self::PropertyAccess => "PropertyAccess",
        }
    }

    /// Check if this node carries no meaning for the AST.
    pub const fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::Punctuation | Self::Comment
        )
    }

    /// Check if this is a literal node.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral
                | Self::NumberLiteral
                | Self::BooleanLiteral
                | Self::HexadecimalLiteral
        )
    }

    /// Check if this is a macro construct.
    pub const fn is_macro_construct(&self) -> bool {
        matches!(
            self,
            Self::MacroInvocation | Self::Chaining | Self::Branching | Self::Grouping
        )
    }

    /// Check if this is a control-flow construct.
    pub const fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Self::IfControl | Self::SwitchControl | Self::TryCatch | Self::WhileLoop
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
