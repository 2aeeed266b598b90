//! # RXS CST (Concrete Syntax Tree)
//!
//! Data model for the concrete syntax tree produced by the RXS front end.
//! The CST retains every source token, including whitespace and comments.
//!
//! This crate does not parse source text. The platform's lexer/CST builder
//! runs upstream (possibly in another process) and hands the tree over
//! either in memory or serialized as JSON.
//!
//! ## Architecture
//!
//! ```text
//! RXS Source → lexer/CST builder (external) → CST → rxs-ast (AST)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rxs_cst::{CstNode, NodeKind};
//!
//! let node = CstNode::with_value(NodeKind::NumberLiteral, "42");
//! assert_eq!(node.kind, NodeKind::NumberLiteral);
//! assert_eq!(node.value_or_empty(), "42");
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the input contract of the normalization stage:
//!
//! ```text
//! rxs-cst → rxs-ast → execution engine
//! ```

pub mod cst;
pub mod token;

// Re-export public API
pub use cst::{CstNode, NodeKind};
pub use token::{Position, Token};
