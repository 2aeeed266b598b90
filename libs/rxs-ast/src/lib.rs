//! # RXS AST Crate
//!
//! Converts the RXS front end's CST (Concrete Syntax Tree) into a typed AST
//! (Abstract Syntax Tree) ready for the execution engine. Diagnostics carry
//! the source position metadata the CST's tokens provide.
//!
//! ## Architecture
//!
//! ```text
//! RXS Source → lexer/CST builder (external) → rxs-cst → rxs-ast (this crate)
//!                                                            ↓
//!                                                   execution engine
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rxs_ast::create_ast;
//! use rxs_cst::{CstNode, NodeKind};
//!
//! let root = CstNode::with_children(NodeKind::Program, vec![
//!     CstNode::with_value(NodeKind::BooleanLiteral, "true"),
//! ]);
//! let ast = create_ast(&root).unwrap();
//! assert_eq!(ast.program.body.len(), 1);
//! ```
//!
//! A serialized CST (the builder may run out of process) deserializes
//! through serde before conversion:
//!
//! ```rust,ignore
//! let root: rxs_cst::CstNode = serde_json::from_str(json)?;
//! let ast = rxs_ast::create_ast(&root)?;
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: a closed set of node variants, dispatched exhaustively
//! - **Fail-Fast**: the first structural violation aborts the compile unit;
//!   no partial AST is ever returned
//! - **Source Mapping**: errors and warnings carry `line/column/src` from
//!   the CST's tokens
//! - **No Evaluation**: pure syntax normalization, no semantic analysis

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod printer;
pub mod visitor;

// Re-exports for convenience
pub use ast::*;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{CompileError, CompileErrorKind};
pub use visitor::cst_to_ast::{create_ast, create_ast_with_config};
