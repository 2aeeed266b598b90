//! # String Interpolation Resolution
//!
//! Merges the literal and variable children of a `StringInterpolation` node
//! into a single templated string literal. Actual substitution is deferred
//! to execution time; each variable child contributes a `${...}` placeholder
//! carrying the variable's name.

use super::Context;
use crate::ast::{Node, StringLiteralNode};
use rxs_cst::{CstNode, NodeKind};

/// Resolve a string interpolation to one `StringLiteralNode`.
///
/// ## Example CST
///
/// ```text
/// StringInterpolation
/// ├── StringLiteral "Hello "
/// ├── VariableIdentifier "$name"
/// └── StringLiteral "!"
/// ```
///
/// produces `StringLiteralNode { value: "Hello ${$name}!" }`.
///
/// Children of any other kind are skipped; each skip is surfaced as a
/// warning diagnostic.
pub fn resolve_interpolation(node: &CstNode, ctx: &mut Context) -> Node {
    let mut value = String::new();

    for child in &node.children {
        match child.kind {
            NodeKind::StringLiteral => value.push_str(child.value_or_empty()),
            NodeKind::VariableIdentifier => {
                value.push_str("${");
                value.push_str(child.value_or_empty());
                value.push('}');
            }
            _ => ctx.warn(
                format!(
                    "Skipped {} child inside string interpolation",
                    child.kind.name()
                ),
                child.position().or(node.position()),
            ),
        }
    }

    Node::StringLiteral(StringLiteralNode { value })
}

// =============================================================================
// TESTS
// =============================================================================
