//! # Macro Conversion
//!
//! Converts the macro constructs: invocation, chain, branch, and group.
//!
//! An invocation is the leaf of the family; chains, branches, and groups
//! compose invocations and other statements. Invocation arguments are
//! restricted to an allow-list of value-shaped AST types so that the
//! execution engine never receives a statement where it expects a value.
//!
//! ## Example CST
//!
//! ```text
//! MacroInvocation
//! ├── MacroName "db"
//! └── MacroArguments
//!     ├── MacroArgument
//!     │   └── StringLiteral "main_mysql"
//!     └── MacroArgument
//!         └── StringLiteral "dbo.Customer"
//! ```

use super::{convert_node, Context};
use crate::ast::{MacroBranchNode, MacroChainNode, MacroGroupNode, MacroInvocationNode, Node};
use crate::error::CompileError;
use rxs_cst::{CstNode, NodeKind};

// =============================================================================
// INVOCATION
// =============================================================================

/// Convert a macro invocation.
///
/// The first significant child must be the `MacroName`; every further
/// significant child must be a `MacroArguments` list whose entries convert
/// to allow-listed types.
pub fn convert_invocation(
    node: &CstNode,
    ctx: &mut Context,
) -> Result<MacroInvocationNode, CompileError> {
    let mut significant = node.significant_children();

    let name_node = significant
        .next()
        .filter(|c| c.kind == NodeKind::MacroName)
        .ok_or_else(|| {
            CompileError::syntax_shape(node.kind, "Macro name expected").at(node.position())
        })?;
    let name = name_node.value_or_empty().to_string();

    let mut arguments = Vec::new();
    for child in significant {
        if child.kind != NodeKind::MacroArguments {
            return Err(CompileError::syntax_shape(node.kind, "Argument list expected")
                .at(child.position().or(node.position())));
        }
        collect_arguments(child, ctx, &mut arguments)?;
    }

    Ok(MacroInvocationNode { name, arguments })
}

/// Convert every entry of a `MacroArguments` list, enforcing the
/// allow-list.
fn collect_arguments(
    list: &CstNode,
    ctx: &mut Context,
    arguments: &mut Vec<Node>,
) -> Result<(), CompileError> {
    for entry in list.significant_children() {
        // The grammar wraps each argument in a MacroArgument node; accept
        // bare expressions as well for builders that elide the wrapper.
        let argument = if entry.kind == NodeKind::MacroArgument {
            entry.significant_children().next().ok_or_else(|| {
                CompileError::syntax_shape(entry.kind, "Argument expression expected")
                    .at(entry.position().or(list.position()))
            })?
        } else {
            entry
        };

        match convert_node(argument, ctx)? {
            Some(converted) if is_allowed_argument(&converted) => arguments.push(converted),
            _ => {
                return Err(CompileError::unexpected_argument(argument.kind)
                    .at(argument.position().or(list.position())))
            }
        }
    }
    Ok(())
}

/// Check a converted argument against the allow-list.
///
/// Hexadecimal literals and the statement-shaped nodes (groups, switches,
/// try/catch, loops) are deliberately absent.
fn is_allowed_argument(node: &Node) -> bool {
    matches!(
        node,
        Node::StringLiteral(_)
            | Node::NumberLiteral(_)
            | Node::BooleanLiteral(_)
            | Node::Variable(_)
            | Node::Binary(_)
            | Node::Unary(_)
            | Node::Conditional(_)
            | Node::MacroInvocation(_)
            | Node::MacroChain(_)
            | Node::MacroBranch(_)
    )
}

// =============================================================================
// CHAIN
// =============================================================================

/// Convert a chaining construct, `source -> destination`.
///
/// Each slot is populated only when the corresponding child lowers to an
/// invocation; other results leave the slot empty. More than two
/// significant children is a shape violation.
pub fn convert_chain(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();
    if significant.len() > 2 {
        return Err(
            CompileError::syntax_shape(node.kind, "Exactly two chain operands expected")
                .at(node.position()),
        );
    }

    let source = match significant.first() {
        Some(child) => as_invocation(convert_node(child, ctx)?),
        None => None,
    };
    let destination = match significant.get(1) {
        Some(child) => as_invocation(convert_node(child, ctx)?),
        None => None,
    };

    Ok(Node::MacroChain(MacroChainNode {
        source,
        destination,
    }))
}

fn as_invocation(converted: Option<Node>) -> Option<MacroInvocationNode> {
    match converted {
        Some(Node::MacroInvocation(invocation)) => Some(invocation),
        _ => None,
    }
}

// =============================================================================
// BRANCH
// =============================================================================

/// Convert a branching construct.
///
/// The first child is the guard invocation; the second is a group whose
/// first and second body elements become the success and failure branches.
/// Missing or non-conforming children leave the slots empty.
pub fn convert_branch(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();

    let condition = match significant.first() {
        Some(child) => as_invocation(convert_node(child, ctx)?),
        None => None,
    };

    let (success_branch, failure_branch) = match significant.get(1) {
        Some(child) => match convert_node(child, ctx)? {
            Some(Node::MacroGroup(group)) => {
                let mut body = group.body.into_iter();
                (body.next().map(Box::new), body.next().map(Box::new))
            }
            _ => (None, None),
        },
        None => (None, None),
    };

    Ok(Node::MacroBranch(MacroBranchNode {
        condition,
        success_branch,
        failure_branch,
    }))
}

// =============================================================================
// GROUP
// =============================================================================

/// Convert a grouping construct.
///
/// Purely structural: every child is converted independently and all
/// non-null results are appended to the body in order.
pub fn convert_group(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    Ok(Node::MacroGroup(MacroGroupNode {
        body: convert_group_body(node, ctx)?,
    }))
}

/// Convert a node's children into an ordered statement list.
pub(super) fn convert_group_body(
    node: &CstNode,
    ctx: &mut Context,
) -> Result<Vec<Node>, CompileError> {
    let mut body = Vec::new();
    for child in &node.children {
        if let Some(converted) = convert_node(child, ctx)? {
            body.push(converted);
        }
    }
    Ok(body)
}

// =============================================================================
// TESTS
// =============================================================================
