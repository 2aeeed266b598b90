//! # Control Flow Conversion
//!
//! Converts the ordinary control-flow constructs: if, switch, try/catch,
//! and while. Sub-expressions and nested statements are composed through
//! the recursive dispatcher.

use super::macros::convert_group_body;
use super::{convert_child, convert_node, Context};
use crate::ast::{
    CaseClauseNode, ConditionalExpressionNode, LoopNode, Node, SwitchStatementNode,
    TryCatchStatementNode,
};
use crate::error::CompileError;
use rxs_cst::{CstNode, NodeKind};

// =============================================================================
// IF
// =============================================================================

/// Convert an if/else conditional.
///
/// ## CST Structure
///
/// ```text
/// IfControl
/// ├── child 0: test expression (required)
/// ├── child 1: consequent (optional)
/// └── child 2: alternate (optional)
/// ```
pub fn convert_if(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();
    let mut children = significant.iter();

    let test_node = children.next().ok_or_else(|| {
        CompileError::syntax_shape(node.kind, "Condition expression expected").at(node.position())
    })?;
    let test = Box::new(convert_child(test_node, ctx)?);

    let consequent = match children.next() {
        Some(child) => Some(Box::new(convert_child(child, ctx)?)),
        None => None,
    };
    let alternate = match children.next() {
        Some(child) => Some(Box::new(convert_child(child, ctx)?)),
        None => None,
    };

    Ok(Node::Conditional(ConditionalExpressionNode {
        test,
        consequent,
        alternate,
    }))
}

// =============================================================================
// SWITCH
// =============================================================================

/// Convert a switch statement.
///
/// The first significant child is the discriminant; every remaining child
/// must be a `Grouping` arm whose first body element is the clause test and
/// whose remaining elements form the consequent. An arm without elements is
/// a default clause.
pub fn convert_switch(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();
    let mut children = significant.iter();

    let discriminant_node = children.next().ok_or_else(|| {
        CompileError::syntax_shape(node.kind, "Discriminant expression expected")
            .at(node.position())
    })?;
    let discriminant = Box::new(convert_child(discriminant_node, ctx)?);

    let mut cases = Vec::new();
    for arm in children {
        if arm.kind != NodeKind::Grouping {
            return Err(CompileError::syntax_shape(node.kind, "Case clause group expected")
                .at(arm.position().or(node.position())));
        }
        let mut body = convert_group_body(arm, ctx)?.into_iter();
        let test = body.next().map(Box::new);
        let consequent = body.collect();
        cases.push(CaseClauseNode { test, consequent });
    }

    Ok(Node::Switch(SwitchStatementNode {
        discriminant,
        cases,
    }))
}

// =============================================================================
// TRY/CATCH
// =============================================================================

/// Convert a try/catch statement.
///
/// Child 0 is the try block, child 1 the optional catch block.
pub fn convert_try_catch(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();
    let mut children = significant.iter();

    let try_block = match children.next() {
        Some(child) => Some(Box::new(convert_child(child, ctx)?)),
        None => None,
    };
    let catch_block = match children.next() {
        Some(child) => Some(Box::new(convert_child(child, ctx)?)),
        None => None,
    };

    Ok(Node::TryCatch(TryCatchStatementNode {
        try_block,
        catch_block,
    }))
}

// =============================================================================
// WHILE
// =============================================================================

/// Convert a while loop.
///
/// Child 0 is the test; every remaining child joins the body in order.
pub fn convert_while(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();
    let mut children = significant.iter();

    let test = match children.next() {
        Some(child) => Some(Box::new(convert_child(child, ctx)?)),
        None => None,
    };

    let mut body = Vec::new();
    for child in children {
        if let Some(converted) = convert_node(child, ctx)? {
            body.push(converted);
        }
    }

    Ok(Node::Loop(LoopNode { test, body }))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::TransformConfig;

    fn ctx() -> Context {
        Context::new(&TransformConfig::default())
    }

    fn boolean(text: &str) -> CstNode {
        CstNode::with_value(NodeKind::BooleanLiteral, text)
    }

    fn number(text: &str) -> CstNode {
        CstNode::with_value(NodeKind::NumberLiteral, text)
    }

    fn invocation(name: &str) -> CstNode {
        CstNode::with_children(
            NodeKind::MacroInvocation,
            vec![CstNode::with_value(NodeKind::MacroName, name)],
        )
    }

    #[test]
    fn test_if_with_both_branches() {
        let node = CstNode::with_children(
            NodeKind::IfControl,
            vec![boolean("true"), invocation("ok"), invocation("fallback")],
        );
        match convert_if(&node, &mut ctx()).unwrap() {
            Node::Conditional(cond) => {
                assert!(matches!(*cond.test, Node::BooleanLiteral(_)));
                assert!(cond.consequent.is_some());
                assert!(cond.alternate.is_some());
            }
            _ => panic!("Expected Conditional"),
        }
    }

    #[test]
    fn test_if_without_alternate() {
        let node =
            CstNode::with_children(NodeKind::IfControl, vec![boolean("true"), invocation("ok")]);
        match convert_if(&node, &mut ctx()).unwrap() {
            Node::Conditional(cond) => {
                assert!(cond.consequent.is_some());
                assert!(cond.alternate.is_none());
            }
            _ => panic!("Expected Conditional"),
        }
    }

    #[test]
    fn test_if_requires_test() {
        let node = CstNode::with_children(NodeKind::IfControl, vec![]);
        let err = convert_if(&node, &mut ctx()).unwrap_err();
        assert!(err.to_string().contains("Condition expression expected"));
    }

    #[test]
    fn test_switch_builds_case_clauses() {
        let node = CstNode::with_children(
            NodeKind::SwitchControl,
            vec![
                CstNode::with_value(NodeKind::VariableIdentifier, "$status"),
                CstNode::with_children(
                    NodeKind::Grouping,
                    vec![number("1"), invocation("activate")],
                ),
                CstNode::with_children(
                    NodeKind::Grouping,
                    vec![number("2"), invocation("suspend"), invocation("notify")],
                ),
            ],
        );
        match convert_switch(&node, &mut ctx()).unwrap() {
            Node::Switch(switch) => {
                assert!(matches!(*switch.discriminant, Node::Variable(_)));
                assert_eq!(switch.cases.len(), 2);
                assert!(switch.cases[0].test.is_some());
                assert_eq!(switch.cases[0].consequent.len(), 1);
                assert_eq!(switch.cases[1].consequent.len(), 2);
            }
            _ => panic!("Expected Switch"),
        }
    }

    #[test]
    fn test_switch_empty_arm_is_default_clause() {
        let node = CstNode::with_children(
            NodeKind::SwitchControl,
            vec![
                CstNode::with_value(NodeKind::VariableIdentifier, "$status"),
                CstNode::with_children(NodeKind::Grouping, vec![]),
            ],
        );
        match convert_switch(&node, &mut ctx()).unwrap() {
            Node::Switch(switch) => {
                assert!(switch.cases[0].test.is_none());
                assert!(switch.cases[0].consequent.is_empty());
            }
            _ => panic!("Expected Switch"),
        }
    }

    #[test]
    fn test_switch_rejects_non_group_arm() {
        let node = CstNode::with_children(
            NodeKind::SwitchControl,
            vec![
                CstNode::with_value(NodeKind::VariableIdentifier, "$status"),
                number("1"),
            ],
        );
        let err = convert_switch(&node, &mut ctx()).unwrap_err();
        assert!(err.to_string().contains("Case clause group expected"));
    }

    #[test]
    fn test_try_catch_with_both_blocks() {
        let node = CstNode::with_children(
            NodeKind::TryCatch,
            vec![
                CstNode::with_children(NodeKind::Grouping, vec![invocation("risky")]),
                CstNode::with_children(NodeKind::Grouping, vec![invocation("recover")]),
            ],
        );
        match convert_try_catch(&node, &mut ctx()).unwrap() {
            Node::TryCatch(tc) => {
                assert!(tc.try_block.is_some());
                assert!(tc.catch_block.is_some());
            }
            _ => panic!("Expected TryCatch"),
        }
    }

    #[test]
    fn test_try_catch_without_catch() {
        let node = CstNode::with_children(
            NodeKind::TryCatch,
            vec![CstNode::with_children(
                NodeKind::Grouping,
                vec![invocation("risky")],
            )],
        );
        match convert_try_catch(&node, &mut ctx()).unwrap() {
            Node::TryCatch(tc) => {
                assert!(tc.try_block.is_some());
                assert!(tc.catch_block.is_none());
            }
            _ => panic!("Expected TryCatch"),
        }
    }

    #[test]
    fn test_while_collects_body_in_order() {
        let node = CstNode::with_children(
            NodeKind::WhileLoop,
            vec![boolean("true"), invocation("poll"), invocation("store")],
        );
        match convert_while(&node, &mut ctx()).unwrap() {
            Node::Loop(lp) => {
                assert!(lp.test.is_some());
                assert_eq!(lp.body.len(), 2);
            }
            _ => panic!("Expected Loop"),
        }
    }

    #[test]
    fn test_while_without_children() {
        let node = CstNode::with_children(NodeKind::WhileLoop, vec![]);
        match convert_while(&node, &mut ctx()).unwrap() {
            Node::Loop(lp) => {
                assert!(lp.test.is_none());
                assert!(lp.body.is_empty());
            }
            _ => panic!("Expected Loop"),
        }
    }
}
