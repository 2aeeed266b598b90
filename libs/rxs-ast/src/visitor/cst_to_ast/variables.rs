//! # Variable Conversion
//!
//! Converts declaration, reference, and property-access CST nodes to AST
//! variable nodes, enforcing the identifier rules.
//!
//! A variable name starts with `$` and its second character is a letter or
//! underscore. The declaration converter locates its parts declaratively,
//! regardless of their relative order in the child list.

use super::{convert_node, Context};
use crate::ast::{Node, VariableNode, VariableOperation};
use crate::error::CompileError;
use rxs_cst::{CstNode, NodeKind, Position};

// =============================================================================
// IDENTIFIER RULES
// =============================================================================

/// Validate a `$`-prefixed variable name.
///
/// ## Example
///
/// ```text
/// $customer  -> ok
/// $_tmp      -> ok
/// x          -> CompileError (IdentifierSyntax)
/// $1abc      -> CompileError (IdentifierSyntax)
/// ```
fn validate_identifier(name: &str, position: Option<&Position>) -> Result<(), CompileError> {
    let mut chars = name.chars();
    let has_sigil = chars.next() == Some('$');
    let valid_second = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    if has_sigil && valid_second {
        Ok(())
    } else {
        Err(CompileError::identifier_syntax(name).at(position))
    }
}

// =============================================================================
// REFERENCE
// =============================================================================

/// Convert a bare variable identifier used as a value.
pub fn convert_reference(node: &CstNode) -> Result<Node, CompileError> {
    let name = node.value_or_empty();
    validate_identifier(name, node.position())?;
    Ok(Node::Variable(VariableNode {
        name: name.to_string(),
        operation: VariableOperation::Reference,
        right: None,
    }))
}

// =============================================================================
// DECLARATION
// =============================================================================

/// Convert a variable declaration.
///
/// The grammar emits the identifier, the operator, and the right-hand
/// expression in a grammar-specific order; the converter matches them
/// structurally instead of by index.
///
/// ## Example CST
///
/// ```text
/// VariableDeclaration
/// ├── VariableIdentifier "$customer"
/// ├── Operator "="
/// └── MacroInvocation (@db ...)
/// ```
pub fn convert_declaration(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    let significant: Vec<&CstNode> = node.significant_children().collect();

    let identifiers: Vec<&CstNode> = significant
        .iter()
        .copied()
        .filter(|c| c.kind == NodeKind::VariableIdentifier)
        .collect();
    if identifiers.len() != 1 {
        return Err(CompileError::syntax_shape(
            node.kind,
            "Exactly one variable identifier expected",
        )
        .at(node.position()));
    }
    let identifier = identifiers[0];

    let operators: Vec<&CstNode> = significant
        .iter()
        .copied()
        .filter(|c| c.kind == NodeKind::Operator)
        .collect();
    if operators.len() != 1 {
        return Err(CompileError::syntax_shape(
            node.kind,
            "Exactly one assignment operator expected",
        )
        .at(node.position()));
    }
    let operator = operators[0];
    if operator.value_or_empty() != "=" {
        return Err(CompileError::syntax_shape(
            node.kind,
            format!(
                "Assignment operator '=' expected, found '{}'",
                operator.value_or_empty()
            ),
        )
        .at(operator.position().or(node.position())));
    }

    let values: Vec<&CstNode> = significant
        .iter()
        .copied()
        .filter(|c| c.kind != NodeKind::VariableIdentifier && c.kind != NodeKind::Operator)
        .collect();
    if values.len() != 1 {
        return Err(CompileError::syntax_shape(
            node.kind,
            "Exactly one right-hand expression expected",
        )
        .at(node.position()));
    }
    let value = values[0];

    let name = identifier.value_or_empty();
    validate_identifier(name, identifier.position().or(node.position()))?;

    let right = convert_node(value, ctx)?.ok_or_else(|| {
        CompileError::syntax_shape(node.kind, "Right-hand expression expected")
            .at(value.position().or(node.position()))
    })?;

    Ok(Node::Variable(VariableNode {
        name: name.to_string(),
        operation: VariableOperation::Declare,
        right: Some(Box::new(right)),
    }))
}

// =============================================================================
// PROPERTY ACCESS
// =============================================================================

/// Convert a dotted access chain like `$context.state.input`.
///
/// The chain lowers to a single variable reference carrying the joined
/// dotted path; member resolution happens in the execution engine.
pub fn convert_property_access(node: &CstNode) -> Result<Node, CompileError> {
    let mut significant = node.significant_children();

    let base = significant
        .next()
        .filter(|c| c.kind == NodeKind::VariableIdentifier)
        .ok_or_else(|| {
            CompileError::syntax_shape(node.kind, "Variable base expected").at(node.position())
        })?;
    validate_identifier(base.value_or_empty(), base.position().or(node.position()))?;

    let mut name = base.value_or_empty().to_string();
    for segment in significant {
        if segment.kind != NodeKind::Identifier {
            return Err(CompileError::unexpected_node(segment.kind)
                .at(segment.position().or(node.position())));
        }
        name.push('.');
        name.push_str(segment.value_or_empty());
    }

    Ok(Node::Variable(VariableNode {
        name,
        operation: VariableOperation::Reference,
        right: None,
    }))
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

    fn var(name: &str) -> CstNode {
        CstNode::with_value(NodeKind::VariableIdentifier, name)
    }

    fn op(text: &str) -> CstNode {
        CstNode::with_value(NodeKind::Operator, text)
    }

    #[test]
    fn test_reference_valid_name() {
        match convert_reference(&var("$customer")).unwrap() {
            Node::Variable(v) => {
                assert_eq!(v.name, "$customer");
                assert_eq!(v.operation, VariableOperation::Reference);
                assert!(v.right.is_none());
            }
            _ => panic!("Expected Variable"),
        }
    }

    #[test]
    fn test_reference_missing_sigil() {
        let err = convert_reference(&var("x")).unwrap_err();
        assert!(err.to_string().contains("Invalid variable identifier 'x'"));
    }

    #[test]
    fn test_reference_digit_after_sigil() {
        assert!(convert_reference(&var("$1abc")).is_err());
    }

    #[test]
    fn test_reference_underscore_is_valid() {
        assert!(convert_reference(&var("$_tmp")).is_ok());
    }

    #[test]
    fn test_reference_bare_sigil_is_invalid() {
        assert!(convert_reference(&var("$")).is_err());
    }

    #[test]
    fn test_declaration_in_grammar_order() {
        let node = CstNode::with_children(
            NodeKind::VariableDeclaration,
            vec![
                var("$users"),
                op("="),
                CstNode::with_value(NodeKind::NumberLiteral, "5"),
            ],
        );
        match convert_declaration(&node, &mut ctx()).unwrap() {
            Node::Variable(v) => {
                assert_eq!(v.name, "$users");
                assert_eq!(v.operation, VariableOperation::Declare);
                match v.right.as_deref() {
                    Some(Node::NumberLiteral(n)) => assert_eq!(n.value, 5.0),
                    _ => panic!("Expected NumberLiteral right-hand side"),
                }
            }
            _ => panic!("Expected Variable"),
        }
    }

    #[test]
    fn test_declaration_child_order_is_irrelevant() {
        let node = CstNode::with_children(
            NodeKind::VariableDeclaration,
            vec![
                CstNode::with_value(NodeKind::StringLiteral, "hello"),
                op("="),
                var("$greeting"),
            ],
        );
        match convert_declaration(&node, &mut ctx()).unwrap() {
            Node::Variable(v) => {
                assert_eq!(v.name, "$greeting");
                assert!(matches!(v.right.as_deref(), Some(Node::StringLiteral(_))));
            }
            _ => panic!("Expected Variable"),
        }
    }

    #[test]
    fn test_declaration_skips_trivia() {
        let node = CstNode::with_children(
            NodeKind::VariableDeclaration,
            vec![
                var("$n"),
                CstNode::with_value(NodeKind::Whitespace, " "),
                op("="),
                CstNode::with_value(NodeKind::Whitespace, " "),
                CstNode::with_value(NodeKind::NumberLiteral, "1"),
            ],
        );
        assert!(convert_declaration(&node, &mut ctx()).is_ok());
    }

    #[test]
    fn test_declaration_rejects_non_assignment_operator() {
        let node = CstNode::with_children(
            NodeKind::VariableDeclaration,
            vec![
                var("$n"),
                op("+="),
                CstNode::with_value(NodeKind::NumberLiteral, "1"),
            ],
        );
        let err = convert_declaration(&node, &mut ctx()).unwrap_err();
        assert!(err.to_string().contains("Assignment operator '=' expected"));
    }

    #[test]
    fn test_declaration_rejects_missing_identifier() {
        let node = CstNode::with_children(
            NodeKind::VariableDeclaration,
            vec![op("="), CstNode::with_value(NodeKind::NumberLiteral, "1")],
        );
        let err = convert_declaration(&node, &mut ctx()).unwrap_err();
        assert!(err
            .to_string()
            .contains("Exactly one variable identifier expected"));
    }

    #[test]
    fn test_declaration_rejects_missing_right_hand_side() {
        let node =
            CstNode::with_children(NodeKind::VariableDeclaration, vec![var("$n"), op("=")]);
        assert!(convert_declaration(&node, &mut ctx()).is_err());
    }

    #[test]
    fn test_declaration_validates_identifier() {
        let node = CstNode::with_children(
            NodeKind::VariableDeclaration,
            vec![
                var("$9lives"),
                op("="),
                CstNode::with_value(NodeKind::NumberLiteral, "9"),
            ],
        );
        let err = convert_declaration(&node, &mut ctx()).unwrap_err();
        assert!(err.to_string().contains("Invalid variable identifier"));
    }

    #[test]
    fn test_property_access_joins_segments() {
        let node = CstNode::with_children(
            NodeKind::PropertyAccess,
            vec![
                var("$context"),
                CstNode::with_value(NodeKind::Identifier, "state"),
                CstNode::with_value(NodeKind::Identifier, "input"),
            ],
        );
        match convert_property_access(&node).unwrap() {
            Node::Variable(v) => {
                assert_eq!(v.name, "$context.state.input");
                assert_eq!(v.operation, VariableOperation::Reference);
            }
            _ => panic!("Expected Variable"),
        }
    }

    #[test]
    fn test_property_access_requires_variable_base() {
        let node = CstNode::with_children(
            NodeKind::PropertyAccess,
            vec![CstNode::with_value(NodeKind::Identifier, "state")],
        );
        let err = convert_property_access(&node).unwrap_err();
        assert!(err.to_string().contains("Variable base expected"));
    }
}
