//! # Literal Conversion
//!
//! Converts CST literal nodes to AST literal nodes.
//!
//! ## Supported Literals
//!
//! - Strings: `"dbo.Customer"` (raw text, escape processing deferred)
//! - Numbers: `42`, `3.14`
//! - Booleans: `true`, `false`
//! - Hexadecimals: `0x2A` (verbatim, no numeric conversion at this stage)

use crate::ast::{
    BooleanLiteralNode, HexLiteralNode, Node, NumberLiteralNode, StringLiteralNode,
};
use crate::error::CompileError;
use rxs_cst::CstNode;

// =============================================================================
// STRING
// =============================================================================

/// Convert a string literal.
///
/// The raw text is carried verbatim; quote stripping and escape handling
/// happen upstream in the CST builder.
pub fn convert_string(node: &CstNode) -> Node {
    Node::StringLiteral(StringLiteralNode {
        value: node.value_or_empty().to_string(),
    })
}

// =============================================================================
// NUMBER
// =============================================================================

/// Convert a number literal.
///
/// Malformed numeric text is a validation error rather than a silent
/// not-a-number value.
///
/// ## Example
///
/// ```text
/// 42    -> NumberLiteralNode { value: 42.0 }
/// 3.14  -> NumberLiteralNode { value: 3.14 }
/// 1x2   -> CompileError (NumberSyntax)
/// ```
pub fn convert_number(node: &CstNode) -> Result<Node, CompileError> {
    let text = node.value_or_empty();
    let value: f64 = text
        .parse()
        .map_err(|_| CompileError::number_syntax(text).at(node.position()))?;
    Ok(Node::NumberLiteral(NumberLiteralNode { value }))
}

// =============================================================================
// BOOLEAN
// =============================================================================

/// Convert a boolean literal.
///
/// The value is `true` iff the raw text is exactly `"true"`, case-sensitive.
pub fn convert_boolean(node: &CstNode) -> Node {
    Node::BooleanLiteral(BooleanLiteralNode {
        value: node.value_or_empty() == "true",
    })
}

// =============================================================================
// HEXADECIMAL
// =============================================================================

/// Convert a hexadecimal literal.
///
/// The text is copied verbatim; numeric conversion happens at execution
/// time.
pub fn convert_hex(node: &CstNode) -> Node {
    Node::HexLiteral(HexLiteralNode {
        value: node.value_or_empty().to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rxs_cst::NodeKind;

    #[test]
    fn test_convert_integer() {
        let node = CstNode::with_value(NodeKind::NumberLiteral, "42");
        match convert_number(&node).unwrap() {
            Node::NumberLiteral(n) => assert_eq!(n.value, 42.0),
            _ => panic!("Expected NumberLiteral"),
        }
    }

    #[test]
    fn test_convert_float() {
        let node = CstNode::with_value(NodeKind::NumberLiteral, "3.14");
        match convert_number(&node).unwrap() {
            Node::NumberLiteral(n) => assert!((n.value - 3.14).abs() < 0.001),
            _ => panic!("Expected NumberLiteral"),
        }
    }

    #[test]
    fn test_malformed_number_is_error() {
        let node = CstNode::with_value(NodeKind::NumberLiteral, "12abc");
        let err = convert_number(&node).unwrap_err();
        assert!(err.to_string().contains("Invalid number literal '12abc'"));
    }

    #[test]
    fn test_convert_boolean_true() {
        let node = CstNode::with_value(NodeKind::BooleanLiteral, "true");
        match convert_boolean(&node) {
            Node::BooleanLiteral(b) => assert!(b.value),
            _ => panic!("Expected BooleanLiteral"),
        }
    }

    #[test]
    fn test_convert_boolean_is_case_sensitive() {
        let node = CstNode::with_value(NodeKind::BooleanLiteral, "True");
        match convert_boolean(&node) {
            Node::BooleanLiteral(b) => assert!(!b.value),
            _ => panic!("Expected BooleanLiteral"),
        }
    }

    #[test]
    fn test_convert_string_verbatim() {
        let node = CstNode::with_value(NodeKind::StringLiteral, "dbo.Customer\\n");
        match convert_string(&node) {
            Node::StringLiteral(s) => assert_eq!(s.value, "dbo.Customer\\n"),
            _ => panic!("Expected StringLiteral"),
        }
    }

    #[test]
    fn test_convert_hex_verbatim() {
        let node = CstNode::with_value(NodeKind::HexadecimalLiteral, "0x2A");
        match convert_hex(&node) {
            Node::HexLiteral(h) => assert_eq!(h.value, "0x2A"),
            _ => panic!("Expected HexLiteral"),
        }
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let node = CstNode::with_value(NodeKind::NumberLiteral, "2.5");
        let first = convert_number(&node).unwrap();
        let second = convert_number(&node).unwrap();
        assert_eq!(first, second);
    }
}
