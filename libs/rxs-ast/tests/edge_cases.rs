use config::constants::TransformConfig;
use rxs_ast::{create_ast, create_ast_with_config, CompileErrorKind, Severity};
use rxs_cst::{CstNode, NodeKind, Position, Token};

fn program(children: Vec<CstNode>) -> CstNode {
    CstNode::with_children(NodeKind::Program, children)
}

fn variable(name: &str) -> CstNode {
    CstNode::with_value(NodeKind::VariableIdentifier, name)
}

#[test]
fn bare_identifier_is_an_identifier_syntax_error() {
    let err = create_ast(&program(vec![variable("x")])).unwrap_err();
    match err.kind {
        CompileErrorKind::IdentifierSyntax { ref name } => assert_eq!(name, "x"),
        _ => panic!("expected identifier syntax error"),
    }
}

#[test]
fn digit_after_sigil_is_an_identifier_syntax_error() {
    let err = create_ast(&program(vec![variable("$1abc")])).unwrap_err();
    assert!(matches!(err.kind, CompileErrorKind::IdentifierSyntax { .. }));
}

#[test]
fn valid_reference_succeeds() {
    let ast = create_ast(&program(vec![variable("$customer")])).unwrap();
    assert_eq!(ast.program.body.len(), 1);
}

#[test]
fn macro_without_name_is_a_shape_error() {
    let root = program(vec![CstNode::with_children(
        NodeKind::MacroInvocation,
        vec![CstNode::new(NodeKind::MacroArguments)],
    )]);
    let err = create_ast(&root).unwrap_err();
    assert!(matches!(err.kind, CompileErrorKind::SyntaxShape { .. }));
    assert!(err.to_string().contains("Macro name expected"));
}

#[test]
fn directive_argument_is_an_unexpected_argument_error() {
    let root = program(vec![CstNode::with_children(
        NodeKind::MacroInvocation,
        vec![
            CstNode::with_value(NodeKind::MacroName, "db"),
            CstNode::with_children(
                NodeKind::MacroArguments,
                vec![CstNode::with_children(
                    NodeKind::MacroArgument,
                    vec![CstNode::with_value(NodeKind::Directive, "#strict")],
                )],
            ),
        ],
    )]);
    let err = create_ast(&root).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected argument type: Directive");
}

#[test]
fn malformed_number_is_a_number_syntax_error() {
    let root = program(vec![CstNode::with_value(NodeKind::NumberLiteral, "7f.2")]);
    let err = create_ast(&root).unwrap_err();
    assert!(matches!(err.kind, CompileErrorKind::NumberSyntax { .. }));
}

#[test]
fn error_carries_token_position_into_display() {
    let root = program(vec![CstNode::with_token(
        NodeKind::VariableIdentifier,
        "1nope",
        Token::new("identifier", "1nope", Position::new(5, 9, "pipeline.rxs")),
    )]);
    let err = create_ast(&root).unwrap_err();
    assert!(err
        .to_string()
        .ends_with("at line 5 column 9 in pipeline.rxs"));
}

#[test]
fn error_without_position_has_no_suffix() {
    let err = create_ast(&program(vec![variable("nope")])).unwrap_err();
    assert!(!err.to_string().contains(" at "));
}

#[test]
fn nesting_past_the_limit_is_a_depth_error() {
    let mut node = CstNode::with_value(NodeKind::NumberLiteral, "1");
    for _ in 0..64 {
        node = CstNode::with_children(NodeKind::Grouping, vec![node]);
    }
    let config = TransformConfig::new(32).unwrap();
    let err = create_ast_with_config(&program(vec![node]), &config).unwrap_err();
    assert!(matches!(err.kind, CompileErrorKind::NestingDepth { max: 32 }));
}

#[test]
fn unknown_directive_warns_but_converts() {
    let root = program(vec![
        CstNode::with_value(NodeKind::Directive, "#parallel"),
        variable("$ok"),
    ]);
    let ast = create_ast(&root).unwrap();
    assert_eq!(ast.program.body.len(), 1);
    assert_eq!(ast.warnings.len(), 1);
    assert_eq!(ast.warnings[0].severity, Severity::Warning);
    assert!(ast.warnings[0].message.contains("#parallel"));
}

#[test]
fn failure_returns_no_partial_ast() {
    // The second statement is invalid; the whole unit must fail.
    let root = program(vec![
        variable("$fine"),
        variable("broken"),
        variable("$also_fine"),
    ]);
    assert!(create_ast(&root).is_err());
}

#[test]
fn operator_in_group_body_is_rejected() {
    let root = program(vec![CstNode::with_children(
        NodeKind::Grouping,
        vec![CstNode::with_value(NodeKind::Operator, "->")],
    )]);
    let err = create_ast(&root).unwrap_err();
    assert!(matches!(err.kind, CompileErrorKind::UnexpectedNode { .. }));
}
