//! # CST to AST Normalization
//!
//! Transforms the front end's concrete syntax tree into a typed AST.
//!
//! The transform is a single fail-fast pass: every node is routed through
//! one exhaustive dispatcher, trivia vanishes, directives mutate the
//! program options as a side effect, and the first structural violation
//! aborts the compile unit with a positioned error. No partial AST is ever
//! produced; a partially valid program would later run macros against live
//! external systems with unvalidated shape.
//!
//! ## Example
//!
//! ```rust
//! use rxs_ast::create_ast;
//! use rxs_cst::{CstNode, NodeKind};
//!
//! let root = CstNode::with_children(NodeKind::Program, vec![
//!     CstNode::with_value(NodeKind::Directive, "#strict"),
//! ]);
//! let ast = create_ast(&root).unwrap();
//! assert!(ast.program.options.strict);
//! ```

mod control_flow;
mod directives;
mod interpolation;
mod literals;
mod macros;
mod variables;

use crate::ast::{Ast, Node, ProgramNode, ProgramOptions};
use crate::diagnostic::Diagnostic;
use crate::error::CompileError;
use config::constants::TransformConfig;
use rxs_cst::{CstNode, NodeKind, Position};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Convert a `Program`-rooted CST into an AST using the default
/// transform configuration.
///
/// ## Parameters
///
/// - `root`: root node of the CST, as produced by the platform front end
///
/// ## Returns
///
/// `Ast` bundling the immutable `ProgramNode` with any warnings, or the
/// first `CompileError` encountered.
pub fn create_ast(root: &CstNode) -> Result<Ast, CompileError> {
    create_ast_with_config(root, &TransformConfig::default())
}

/// Convert a `Program`-rooted CST into an AST with a caller-chosen
/// configuration (e.g. a tighter nesting-depth limit for untrusted input).
pub fn create_ast_with_config(
    root: &CstNode,
    config: &TransformConfig,
) -> Result<Ast, CompileError> {
    if root.kind != NodeKind::Program {
        return Err(
            CompileError::syntax_shape(root.kind, "Program root expected").at(root.position())
        );
    }

    let mut ctx = Context::new(config);
    let mut body = Vec::new();

    for child in &root.children {
        if let Some(node) = convert_node(child, &mut ctx)? {
            body.push(node);
        }
    }

    let program = ProgramNode {
        options: ctx.options,
        body,
    };
    Ok(Ast::new(program, ctx.warnings))
}

// =============================================================================
// CONTEXT
// =============================================================================

/// State owned by one conversion call.
///
/// Holds the program options being assembled, the warnings gathered so far,
/// and the recursion depth. One context exists per `create_ast` call; it is
/// threaded `&mut` through the recursion and never shared across compiles.
pub(crate) struct Context {
    pub(crate) options: ProgramOptions,
    pub(crate) warnings: Vec<Diagnostic>,
    depth: usize,
    max_depth: usize,
}

impl Context {
    pub(crate) fn new(config: &TransformConfig) -> Self {
        Self {
            options: ProgramOptions::default(),
            warnings: Vec::new(),
            depth: 0,
            max_depth: config.max_nesting_depth,
        }
    }

    pub(crate) fn warn(&mut self, message: String, position: Option<&Position>) {
        self.warnings
            .push(Diagnostic::warning(message, position.cloned()));
    }
}

// =============================================================================
// NODE DISPATCHER
// =============================================================================

/// Route one CST node to its converter.
///
/// Returns `Ok(None)` for semantically empty nodes (trivia, directives),
/// `Ok(Some(_))` for nodes with an AST counterpart, and an error for tags
/// that are unrecognized or invalid where they appear. The match is
/// exhaustive on purpose: adding a `NodeKind` variant without a dispatch
/// arm fails compilation.
pub(crate) fn convert_node(
    node: &CstNode,
    ctx: &mut Context,
) -> Result<Option<Node>, CompileError> {
    ctx.depth += 1;
    if ctx.depth > ctx.max_depth {
        ctx.depth -= 1;
        return Err(CompileError::nesting_depth(ctx.max_depth).at(node.position()));
    }
    let result = dispatch(node, ctx);
    ctx.depth -= 1;
    result
}

fn dispatch(node: &CstNode, ctx: &mut Context) -> Result<Option<Node>, CompileError> {
    match node.kind {
        // A Program tag is only valid as the conversion root.
        NodeKind::Program => Err(CompileError::unexpected_node(node.kind).at(node.position())),

        NodeKind::Whitespace | NodeKind::Newline | NodeKind::Punctuation | NodeKind::Comment => {
            Ok(None)
        }

        // Side effect on the program options, no AST node.
        NodeKind::Directive => {
            directives::process_directive(node, ctx);
            Ok(None)
        }

        NodeKind::StringLiteral => Ok(Some(literals::convert_string(node))),
        NodeKind::NumberLiteral => literals::convert_number(node).map(Some),
        NodeKind::BooleanLiteral => Ok(Some(literals::convert_boolean(node))),
        NodeKind::HexadecimalLiteral => Ok(Some(literals::convert_hex(node))),
        NodeKind::StringInterpolation => {
            Ok(Some(interpolation::resolve_interpolation(node, ctx)))
        }

        NodeKind::VariableIdentifier => variables::convert_reference(node).map(Some),
        NodeKind::VariableDeclaration => variables::convert_declaration(node, ctx).map(Some),
        NodeKind::PropertyAccess => variables::convert_property_access(node).map(Some),

        NodeKind::MacroInvocation => {
            macros::convert_invocation(node, ctx).map(|inv| Some(Node::MacroInvocation(inv)))
        }
        NodeKind::Chaining => macros::convert_chain(node, ctx).map(Some),
        NodeKind::Branching => macros::convert_branch(node, ctx).map(Some),
        NodeKind::Grouping => macros::convert_group(node, ctx).map(Some),

        NodeKind::IfControl => control_flow::convert_if(node, ctx).map(Some),
        NodeKind::SwitchControl => control_flow::convert_switch(node, ctx).map(Some),
        NodeKind::TryCatch => control_flow::convert_try_catch(node, ctx).map(Some),
        NodeKind::WhileLoop => control_flow::convert_while(node, ctx).map(Some),

        // Contextual tags: only meaningful inside their parent shapes.
        NodeKind::MacroName
        | NodeKind::MacroArguments
        | NodeKind::MacroArgument
        | NodeKind::Identifier
        | NodeKind::Operator => Err(CompileError::unexpected_node(node.kind).at(node.position())),
    }
}

/// Convert a child that must contribute an AST node.
///
/// Used where the grammar requires a value (an if test, a switch
/// discriminant); a child that dissolves into nothing is a shape violation
/// there, not an omission.
pub(crate) fn convert_child(node: &CstNode, ctx: &mut Context) -> Result<Node, CompileError> {
    convert_node(node, ctx)?
        .ok_or_else(|| CompileError::unexpected_node(node.kind).at(node.position()))
}

// =============================================================================
// TESTS
// =============================================================================
