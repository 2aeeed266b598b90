use crate::diagnostic::Diagnostic;
use serde::{Deserialize, Serialize};

/// Result of one CST→AST conversion: the program plus any warnings
/// gathered while it was built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ast {
    pub program: ProgramNode,
    pub warnings: Vec<Diagnostic>,
}

impl Ast {
    pub fn new(program: ProgramNode, warnings: Vec<Diagnostic>) -> Self {
        Self { program, warnings }
    }

    /// Check if conversion finished without warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramNode {
    pub options: ProgramOptions,
    pub body: Vec<Node>,
}

/// Program-level compile options, mutated by directives in source-scan
/// order. The last write to a given option wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramOptions {
    pub strict: bool,
    pub version: String,
    pub mode: ExecutionMode,
    pub host: Option<String>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            strict: false,
            version: config::constants::DEFAULT_LANGUAGE_VERSION.to_string(),
            mode: ExecutionMode::Script,
            host: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Script,
    Pipeline,
}

impl ExecutionMode {
    /// Parse a `#mode` directive operand.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "script" => Some(Self::Script),
            "pipeline" => Some(Self::Pipeline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Node {
    StringLiteral(StringLiteralNode),
    NumberLiteral(NumberLiteralNode),
    BooleanLiteral(BooleanLiteralNode),
    HexLiteral(HexLiteralNode),
    Variable(VariableNode),
    MacroInvocation(MacroInvocationNode),
    MacroChain(MacroChainNode),
    MacroBranch(MacroBranchNode),
    MacroGroup(MacroGroupNode),
    Conditional(ConditionalExpressionNode),
    Switch(SwitchStatementNode),
    TryCatch(TryCatchStatementNode),
    Loop(LoopNode),
    Binary(BinaryExpressionNode),
    Unary(UnaryExpressionNode),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StringLiteralNode {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumberLiteralNode {
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BooleanLiteralNode {
    pub value: bool,
}

/// Hexadecimal text is carried verbatim; numeric conversion happens at
/// execution time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HexLiteralNode {
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VariableOperation {
    Declare,
    Reference,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariableNode {
    pub name: String,
    pub operation: VariableOperation,
    pub right: Option<Box<Node>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroInvocationNode {
    pub name: String,
    pub arguments: Vec<Node>,
}

/// `source -> destination`. A slot stays empty when the corresponding CST
/// child did not lower to an invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroChainNode {
    pub source: Option<MacroInvocationNode>,
    pub destination: Option<MacroInvocationNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroBranchNode {
    pub condition: Option<MacroInvocationNode>,
    pub success_branch: Option<Box<Node>>,
    pub failure_branch: Option<Box<Node>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroGroupNode {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionalExpressionNode {
    pub test: Box<Node>,
    pub consequent: Option<Box<Node>>,
    pub alternate: Option<Box<Node>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwitchStatementNode {
    pub discriminant: Box<Node>,
    pub cases: Vec<CaseClauseNode>,
}

/// One arm of a switch. A clause without a test is a default arm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseClauseNode {
    pub test: Option<Box<Node>>,
    pub consequent: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TryCatchStatementNode {
    pub try_block: Option<Box<Node>>,
    pub catch_block: Option<Box<Node>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoopNode {
    pub test: Option<Box<Node>>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinaryExpressionNode {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnaryExpressionNode {
    pub operator: String,
    pub operand: Box<Node>,
}
