use rxs_cst::Position;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message with severity and optional location.
///
/// Warnings never change the produced AST; they surface behavior the
/// conversion tolerated, such as unknown directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Option<Position>,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: String, position: Option<Position>) -> Self {
        Self {
            severity,
            message,
            position,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn error(message: String, position: Option<Position>) -> Self {
        Self::new(Severity::Error, message, position)
    }

    pub fn warning(message: String, position: Option<Position>) -> Self {
        Self::new(Severity::Warning, message, position)
    }
}
