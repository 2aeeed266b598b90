//! # Directive Processing
//!
//! Extracts `#`-prefixed compiler pragmas into program-level options.
//! Directive conversion never produces an AST node; it mutates the options
//! held by the conversion context. Directives are processed in source-scan
//! order and the last write to a given option wins.
//!
//! ## Recognized Directives
//!
//! - `#runat <host>` - target host for execution
//! - `#strict` - enable strict mode
//! - `#mode <mode>` - execution mode (`script` or `pipeline`)
//! - `#version <semver>` - language version the snippet was written for
//!
//! Unknown directives are ignored with a warning.

use super::Context;
use crate::ast::ExecutionMode;
use rxs_cst::CstNode;

/// Apply one directive to the program options.
pub fn process_directive(node: &CstNode, ctx: &mut Context) {
    let raw = node.value_or_empty().trim();
    let mut parts = raw.split_whitespace();
    let keyword = parts.next().unwrap_or("");
    let operand = parts.next();

    match keyword {
        "#strict" => ctx.options.strict = true,
        "#runat" => match operand {
            Some(host) => ctx.options.host = Some(host.to_string()),
            None => ctx.warn(
                "Directive #runat expects a host operand".to_string(),
                node.position(),
            ),
        },
        "#mode" => match operand.and_then(ExecutionMode::parse) {
            Some(mode) => ctx.options.mode = mode,
            None => ctx.warn(
                format!("Unknown execution mode in directive '{raw}'"),
                node.position(),
            ),
        },
        "#version" => match operand {
            Some(version) => ctx.options.version = version.to_string(),
            None => ctx.warn(
                "Directive #version expects a version operand".to_string(),
                node.position(),
            ),
        },
        _ => ctx.warn(format!("Unknown directive '{keyword}'"), node.position()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
