//! # AST Visitors
//!
//! Visitor implementations for CST to AST transformation.
//!
//! ## Structure
//!
//! ```text
//! visitor/
//! ├── mod.rs           - This file
//! └── cst_to_ast/      - CST to AST normalization
//!     ├── mod.rs       - Entry points, context, dispatcher
//!     ├── literals.rs  - Literal conversion
//!     ├── variables.rs - Variable declaration/reference conversion
//!     ├── interpolation.rs - String interpolation resolution
//!     ├── macros.rs    - Macro invocation/chain/branch/group conversion
//!     ├── control_flow.rs - If/switch/try-catch/while conversion
//!     └── directives.rs - Compiler pragma processing
//! ```

pub mod cst_to_ast;
