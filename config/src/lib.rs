//! # Config Crate
//!
//! Centralized configuration constants for the RXS compiler front end.
//! All tunable parameters are defined here to ensure consistency across
//! crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_NESTING_DEPTH, DEFAULT_LANGUAGE_VERSION};
//!
//! // Use MAX_NESTING_DEPTH to bound recursive tree transforms
//! let depth = 12;
//! assert!(depth < MAX_NESTING_DEPTH);
//!
//! // Use DEFAULT_LANGUAGE_VERSION for freshly initialized program options
//! assert_eq!(DEFAULT_LANGUAGE_VERSION, "0.0.1");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
