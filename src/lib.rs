//! Kiln is a project scaffolding tool.
//! It provides the template rendering core: a fixed function library exposed to
//! template expressions, a strict missing-key render policy, and bootstrapping
//! of the template root directory.

/// Template root directory bootstrapping
pub mod bootstrap;

/// Command-line interface module for the Kiln application
pub mod cli;

/// Subcommand implementations
pub mod command;

/// Configuration resolution (template root)
pub mod config;

pub mod constants;

/// Error types and handling for the Kiln application
pub mod error;

/// Case-conversion template filters
pub mod filters;

/// Function library exposed to template expressions
pub mod functions;

/// Reference-time layout formatting used by the `time` function
pub mod layout;

pub mod logger;

/// Render options (missing-key policy and friends)
pub mod options;

/// Data mapping parsing for render calls
pub mod parser;

/// Template parsing and rendering functionality
pub mod renderer;

/// Host environment, user and clock access
pub mod system;
