//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command handlers.
pub mod commands;

/// Error reporting and exit statuses.
pub mod exit;

/// Classification of the positional operands.
pub mod invocation;

pub use args::Args;
pub use invocation::{Invocation, LIST_LANGUAGES_FLAG};
