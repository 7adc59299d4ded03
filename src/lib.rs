//! # translate - one-shot command line translation
//!
//! `translate` sends a piece of text to the Google translation API and prints
//! the result. It is meant to be called by an editor, one invocation per
//! translation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate from English to German
//! translate "Hello World" en de
//!
//! # List language codes for command completion
//! translate -c
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/translate/config.toml`:
//!
//! ```toml
//! [service]
//! endpoint = "https://translation.googleapis.com"
//! api_key_env = "GOOGLE_TRANSLATE_API_KEY"
//! ```
//!
//! `--endpoint` and `--api-key` (or `TRANSLATE_API_KEY`) take precedence.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities.
pub mod paths;

/// Translation capability and the Google translation API client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
