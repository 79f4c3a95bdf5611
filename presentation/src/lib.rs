//! Presentation layer for query-form
//!
//! This crate contains CLI definitions, the terminal form host, output
//! formatters, the pending-request spinner and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::QueryRepl;
pub use cli::commands::{Cli, OutputArg, PolicyArg};
pub use config::{OutputConfig, ReplConfig};
pub use form::terminal::{TerminalForm, TerminalHost};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
