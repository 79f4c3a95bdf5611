//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use query_form_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How the result region is printed
    pub format: OutputFormat,
    /// Show a spinner while a request is pending
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_progress: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// Configured history file, or `<data dir>/query-form/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("query-form").join("history.txt")))
    }
}
