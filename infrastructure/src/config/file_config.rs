//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use query_form_application::FormConfig;
use query_form_domain::{OutputFormat, SubmitPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("http.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("http.endpoint must start with '/': {0}")]
    RelativeEndpoint(String),

    #[error("http.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Raw HTTP configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Origin of the server hosting the query API
    pub base_url: String,
    /// Path of the query API
    pub endpoint: String,
    /// Per-request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,
    /// Proxy for all requests; `HTTP_PROXY`/`HTTPS_PROXY` apply when unset
    pub proxy: Option<String>,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint: "/api/query".to_string(),
            timeout_seconds: None,
            proxy: None,
        }
    }
}

/// Raw form configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Handling of activations that overlap a pending request
    pub policy: SubmitPolicy,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// How the result region is printed
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a request is pending
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file (platform data dir when unset)
    pub history_file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub http: FileHttpConfig,
    pub form: FileFormConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.http.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if !self.http.endpoint.starts_with('/') {
            return Err(ConfigValidationError::RelativeEndpoint(
                self.http.endpoint.clone(),
            ));
        }
        if self.http.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Controller configuration derived from the `[form]` section
    pub fn form_config(&self) -> FormConfig {
        FormConfig::new().with_policy(self.form.policy)
    }
}
