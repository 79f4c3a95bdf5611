//! Configuration file loading for query-form
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUERY_FORM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./query-form.toml` or `./.query-form.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/query-form/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFormConfig, FileHttpConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
