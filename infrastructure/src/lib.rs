//! Infrastructure layer for query-form
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFormConfig, FileHttpConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use http::{GatewayBuildError, HttpQueryGateway};
