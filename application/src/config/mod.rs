//! Application-level configuration.
//!
//! - [`FormConfig`] — how the form controller handles activations

pub mod form_config;

pub use form_config::FormConfig;
