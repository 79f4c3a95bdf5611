//! Application layer for query-form
//!
//! This crate contains the form controller, its port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FormConfig;
pub use ports::{
    form_view::{FormHost, QueryFormView},
    query_gateway::{QueryError, QueryGateway},
};
pub use use_cases::submit_query::{
    Activation, PendingSubmit, QueryFormController, SubmitOutcome,
};
