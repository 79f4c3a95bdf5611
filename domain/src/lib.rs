//! Domain layer for query-form
//!
//! This crate contains the values that flow through one submit cycle.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: the raw text captured from the input control when the
//!   submit control is activated
//! - **Query result**: whatever JSON value the server answered with; its
//!   shape is never inspected
//! - **Result view**: the content of the result region, always exactly one of
//!   placeholder, success or error

pub mod config;
pub mod core;
pub mod query;
pub mod view;

// Re-export commonly used types
pub use config::{OutputFormat, SubmitPolicy};
pub use core::{error::DomainError, question::Question};
pub use query::{request::QueryRequest, result::QueryResult};
pub use view::{
    messages::{EMPTY_QUESTION_ALERT, ERROR_BANNER, SEARCHING_PLACEHOLDER},
    result_view::ResultView,
};
