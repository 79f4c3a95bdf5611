//! Query Gateway port
//!
//! Defines the interface for sending a question to the query API.

use async_trait::async_trait;
use query_form_domain::{QueryRequest, QueryResult};
use thiserror::Error;

/// Errors that can occur after the question passed validation.
///
/// The controller does not distinguish between them: every variant is logged
/// and its message is shown under the generic error banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status}, body: {body}")]
    HttpStatus { status: u16, body: String },

    /// A 2xx response whose body is not valid JSON
    #[error("Invalid JSON response: {0}")]
    Parse(String),
}

/// Gateway to the query API
///
/// One call is one POST to the query endpoint. Implementations (adapters)
/// live in the infrastructure layer.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    /// Send the question and return the parsed JSON answer
    async fn query(&self, request: &QueryRequest) -> Result<QueryResult, QueryError>;
}
