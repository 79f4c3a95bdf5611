//! Query request body

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// JSON body posted to the query endpoint: `{"question": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: Question,
}

impl QueryRequest {
    pub fn new(question: Question) -> Self {
        Self { question }
    }

    /// Get the question text
    pub fn question(&self) -> &str {
        self.question.content()
    }
}
