//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question captured from the input control (Value Object)
///
/// Only the empty string is rejected. Whitespace is kept as typed and sent
/// to the server unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, rejecting the empty string
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            Err(DomainError::EmptyQuestion)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("猫とは何か").unwrap();
        assert_eq!(q.content(), "猫とは何か");
    }

    #[test]
    fn test_try_new_empty() {
        assert_eq!(Question::try_new(""), Err(DomainError::EmptyQuestion));
    }

    #[test]
    fn test_whitespace_is_kept() {
        let q = Question::try_new("   ").unwrap();
        assert_eq!(q.content(), "   ");

        let q = Question::try_new("  padded ").unwrap();
        assert_eq!(q.into_content(), "  padded ");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Question>("\"\"").is_err());
        let q: Question = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(q.content(), "hello");
    }
}
