//! Form controller configuration.

use query_form_domain::SubmitPolicy;
use serde::{Deserialize, Serialize};

/// Parameters of [`QueryFormController`](crate::QueryFormController).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Handling of activations that overlap a pending request
    pub policy: SubmitPolicy,
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unguarded() {
        assert_eq!(FormConfig::new().policy, SubmitPolicy::Unguarded);
    }

    #[test]
    fn test_with_policy() {
        let config = FormConfig::new().with_policy(SubmitPolicy::LatestWins);
        assert_eq!(config.policy, SubmitPolicy::LatestWins);
    }
}
