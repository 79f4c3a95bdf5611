//! Submit policy value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens when the submit control is activated while a previous
/// request is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitPolicy {
    /// Every activation sends a request; the last one to finish owns the
    /// result region, regardless of which was started last.
    #[default]
    Unguarded,
    /// Activations are ignored while a request is pending.
    SingleFlight,
    /// Every activation sends a request; responses to anything but the most
    /// recent activation are dropped.
    LatestWins,
}

impl SubmitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unguarded => "unguarded",
            Self::SingleFlight => "single-flight",
            Self::LatestWins => "latest-wins",
        }
    }
}

impl fmt::Display for SubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unguarded() {
        assert_eq!(SubmitPolicy::default(), SubmitPolicy::Unguarded);
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&SubmitPolicy::SingleFlight).unwrap();
        assert_eq!(json, "\"single-flight\"");
        let policy: SubmitPolicy = serde_json::from_str("\"latest-wins\"").unwrap();
        assert_eq!(policy, SubmitPolicy::LatestWins);
    }

    #[test]
    fn test_display_matches_serde_name() {
        for policy in [
            SubmitPolicy::Unguarded,
            SubmitPolicy::SingleFlight,
            SubmitPolicy::LatestWins,
        ] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy));
        }
    }
}
