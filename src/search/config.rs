//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::frontier::FrontierPolicy;

/// Tuning knobs for [`crate::search::PathFinder`].
///
/// The defaults give a breadth-first search with no depth bound, which is
/// the only combination that guarantees a shortest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Frontier removal order.
    pub policy: FrontierPolicy,
    /// Test each generated neighbor against the target before enqueueing it,
    /// instead of waiting until it is removed from the frontier.
    pub early_goal_check: bool,
    /// Give up on paths longer than this many hops.
    pub max_degrees: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: FrontierPolicy::Queue,
            early_goal_check: true,
            max_degrees: None,
        }
    }
}

impl SearchConfig {
    /// Depth-first configuration, for comparison against the default.
    #[must_use]
    pub fn depth_first() -> Self {
        Self {
            policy: FrontierPolicy::Stack,
            ..Self::default()
        }
    }

    /// Sets the frontier policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FrontierPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables the generation-time goal check.
    #[must_use]
    pub fn with_early_goal_check(mut self, enabled: bool) -> Self {
        self.early_goal_check = enabled;
        self
    }

    /// Bounds the path length. Needs the queue policy.
    #[must_use]
    pub fn with_max_degrees(mut self, max: usize) -> Self {
        self.max_degrees = Some(max);
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    /// - `InvalidMaxDegrees`: if `max_degrees` is `Some(0)`
    /// - `DepthLimitRequiresQueue`: if `max_degrees` is set with the stack
    ///   policy. Depth-first order can mark a person explored at the bound
    ///   before a shorter route to them is seen.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self.max_degrees {
            Some(0) => Err(ConfigError::InvalidMaxDegrees { value: 0 }),
            Some(_) if self.policy == FrontierPolicy::Stack => {
                Err(ConfigError::DepthLimitRequiresQueue)
            }
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_breadth_first() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.policy, FrontierPolicy::Queue);
        assert!(cfg.early_goal_check);
        assert!(cfg.max_degrees.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_max_degrees_rejected() {
        let err = SearchConfig::default().with_max_degrees(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxDegrees { value: 0 }));
        assert!(SearchConfig::default().with_max_degrees(6).validate().is_ok());
    }

    #[test]
    fn test_depth_limit_rejected_for_stack() {
        let err = SearchConfig::depth_first().with_max_degrees(3).validate().unwrap_err();
        assert!(matches!(err, ConfigError::DepthLimitRequiresQueue));
        assert!(SearchConfig::depth_first().validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"policy":"stack"}"#).unwrap();
        assert_eq!(cfg, SearchConfig::depth_first());
    }
}
