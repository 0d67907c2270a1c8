//! Coverage reporting configuration for the dynamic rendition.
//!
//! A [`SnapshotView`](crate::SnapshotView) cannot check coverage at compile
//! time, so violations are detected while the chain is built and handed to the
//! configured [`CoveragePolicy`]. The produced output never depends on the
//! policy.

use serde::{Deserialize, Serialize};

use crate::errors::UiStateError;

/// What to do with a detected coverage or selector violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoveragePolicy {
    /// Drop the violation.
    Ignore,
    /// Log it with `tracing::warn!`.
    Warn,
    /// Panic with the violation's message.
    Panic,
}

impl CoveragePolicy {
    pub(crate) fn report(self, error: &UiStateError) {
        match self {
            CoveragePolicy::Ignore => {}
            CoveragePolicy::Warn => tracing::warn!(%error, "ui-state coverage violation"),
            CoveragePolicy::Panic => panic!("{}", error),
        }
    }
}

/// Configuration for runtime coverage checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// How violations are reported.
    pub policy: CoveragePolicy,
}

impl Default for MatchConfig {
    /// [`MatchConfig::strict`] in debug builds, [`MatchConfig::lenient`] otherwise.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::strict()
        } else {
            Self::lenient()
        }
    }
}

impl MatchConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Panic on any violation.
    pub fn strict() -> Self {
        Self {
            policy: CoveragePolicy::Panic,
        }
    }

    /// Log violations and carry on.
    pub fn lenient() -> Self {
        Self {
            policy: CoveragePolicy::Warn,
        }
    }

    /// Skip reporting entirely; `try_*` terminals still return the errors.
    pub fn silent() -> Self {
        Self {
            policy: CoveragePolicy::Ignore,
        }
    }

    /// Set the policy.
    pub fn with_policy(mut self, policy: CoveragePolicy) -> Self {
        self.policy = policy;
        self
    }
}
