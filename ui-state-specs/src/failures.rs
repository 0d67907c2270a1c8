//! Expected failures tracking via TOML file.
//!
//! ```toml
//! [[pending]]
//! fixture = "custom-status.toml"
//! check = "output"
//! reason = "Awaiting template support for nested fields"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path, relative to the fixtures directory.
    pub fixture: String,
    /// Check name (`output`, `calls`, `error`, `is[0]`, `when[1]`).
    pub check: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// Related issue URL.
    #[serde(default)]
    pub issue: Option<String>,
}

impl FailureEntry {
    fn is_for(&self, fixture: &str, check: &str) -> bool {
        self.fixture == fixture && self.check == check
    }
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass; the failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Classify a failed check.
    pub fn state_of(&self, fixture: &str, check: &str) -> FailureState {
        if self.known.iter().any(|entry| entry.is_for(fixture, check)) {
            FailureState::Known
        } else if self.pending.iter().any(|entry| entry.is_for(fixture, check)) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    /// Entry for a failed check, if it is expected.
    pub fn entry(&self, fixture: &str, check: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(&self.pending)
            .find(|entry| entry.is_for(fixture, check))
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }
}

/// Tally of a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    /// Fixtures run.
    pub fixtures: usize,
    /// Fixtures with every check passing.
    pub passed: usize,
    /// Failed checks listed in the expected failures file.
    pub expected_failures: usize,
    /// Failed checks not listed anywhere.
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.fixtures += 1;
        self.passed += 1;
    }

    /// Record a fixture with failed checks, classified by state.
    pub fn record_failures(&mut self, states: &[FailureState]) {
        self.fixtures += 1;
        for state in states {
            match state {
                FailureState::Known | FailureState::Pending => self.expected_failures += 1,
                FailureState::Regression => self.regressions += 1,
            }
        }
    }

    /// Fixtures with at least one failed check.
    pub fn failed(&self) -> usize {
        self.fixtures - self.passed
    }
}
