//! The dynamic match chain and its terminal resolvers.
//!
//! Each `match_` consumes the chain and returns the next one. The first branch
//! whose selector matches the snapshot's status installs its handler as a
//! pending thunk; every later branch is inert at runtime but still counts
//! toward coverage. Coverage is tracked against the view's declared variant
//! universe and violations are reported through its
//! [`CoveragePolicy`](crate::CoveragePolicy).

use crate::errors::{UiStateError, UiStateResult};
use crate::payload::Payload;
use crate::resolution::Resolution;
use crate::selector::Selector;
use crate::status::Status;
use crate::view::SnapshotView;

/// Which statuses a chain has handled so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// Statuses selected by some branch, in attachment order.
    pub covered: Vec<Status>,
    /// Declared statuses no branch has selected. Empty when no universe was declared.
    pub missing: Vec<Status>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A linear chain of `(selector, handler)` branches over one snapshot.
#[must_use = "a match chain produces nothing until `exhaustive()` or `non_exhaustive()` is called"]
pub struct MatchChain<'a, T> {
    view: &'a SnapshotView,
    resolution: Resolution<'a, T>,
    covered: Vec<Status>,
    violations: Vec<UiStateError>,
}

impl<'a, T> MatchChain<'a, T> {
    pub(crate) fn new(view: &'a SnapshotView) -> Self {
        Self {
            view,
            resolution: Resolution::Unresolved,
            covered: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// Attach a branch.
    ///
    /// If no earlier branch matched and `selector` selects the snapshot's
    /// status, `handler` becomes the chain's pending output. Otherwise the
    /// handler is dropped without being called.
    pub fn match_<F>(mut self, selector: impl Into<Selector>, handler: F) -> Self
    where
        F: FnOnce(&Payload) -> T + 'a,
    {
        let selector = selector.into();
        self.cover(&selector);

        let view: &'a SnapshotView = self.view;
        let status = view.status();
        self.resolution = match self.resolution {
            Resolution::Unresolved if selector.matches(status) => {
                tracing::trace!(%status, branch = self.covered.len(), "match branch resolved");
                let payload = view.payload();
                Resolution::resolved(move || handler(payload))
            }
            Resolution::Unresolved => Resolution::Unresolved,
            resolved => {
                tracing::trace!(?selector, "branch skipped on resolved chain");
                resolved
            }
        };
        self
    }

    /// Whether some branch has matched.
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_resolved()
    }

    /// The coverage accumulated so far.
    pub fn coverage(&self) -> Coverage {
        let missing = self
            .view
            .variants()
            .unwrap_or_default()
            .iter()
            .filter(|status| !self.covered.contains(*status))
            .cloned()
            .collect();
        Coverage {
            covered: self.covered.clone(),
            missing,
        }
    }

    /// Produce the matched output, or `None` when no branch matched.
    ///
    /// Selector violations recorded while building the chain are reported
    /// through the view's policy; missing statuses are not.
    pub fn non_exhaustive(mut self) -> Option<T> {
        if let Err(error) = self.check(false) {
            self.view.config().policy.report(&error);
        }
        self.resolution.force()
    }

    /// Produce the same output as [`MatchChain::non_exhaustive`], reporting
    /// any declared status no branch has selected.
    pub fn exhaustive(mut self) -> Option<T> {
        if let Err(error) = self.check(true) {
            self.view.config().policy.report(&error);
        }
        self.resolution.force()
    }

    /// Like [`MatchChain::non_exhaustive`], returning the first recorded
    /// violation instead of reporting it.
    ///
    /// On `Err` the matched handler is dropped without being called.
    pub fn try_non_exhaustive(mut self) -> UiStateResult<Option<T>> {
        self.check(false)?;
        Ok(self.resolution.force())
    }

    /// Like [`MatchChain::exhaustive`], returning the first violation or the
    /// missing statuses instead of reporting them.
    ///
    /// On `Err` the matched handler is dropped without being called.
    pub fn try_exhaustive(mut self) -> UiStateResult<Option<T>> {
        self.check(true)?;
        Ok(self.resolution.force())
    }

    /// Record the statuses of `selector` as covered.
    ///
    /// Duplicates are only violations against a declared universe; without
    /// one the chain is checked for nothing and first match wins silently.
    fn cover(&mut self, selector: &Selector) {
        let declared = self.view.variants().is_some();
        for status in selector.statuses() {
            if !self.view.is_declared(status) {
                self.violations.push(self.view.unknown(status));
            } else if !self.covered.contains(status) {
                self.covered.push(status.clone());
            } else if declared {
                let error = if self.coverage().is_complete() {
                    UiStateError::AllMatched {
                        status: status.clone(),
                    }
                } else {
                    UiStateError::AlreadyMatched {
                        status: status.clone(),
                    }
                };
                self.violations.push(error);
            }
        }
    }

    fn check(&mut self, require_complete: bool) -> UiStateResult<()> {
        if !self.violations.is_empty() {
            return Err(self.violations.remove(0));
        }
        if require_complete {
            let coverage = self.coverage();
            if !coverage.is_complete() {
                return Err(UiStateError::Uncovered {
                    missing: coverage.missing,
                });
            }
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for MatchChain<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchChain")
            .field("status", self.view.status())
            .field("resolution", &self.resolution)
            .field("covered", &self.covered)
            .field("violations", &self.violations.len())
            .finish()
    }
}
