//! Predicate, extractor and match entry points over a dynamic snapshot.

use crate::chain::MatchChain;
use crate::config::MatchConfig;
use crate::errors::{UiStateError, UiStateResult};
use crate::payload::Payload;
use crate::selector::Selector;
use crate::snapshot::Snapshot;
use crate::status::Status;

/// Read-only access to a [`Snapshot`] through `is`, `when` and `match_`.
///
/// The variant universe is unknown until declared with
/// [`SnapshotView::with_variants`]. Once declared, selecting a status outside
/// of it, matching a status twice, or resolving `exhaustive()` with statuses
/// left over is reported through the view's [`MatchConfig`].
///
/// # Example
/// ```
/// use ui_state::{create_snapshot, Payload};
///
/// let ui = create_snapshot(|set| set.set_with("default", Payload::new().with("total", 3)))
///     .with_variants(["pending", "error", "default"]);
///
/// let rendered = ui
///     .match_("pending", |_| "Loading".to_string())
///     .match_("error", |_| "Error".to_string())
///     .match_("default", |data| format!("Total: {}", data["total"]))
///     .exhaustive();
///
/// assert_eq!(rendered.as_deref(), Some("Total: 3"));
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotView {
    state: Snapshot,
    variants: Option<Vec<Status>>,
    config: MatchConfig,
}

impl SnapshotView {
    pub(crate) fn new(state: Snapshot) -> Self {
        Self {
            state,
            variants: None,
            config: MatchConfig::default(),
        }
    }

    /// Declare every status the snapshot could have been built with.
    ///
    /// The snapshot's own status always belongs to the universe, declared or
    /// not. Duplicates are dropped; declaration order is kept.
    pub fn with_variants<I>(mut self, variants: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Status>,
    {
        let mut declared: Vec<Status> = Vec::new();
        for status in variants.into_iter().map(Into::into) {
            if !declared.contains(&status) {
                declared.push(status);
            }
        }
        if !declared.contains(self.state.status()) {
            declared.push(self.state.status().clone());
        }
        self.variants = Some(declared);
        self
    }

    /// Replace the coverage reporting configuration.
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    pub fn status(&self) -> &Status {
        self.state.status()
    }

    pub fn payload(&self) -> &Payload {
        self.state.payload()
    }

    /// The declared variant universe, if any.
    pub fn variants(&self) -> Option<&[Status]> {
        self.variants.as_deref()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Check that every status of `selector` belongs to the declared universe.
    ///
    /// Always `Ok` when no universe was declared.
    pub fn check_selector(&self, selector: &Selector) -> UiStateResult<()> {
        match selector.statuses().iter().find(|status| !self.is_declared(status)) {
            Some(status) => Err(self.unknown(status)),
            None => Ok(()),
        }
    }

    /// Whether the snapshot's status equals `status`.
    pub fn is(&self, status: impl Into<Status>) -> bool {
        let status = status.into();
        if !self.is_declared(&status) {
            self.config.policy.report(&self.unknown(&status));
        }
        self.state.is(&status)
    }

    /// Run `handler` on the payload if the status is selected, else `None`.
    pub fn when<T, F>(&self, selector: impl Into<Selector>, handler: F) -> Option<T>
    where
        F: FnOnce(&Payload) -> T,
    {
        let selector = selector.into();
        if let Err(error) = self.check_selector(&selector) {
            self.config.policy.report(&error);
        }
        if selector.matches(self.state.status()) {
            Some(handler(self.state.payload()))
        } else {
            None
        }
    }

    /// Start a match chain with its first branch.
    ///
    /// See [`MatchChain::match_`] for the branch semantics.
    pub fn match_<'a, T, F>(&'a self, selector: impl Into<Selector>, handler: F) -> MatchChain<'a, T>
    where
        F: FnOnce(&Payload) -> T + 'a,
    {
        MatchChain::new(self).match_(selector, handler)
    }

    pub(crate) fn is_declared(&self, status: &Status) -> bool {
        match &self.variants {
            Some(declared) => declared.contains(status),
            None => true,
        }
    }

    pub(crate) fn unknown(&self, status: &Status) -> UiStateError {
        UiStateError::UnknownStatus {
            status: status.clone(),
            declared: self.variants.clone().unwrap_or_default(),
        }
    }
}
