//! Lazy, at-most-once branch output shared by both match chains.

/// Whether a branch of the chain has matched yet.
///
/// A resolved chain carries the matched handler as a deferred computation; it
/// only runs when a terminal resolver forces it.
pub(crate) enum Resolution<'a, T> {
    Unresolved,
    Resolved(Box<dyn FnOnce() -> T + 'a>),
}

impl<'a, T> Resolution<'a, T> {
    pub(crate) fn resolved(thunk: impl FnOnce() -> T + 'a) -> Self {
        Resolution::Resolved(Box::new(thunk))
    }

    pub(crate) fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Run the pending handler, or produce the absent marker.
    pub(crate) fn force(self) -> Option<T> {
        match self {
            Resolution::Unresolved => None,
            Resolution::Resolved(thunk) => Some(thunk()),
        }
    }
}

impl<T> std::fmt::Debug for Resolution<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Unresolved => f.write_str("Unresolved"),
            Resolution::Resolved(_) => f.write_str("Resolved(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_thunk_runs_only_when_forced() {
        let calls = Cell::new(0);
        let resolution = Resolution::resolved(|| {
            calls.set(calls.get() + 1);
            "done"
        });

        assert!(resolution.is_resolved());
        assert_eq!(calls.get(), 0);
        assert_eq!(resolution.force(), Some("done"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unresolved_forces_to_none() {
        let resolution: Resolution<'_, u32> = Resolution::Unresolved;
        assert!(!resolution.is_resolved());
        assert_eq!(resolution.force(), None);
    }
}
