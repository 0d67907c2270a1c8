//! Error types for snapshot construction and match coverage.
//!
//! The typed rendition reports coverage and selector mistakes at compile time.
//! These variants are the runtime counterpart used by the dynamic rendition,
//! plus the payload conversion failures shared by both.

use thiserror::Error;

use crate::status::{join, Status};

/// Errors surfaced by [`SnapshotView`](crate::SnapshotView),
/// [`MatchChain`](crate::MatchChain) and [`Payload`](crate::Payload).
#[derive(Debug, Error)]
pub enum UiStateError {
    /// `exhaustive()` was reached while declared statuses remain unhandled.
    #[error("`exhaustive()` requires every status to be matched; missing: {}", join(.missing))]
    Uncovered { missing: Vec<Status> },

    /// A status was selected by more than one branch of the same chain.
    #[error("`{status}` is already matched earlier in this chain")]
    AlreadyMatched { status: Status },

    /// A branch was attached after every declared status was covered.
    #[error("all statuses are already matched; `{status}` has nothing left to select")]
    AllMatched { status: Status },

    /// A selector named a status outside the declared universe.
    #[error("`{status}` is not a status of this snapshot (declared: {})", join(.declared))]
    UnknownStatus {
        status: Status,
        declared: Vec<Status>,
    },

    /// A payload was built from a value that is not a record.
    #[error("payload must be a record, found {kind}")]
    PayloadNotObject { kind: &'static str },

    /// The payload could not be converted to or from a typed record.
    #[error("payload conversion failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for ui-state operations.
pub type UiStateResult<T> = Result<T, UiStateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncovered_names_missing_statuses() {
        let err = UiStateError::Uncovered {
            missing: vec![Status::Error, Status::from("over-10")],
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"`exhaustive()` requires every status to be matched; missing: error, over-10"
        );
    }

    #[test]
    fn test_unknown_status_lists_declared() {
        let err = UiStateError::UnknownStatus {
            status: Status::Default,
            declared: vec![Status::Pending, Status::Error],
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"`default` is not a status of this snapshot (declared: pending, error)"
        );
    }

    #[test]
    fn test_already_matched_message() {
        let err = UiStateError::AlreadyMatched {
            status: Status::Pending,
        };
        assert_eq!(err.to_string(), "`pending` is already matched earlier in this chain");
    }
}
