//! Tagged snapshot construction.
//!
//! A [`Snapshot`] can only be produced by a [`Setter`], so the closure handed
//! to [`create_snapshot`] has no way to return anything but the result of a
//! `set` call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::Payload;
use crate::status::Status;
use crate::view::SnapshotView;

/// An immutable status plus its payload.
///
/// Serialises as a flat record whose `__status` key holds the status and
/// whose remaining keys are the payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "__status")]
    status: Status,
    #[serde(flatten)]
    payload: Payload,
}

impl Snapshot {
    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Read a single payload field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    /// Whether the snapshot's status equals `status`.
    pub fn is(&self, status: &Status) -> bool {
        &self.status == status
    }
}

/// The `set` operation handed to a snapshot builder.
#[derive(Debug)]
pub struct Setter {
    _private: (),
}

impl Setter {
    /// Tag the snapshot with `status` and an empty payload.
    pub fn set(&self, status: impl Into<Status>) -> Snapshot {
        self.set_with(status, Payload::new())
    }

    /// Tag the snapshot with `status` and the given payload.
    pub fn set_with(&self, status: impl Into<Status>, payload: impl Into<Payload>) -> Snapshot {
        Snapshot {
            status: status.into(),
            payload: payload.into(),
        }
    }
}

/// Evaluate `builder` once and wrap its snapshot in a [`SnapshotView`].
///
/// # Example
/// ```
/// use ui_state::{create_snapshot, Payload};
///
/// let count = 3;
/// let ui = create_snapshot(|set| {
///     if count == 0 {
///         return set.set("initial");
///     }
///     set.set_with("odd", Payload::new().with("count", count))
/// });
///
/// assert!(ui.is("odd"));
/// assert_eq!(ui.state().get("count"), Some(&serde_json::json!(3)));
/// ```
pub fn create_snapshot<F>(builder: F) -> SnapshotView
where
    F: FnOnce(&Setter) -> Snapshot,
{
    let setter = Setter { _private: () };
    SnapshotView::new(builder(&setter))
}
