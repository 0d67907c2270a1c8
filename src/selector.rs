//! Status selectors for the dynamic rendition.

use crate::status::Status;

/// One status, or a list of statuses, to test a snapshot against.
///
/// An empty list is a legal selector that never matches.
///
/// # Example
/// ```
/// use ui_state::{Selector, Status};
///
/// let one = Selector::from("pending");
/// let many = Selector::from(["error", "not-found"]);
///
/// assert!(one.matches(&Status::Pending));
/// assert!(many.matches(&Status::NotFound));
/// assert!(!Selector::from(Vec::<Status>::new()).matches(&Status::Pending));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    One(Status),
    Any(Vec<Status>),
}

impl Selector {
    /// Whether `status` is selected.
    pub fn matches(&self, status: &Status) -> bool {
        match self {
            Selector::One(selected) => selected == status,
            Selector::Any(selected) => selected.contains(status),
        }
    }

    /// The selected statuses, in the order given.
    pub fn statuses(&self) -> &[Status] {
        match self {
            Selector::One(status) => std::slice::from_ref(status),
            Selector::Any(statuses) => statuses,
        }
    }
}

impl From<Status> for Selector {
    fn from(status: Status) -> Self {
        Selector::One(status)
    }
}

impl From<&Status> for Selector {
    fn from(status: &Status) -> Self {
        Selector::One(status.clone())
    }
}

impl From<&str> for Selector {
    fn from(status: &str) -> Self {
        Selector::One(status.into())
    }
}

impl From<String> for Selector {
    fn from(status: String) -> Self {
        Selector::One(status.into())
    }
}

impl<S: Into<Status>> From<Vec<S>> for Selector {
    fn from(statuses: Vec<S>) -> Self {
        Selector::Any(statuses.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Status>, const N: usize> From<[S; N]> for Selector {
    fn from(statuses: [S; N]) -> Self {
        Selector::Any(statuses.into_iter().map(Into::into).collect())
    }
}

impl<S> From<&[S]> for Selector
where
    S: Clone + Into<Status>,
{
    fn from(statuses: &[S]) -> Self {
        Selector::Any(statuses.iter().cloned().map(Into::into).collect())
    }
}
