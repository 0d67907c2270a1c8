//! Status identifiers.
//!
//! A status is drawn from an open set: a handful of well-known names that most
//! screens share, plus any caller-supplied string.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The tag of a [`Snapshot`](crate::Snapshot).
///
/// Well-known names always normalise to their dedicated member, so
/// `Status::from("pending")` is [`Status::Pending`] and never
/// `Status::Custom("pending")`. Equality, ordering and hashing compare the
/// identifier string, so a hand-built `Custom("pending")` still equals
/// [`Status::Pending`].
///
/// # Example
/// ```
/// use ui_state::Status;
///
/// assert_eq!(Status::from("not-found"), Status::NotFound);
/// assert_eq!(Status::from("loading-data").as_str(), "loading-data");
/// assert!(!Status::from("loading-data").is_well_known());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// `"pending"`
    Pending,
    /// `"not-found"`
    NotFound,
    /// `"error"`
    Error,
    /// `"empty-search"`
    EmptySearch,
    /// `"empty"`
    Empty,
    /// `"default"`
    Default,
    /// Any other identifier.
    Custom(String),
}

impl Status {
    /// Identifiers of the well-known statuses, in declaration order.
    pub const WELL_KNOWN: [&'static str; 6] = [
        "pending",
        "not-found",
        "error",
        "empty-search",
        "empty",
        "default",
    ];

    /// The identifier string.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::NotFound => "not-found",
            Status::Error => "error",
            Status::EmptySearch => "empty-search",
            Status::Empty => "empty",
            Status::Default => "default",
            Status::Custom(name) => name,
        }
    }

    /// Whether this is one of [`Status::WELL_KNOWN`].
    pub fn is_well_known(&self) -> bool {
        Status::well_known(self.as_str()).is_some()
    }

    fn well_known(name: &str) -> Option<Self> {
        Some(match name {
            "pending" => Status::Pending,
            "not-found" => Status::NotFound,
            "error" => Status::Error,
            "empty-search" => Status::EmptySearch,
            "empty" => Status::Empty,
            "default" => Status::Default,
            _ => return None,
        })
    }
}

impl From<&str> for Status {
    fn from(name: &str) -> Self {
        Status::well_known(name).unwrap_or_else(|| Status::Custom(name.to_string()))
    }
}

impl From<String> for Status {
    fn from(name: String) -> Self {
        Status::well_known(&name).unwrap_or(Status::Custom(name))
    }
}

impl From<&Status> for Status {
    fn from(status: &Status) -> Self {
        status.clone()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Status {}

impl Hash for Status {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialEq<str> for Status {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Status {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a list of statuses as `a, b, c` for diagnostics.
pub(crate) fn join(statuses: &[Status]) -> String {
    statuses
        .iter()
        .map(Status::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
