//! The typed match chain.
//!
//! `TypedMatch<'a, S, R, T>` tracks the variants of `S` still unmatched in its
//! type parameter `R`. Every branch shrinks `R`, and `exhaustive()` is only
//! callable once `R` is empty:
//!
//! ```text
//!   UiState<S>::match_(A)     -> TypedMatch<S, [B, C], T>
//!           .match_any((B, C)) -> TypedMatch<S, [], T>
//!           .exhaustive()      -> Option<T>
//! ```
//!
//! Stopping early compiles with `non_exhaustive()` only:
//!
//! ```compile_fail
//! use ui_state::{ui_state, UiState};
//!
//! ui_state! {
//!     pub enum Fetch => fetch {
//!         Pending = "pending",
//!         Loaded(u32) = "default",
//!     }
//! }
//!
//! let ui = UiState::new(Fetch::Pending(()));
//! // ERROR: `exhaustive()` requires every variant to be matched
//! let _ = ui.match_(fetch::Pending, |_| "Loading").exhaustive();
//! ```
//!
//! A variant can only be selected once per chain:
//!
//! ```compile_fail
//! use ui_state::{ui_state, UiState};
//!
//! ui_state! {
//!     pub enum Fetch => fetch {
//!         Pending = "pending",
//!         Loaded(u32) = "default",
//!     }
//! }
//!
//! let ui = UiState::new(Fetch::Pending(()));
//! // ERROR: `fetch::Pending` is not among the variants left to match
//! let _ = ui
//!     .match_(fetch::Pending, |_| "First")
//!     .match_(fetch::Pending, |_| "Second")
//!     .non_exhaustive();
//! ```
//!
//! Nothing can be matched once every variant is covered:
//!
//! ```compile_fail
//! use ui_state::{ui_state, UiState};
//!
//! ui_state! {
//!     pub enum Fetch => fetch {
//!         Pending = "pending",
//!         Loaded(u32) = "default",
//!     }
//! }
//!
//! let ui = UiState::new(Fetch::Pending(()));
//! // ERROR: nothing is left to match
//! let _ = ui
//!     .match_any((fetch::Pending, fetch::Loaded), |_| "Any")
//!     .match_(fetch::Loaded, |_| "Again")
//!     .exhaustive();
//! ```
//!
//! List selections are checked the same way, duplicates included:
//!
//! ```compile_fail
//! use ui_state::{ui_state, UiState};
//!
//! ui_state! {
//!     pub enum Fetch => fetch {
//!         Pending = "pending",
//!         Loaded(u32) = "default",
//!     }
//! }
//!
//! let ui = UiState::new(Fetch::Pending(()));
//! let _ = ui.match_any((fetch::Pending, fetch::Pending), |_| "Twice").non_exhaustive();
//! ```

use std::marker::PhantomData;

use crate::resolution::Resolution;
use crate::typed::hlist::{Exhausted, Names, Remove, RemoveAll};
use crate::typed::variant::{Selection, UiStatus, Variant};

/// A linear chain of branches over a typed state, with the unmatched
/// variants `R` tracked in its type.
#[must_use = "a match chain produces nothing until `exhaustive()` or `non_exhaustive()` is called"]
pub struct TypedMatch<'a, S, R, T> {
    state: &'a S,
    resolution: Resolution<'a, T>,
    _remaining: PhantomData<R>,
}

impl<'a, S, R, T> TypedMatch<'a, S, R, T>
where
    S: UiStatus,
{
    pub(crate) fn new(state: &'a S) -> Self {
        Self {
            state,
            resolution: Resolution::Unresolved,
            _remaining: PhantomData,
        }
    }

    /// Attach a branch for one variant.
    ///
    /// `handler` receives that variant's payload. It becomes the chain's
    /// pending output only if no earlier branch matched and the state is
    /// this variant; otherwise it is dropped without being called.
    pub fn match_<V, I, F>(
        self,
        _variant: V,
        handler: F,
    ) -> TypedMatch<'a, S, <R as Remove<V, I>>::Rest, T>
    where
        V: Variant<S>,
        V::Payload: 'a,
        R: Remove<V, I>,
        F: FnOnce(&V::Payload) -> T + 'a,
    {
        let state = self.state;
        let resolution = match self.resolution {
            Resolution::Unresolved => match V::payload(state) {
                Some(payload) => {
                    tracing::trace!(status = V::STATUS, "typed match branch resolved");
                    Resolution::resolved(move || handler(payload))
                }
                None => Resolution::Unresolved,
            },
            resolved => resolved,
        };
        TypedMatch {
            state,
            resolution,
            _remaining: PhantomData,
        }
    }

    /// Attach a branch for a tuple of variants.
    ///
    /// The handler receives the whole state, since the selected variants
    /// need not share a payload type. `()` selects nothing and never matches.
    pub fn match_any<L, I, F>(
        self,
        _selection: L,
        handler: F,
    ) -> TypedMatch<'a, S, <R as RemoveAll<L::List, I>>::Rest, T>
    where
        L: Selection<S>,
        R: RemoveAll<L::List, I>,
        F: FnOnce(&S) -> T + 'a,
    {
        let state = self.state;
        let resolution = match self.resolution {
            Resolution::Unresolved if L::contains(state) => {
                tracing::trace!(statuses = ?L::statuses(), "typed match branch resolved");
                Resolution::resolved(move || handler(state))
            }
            other => other,
        };
        TypedMatch {
            state,
            resolution,
            _remaining: PhantomData,
        }
    }

    /// Whether some branch has matched.
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_resolved()
    }

    /// Produce the matched output, or `None` when no branch matched.
    ///
    /// Callable at any point of the chain.
    pub fn non_exhaustive(self) -> Option<T> {
        self.resolution.force()
    }

    /// Produce the matched output once every variant has a branch.
    ///
    /// Same runtime result as [`TypedMatch::non_exhaustive`]; the difference
    /// is that this only compiles when no variant is left unmatched.
    pub fn exhaustive(self) -> Option<T>
    where
        R: Exhausted,
    {
        self.resolution.force()
    }
}

impl<S, R, T> std::fmt::Debug for TypedMatch<'_, S, R, T>
where
    S: UiStatus,
    R: Names,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedMatch")
            .field("status", &self.state.status())
            .field("resolution", &self.resolution)
            .field("remaining", &R::names())
            .finish()
    }
}
