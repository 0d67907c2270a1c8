#![doc(
    html_logo_url = "https://raw.githubusercontent.com/BearStudio/ui-state/main/assets/ui-state.svg",
    issue_tracker_base_url = "https://github.com/BearStudio/ui-state/issues/"
)]

//! Declarative UI state snapshots.
//!
//! A snapshot is one status tag plus the fields that go with it. Rendering
//! code asks it three kinds of questions: is it in status X ([`is`]), give me
//! something only when it is in X ([`when`]), and pick exactly one output by
//! status ([`match_`], ending with `exhaustive()` or `non_exhaustive()`).
//!
//! ## Typed Snapshots
//!
//! - [`ui_state!`] - Declares a state enum with one marker per status
//! - [`UiState`] - The typed snapshot, built with [`UiState::build`] or [`UiState::new`]
//! - [`TypedMatch`] - Match chain whose type tracks unmatched variants, so
//!   `exhaustive()` only compiles once every status has a branch
//!
//! ## Dynamic Snapshots
//!
//! - [`create_snapshot`] - Builds a [`SnapshotView`] from a [`Setter`]
//! - [`Snapshot`] - A [`Status`] plus a [`Payload`] record, serializable with serde
//! - [`MatchChain`] - Match chain that checks coverage at runtime
//! - [`MatchConfig`] / [`CoveragePolicy`] - What to do when coverage is violated
//!
//! ## Lazy Matching
//!
//! In both renditions the first matching branch wins, and its handler is
//! called at most once, when the chain is terminated. Handlers of later or
//! non-matching branches are never called.
//!
//! ## Example
//!
//! ```
//! use ui_state::{create_snapshot, Payload, Status};
//!
//! let ui = create_snapshot(|s| s.set_with("default", Payload::new().with("total", 3)))
//!     .with_variants(["pending", "error", "default"]);
//!
//! let label = ui
//!     .match_("pending", |_| "Loading".to_string())
//!     .match_("error", |_| "Error".to_string())
//!     .match_("default", |p| format!("Total: {}", p["total"]))
//!     .exhaustive();
//!
//! assert_eq!(label.as_deref(), Some("Total: 3"));
//! assert!(ui.is(Status::Default));
//! ```
//!
//! [`is`]: SnapshotView::is
//! [`when`]: SnapshotView::when
//! [`match_`]: SnapshotView::match_

#[macro_use]
mod macros;

mod chain;
mod config;
mod errors;
mod payload;
mod resolution;
mod selector;
mod snapshot;
mod status;
mod typed;
mod view;

pub use chain::{Coverage, MatchChain};
pub use config::{CoveragePolicy, MatchConfig};
pub use errors::{UiStateError, UiStateResult};
pub use payload::Payload;
pub use selector::Selector;
pub use snapshot::{create_snapshot, Setter, Snapshot};
pub use status::Status;
pub use view::SnapshotView;

// Typed rendition
pub use typed::chain::TypedMatch;
pub use typed::hlist::{Exhausted, HCons, HNil, Here, Names, Remove, RemoveAll, There};
pub use typed::state::{Set, UiState};
pub use typed::variant::{Selection, UiStatus, Variant};
