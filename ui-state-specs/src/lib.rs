#![doc(
    html_logo_url = "https://raw.githubusercontent.com/BearStudio/ui-state/main/assets/ui-state.svg",
    issue_tracker_base_url = "https://github.com/BearStudio/ui-state/issues/"
)]

//! Declarative fixture harness for ui-state.
//!
//! Each `.toml` fixture describes a snapshot, a list of `is`/`when` probes
//! and match branches, and the expected output. The harness builds the
//! snapshot with the dynamic rendition, runs the chain, and reports any
//! difference.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types, TOML parsing and `{field}` templates
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Runs fixtures and compares results
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{
    parse_fixture, render_template, Branch, ChainExpectation, IsProbe, SelectSpec, SnapshotSpec,
    Terminal, UiFixture, WhenProbe,
};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{build_view, check_fixture, run_fixture, ChainRun, Mismatch, RunResult};
