//! Runs a fixture through the dynamic rendition and compares the results.
//!
//! Fixtures are evaluated with [`CoveragePolicy::Ignore`] and the `try_*`
//! terminals, so coverage and selector violations come back as values
//! instead of panics or log lines.

use std::cell::Cell;

use ui_state::{create_snapshot, CoveragePolicy, MatchChain, MatchConfig, SnapshotView};

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{render_template, Terminal, UiFixture};

/// What a fixture produced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunResult {
    /// Answers of the `is` probes, in order.
    pub is: Vec<bool>,
    /// Outputs of the `when` probes, in order.
    pub when: Vec<Option<String>>,
    /// Chain result, when the fixture has an `[expect]` table.
    pub chain: Option<ChainRun>,
}

/// What a match chain produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainRun {
    pub terminal: Terminal,
    /// Output of the terminal; `None` when no branch matched or on error.
    pub output: Option<String>,
    /// Number of handler invocations across all branches.
    pub calls: usize,
    /// Coverage or selector error returned by the terminal.
    pub error: Option<String>,
}

/// A single difference between a fixture's expectations and its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Which check failed (`is[0]`, `when[1]`, `output`, `calls`, `error`).
    pub check: String,
    pub expected: String,
    pub actual: String,
}

/// Build the snapshot a fixture describes.
pub fn build_view(fixture: &UiFixture) -> SnapshotView {
    let spec = &fixture.snapshot;
    let view = create_snapshot(|set| set.set_with(spec.status.as_str(), spec.payload.clone()))
        .with_config(MatchConfig::new().with_policy(CoveragePolicy::Ignore));
    match &spec.variants {
        Some(variants) => view.with_variants(variants.iter().map(String::as_str)),
        None => view,
    }
}

/// Evaluate every probe and the match chain of a fixture.
pub fn run_fixture(fixture: &UiFixture) -> SpecResult<RunResult> {
    let view = build_view(fixture);

    let is = fixture
        .is
        .iter()
        .map(|probe| view.is(probe.status.as_str()))
        .collect();

    let when = fixture
        .when
        .iter()
        .map(|probe| {
            view.when(probe.select.to_selector(), |payload| {
                render_template(&probe.render, payload)
            })
            .transpose()
        })
        .collect::<SpecResult<Vec<_>>>()?;

    let chain = match &fixture.expect {
        Some(expect) => Some(run_chain(fixture, &view, expect.terminal)?),
        None => None,
    };

    Ok(RunResult { is, when, chain })
}

fn run_chain(fixture: &UiFixture, view: &SnapshotView, terminal: Terminal) -> SpecResult<ChainRun> {
    let calls = Cell::new(0);

    let mut branches = fixture.branches.iter();
    let first = branches.next().ok_or_else(|| SpecError::Fixture {
        message: "an `[expect]` table needs at least one `[[branch]]`".to_string(),
    })?;

    let handler = |render: &str| {
        let render = render.to_string();
        let calls = &calls;
        move |payload: &ui_state::Payload| {
            calls.set(calls.get() + 1);
            render_template(&render, payload)
        }
    };

    let mut chain: MatchChain<'_, SpecResult<String>> =
        view.match_(first.select.to_selector(), handler(first.render.as_str()));
    for branch in branches {
        chain = chain.match_(branch.select.to_selector(), handler(branch.render.as_str()));
    }

    let result = match terminal {
        Terminal::Exhaustive => chain.try_exhaustive(),
        Terminal::NonExhaustive => chain.try_non_exhaustive(),
    };

    let (output, error) = match result {
        Ok(output) => (output.transpose()?, None),
        Err(error) => (None, Some(error.to_string())),
    };

    Ok(ChainRun {
        terminal,
        output,
        calls: calls.get(),
        error,
    })
}

/// Compare a run against the fixture's expectations.
pub fn check_fixture(fixture: &UiFixture, result: &RunResult) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for (idx, (probe, actual)) in fixture.is.iter().zip(&result.is).enumerate() {
        if probe.expect != *actual {
            mismatches.push(Mismatch {
                check: format!("is[{}]", idx),
                expected: probe.expect.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    for (idx, (probe, actual)) in fixture.when.iter().zip(&result.when).enumerate() {
        if &probe.expect != actual {
            mismatches.push(Mismatch {
                check: format!("when[{}]", idx),
                expected: describe(probe.expect.as_deref()),
                actual: describe(actual.as_deref()),
            });
        }
    }

    if let (Some(expect), Some(chain)) = (&fixture.expect, &result.chain) {
        if expect.output != chain.output {
            mismatches.push(Mismatch {
                check: "output".to_string(),
                expected: describe(expect.output.as_deref()),
                actual: describe(chain.output.as_deref()),
            });
        }
        if expect.expected_calls() != chain.calls {
            mismatches.push(Mismatch {
                check: "calls".to_string(),
                expected: expect.expected_calls().to_string(),
                actual: chain.calls.to_string(),
            });
        }
        let error_matches = match (&expect.error, &chain.error) {
            (None, None) => true,
            (Some(expected), Some(actual)) => actual.contains(expected.as_str()),
            _ => false,
        };
        if !error_matches {
            mismatches.push(Mismatch {
                check: "error".to_string(),
                expected: describe(expect.error.as_deref()),
                actual: describe(chain.error.as_deref()),
            });
        }
    }

    mismatches
}

fn describe(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("{:?}", text),
        None => "none".to_string(),
    }
}
