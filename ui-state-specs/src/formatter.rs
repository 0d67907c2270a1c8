//! Failure and summary formatting.

use std::fmt::Write;

use crate::fixture::UiFixture;
use crate::runner::Mismatch;

/// Format a failed check with the fixture's snapshot and chain as context.
pub fn format_failure(fixture_name: &str, fixture: &UiFixture, mismatch: &Mismatch) -> String {
    let mut output = String::new();

    writeln!(output, "\nFAIL: {} [{}]", fixture_name, mismatch.check).unwrap();
    if let Some(title) = &fixture.title {
        writeln!(output, "  {}", title).unwrap();
    }
    writeln!(output).unwrap();

    let snapshot = &fixture.snapshot;
    write!(output, "  snapshot: {}", snapshot.status).unwrap();
    if !snapshot.payload.is_empty() {
        let fields: Vec<_> = snapshot
            .payload
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        write!(output, " {{ {} }}", fields.join(", ")).unwrap();
    }
    writeln!(output).unwrap();
    if let Some(variants) = &snapshot.variants {
        writeln!(output, "  variants: {}", variants.join(", ")).unwrap();
    }

    if mismatch.check.starts_with("is[") || mismatch.check.starts_with("when[") {
        writeln!(output).unwrap();
    } else {
        for (idx, branch) in fixture.branches.iter().enumerate() {
            writeln!(output, "  [{}] match_({}) -> {:?}", idx, branch.select, branch.render).unwrap();
        }
        if let Some(expect) = &fixture.expect {
            writeln!(output, "  terminal: {}", expect.terminal).unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(
        output,
        "    \u{2717} {}: expected {}, found {}",
        mismatch.check, mismatch.expected, mismatch.actual
    )
    .unwrap();

    if let Some(hint) = generate_hint(fixture, mismatch) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of all results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(fixture: &UiFixture, mismatch: &Mismatch) -> Option<String> {
    match mismatch.check.as_str() {
        "calls" if mismatch.actual.parse::<usize>().map_or(false, |calls| calls > 1) => Some(
            "more than one handler ran; only the first matching branch may execute".to_string(),
        ),
        "error" if fixture.snapshot.variants.is_none() => Some(
            "coverage is only checked against declared `variants`".to_string(),
        ),
        "output" if mismatch.actual == "none" => Some(format!(
            "no branch selects `{}`",
            fixture.snapshot.status
        )),
        _ => None,
    }
}
