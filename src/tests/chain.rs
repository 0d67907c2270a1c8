use std::cell::Cell;

use crate::{
    create_snapshot, Coverage, CoveragePolicy, MatchConfig, Payload, SnapshotView, Status,
    UiStateError,
};

fn snapshot(status: &str) -> SnapshotView {
    create_snapshot(|set| set.set(status)).with_config(MatchConfig::silent())
}

fn declared(status: &str) -> SnapshotView {
    snapshot(status).with_variants(["pending", "error", "default"])
}

#[test]
fn first_match_wins() {
    let calls = Cell::new((0, 0, 0));
    let ui = snapshot("pending");

    let output = ui
        .match_("pending", |_| {
            let (a, b, c) = calls.get();
            calls.set((a + 1, b, c));
            "first"
        })
        .match_("pending", |_| {
            let (a, b, c) = calls.get();
            calls.set((a, b + 1, c));
            "second"
        })
        .match_("default", |_| {
            let (a, b, c) = calls.get();
            calls.set((a, b, c + 1));
            "third"
        })
        .non_exhaustive();

    assert_eq!(output, Some("first"));
    assert_eq!(calls.get(), (1, 0, 0));
}

#[test]
fn undeclared_duplicates_keep_first_match_under_default_config() {
    let calls = Cell::new((0, 0, 0));
    let ui = create_snapshot(|set| set.set("pending"));

    let output = ui
        .match_("pending", |_| {
            let (a, b, c) = calls.get();
            calls.set((a + 1, b, c));
            "first"
        })
        .match_("pending", |_| {
            let (a, b, c) = calls.get();
            calls.set((a, b + 1, c));
            "second"
        })
        .match_("default", |_| {
            let (a, b, c) = calls.get();
            calls.set((a, b, c + 1));
            "third"
        })
        .non_exhaustive();

    assert_eq!(output, Some("first"));
    assert_eq!(calls.get(), (1, 0, 0));
}

#[test]
fn undeclared_overlapping_list_is_not_a_violation() {
    let calls = Cell::new(0);
    let ui = snapshot("error");
    let output = ui
        .match_("error", |_| {
            calls.set(calls.get() + 1);
            "first"
        })
        .match_(["error", "pending"], |_| {
            calls.set(calls.get() + 1);
            "second"
        })
        .try_non_exhaustive();

    assert_eq!(output.unwrap(), Some("first"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn custom_spelling_of_well_known_status_matches() {
    let ui = create_snapshot(|set| set.set(Status::Custom("pending".to_string())));
    assert!(ui.is("pending"));
    assert!(ui.is(Status::Pending));
    assert_eq!(ui.match_("pending", |_| "Loading").non_exhaustive(), Some("Loading"));
}

#[test]
fn handlers_wait_for_terminal() {
    let calls = Cell::new(0);
    let ui = snapshot("pending");

    let chain = ui.match_("pending", |_| {
        calls.set(calls.get() + 1);
        "Loading"
    });
    assert!(chain.is_resolved());
    assert_eq!(calls.get(), 0);

    assert_eq!(chain.non_exhaustive(), Some("Loading"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn dropped_chain_never_calls_handler() {
    let calls = Cell::new(0);
    let ui = snapshot("pending");
    drop(ui.match_("pending", |_| calls.set(calls.get() + 1)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn no_match_returns_none() {
    let ui = snapshot("default");
    let output = ui
        .match_("pending", |_| "Loading")
        .match_("error", |_| "Error")
        .match_(["empty", "not-found"], |_| "Nothing")
        .non_exhaustive();
    assert_eq!(output, None);
}

#[test]
fn terminals_produce_identical_output() {
    for status in ["pending", "error", "default", "empty"] {
        let ui = snapshot(status);
        let chain = || {
            ui.match_("pending", |_| "Loading".to_string())
                .match_(["error", "not-found"], |_| "Error".to_string())
                .match_("default", |_| "Content".to_string())
        };
        assert_eq!(chain().exhaustive(), chain().non_exhaustive(), "status {}", status);
    }
}

#[test]
fn list_selector_matches_members_only() {
    let matched = snapshot("not-found")
        .match_(["error", "not-found"], |_| "Something went wrong")
        .non_exhaustive();
    assert_eq!(matched, Some("Something went wrong"));

    let missed = snapshot("pending")
        .match_(["error", "not-found"], |_| "Something went wrong")
        .non_exhaustive();
    assert_eq!(missed, None);
}

#[test]
fn empty_list_selector_never_matches() {
    let calls = Cell::new(0);
    let ui = snapshot("pending");
    let empty: Vec<&str> = Vec::new();
    let output = ui
        .match_(empty, |_| {
            calls.set(calls.get() + 1);
            "never"
        })
        .non_exhaustive();
    assert_eq!(output, None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn handler_receives_payload() {
    let ui = create_snapshot(|set| {
        set.set_with(
            "error",
            Payload::new().with("message", "Timeout").with("code", 504),
        )
    });
    let output = ui
        .match_("error", |data| {
            format!(
                "{} ({})",
                data["message"].as_str().unwrap_or_default(),
                data["code"]
            )
        })
        .non_exhaustive();
    assert_eq!(output.as_deref(), Some("Timeout (504)"));
}

#[test]
fn chain_is_lazy_about_later_branches_after_resolution() {
    let ui = snapshot("error");
    let chain = ui.match_("error", |_| 1).match_("pending", |_| 2);
    assert!(chain.is_resolved());
    assert_eq!(chain.non_exhaustive(), Some(1));
}

#[test]
fn coverage_tracks_attachment_order() {
    let ui = declared("pending");
    let chain = ui.match_("default", |_| ()).match_(["pending"], |_| ());
    assert_eq!(
        chain.coverage(),
        Coverage {
            covered: vec![Status::Default, Status::Pending],
            missing: vec![Status::Error],
        }
    );
    let _ = chain.non_exhaustive();
}

#[test]
fn coverage_without_universe_is_complete() {
    let ui = snapshot("pending");
    let chain = ui.match_("pending", |_| ());
    assert!(chain.coverage().is_complete());
    assert_eq!(chain.try_exhaustive().unwrap(), Some(()));
}

#[test]
fn exhaustive_reports_missing_statuses() {
    let ui = declared("pending");
    let err = ui
        .match_("pending", |_| "Loading")
        .try_exhaustive()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"`exhaustive()` requires every status to be matched; missing: error, default"
    );
}

#[test]
fn non_exhaustive_ignores_missing_statuses() {
    let ui = declared("pending");
    let output = ui.match_("pending", |_| "Loading").try_non_exhaustive();
    assert_eq!(output.unwrap(), Some("Loading"));
}

#[test]
fn full_coverage_passes() {
    let ui = declared("error");
    let output = ui
        .match_("pending", |_| "Loading")
        .match_(["error", "default"], |_| "Done")
        .try_exhaustive();
    assert_eq!(output.unwrap(), Some("Done"));
}

#[test]
fn duplicate_selection_is_reported_and_inert() {
    let calls = Cell::new(0);
    let ui = declared("pending");
    let result = ui
        .match_("error", |_| "Error")
        .match_("error", |_| {
            calls.set(calls.get() + 1);
            "Again"
        })
        .try_non_exhaustive();

    match result {
        Err(UiStateError::AlreadyMatched { status }) => assert_eq!(status, Status::Error),
        other => panic!("expected AlreadyMatched, got {:?}", other),
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn try_terminal_error_skips_matched_handler() {
    let calls = Cell::new(0);
    let ui = declared("pending");
    let result = ui
        .match_("pending", |_| calls.set(calls.get() + 1))
        .match_("pending", |_| ())
        .try_non_exhaustive();
    assert!(result.is_err());
    assert_eq!(calls.get(), 0);
}

#[test]
fn match_after_full_coverage_is_reported() {
    let ui = declared("default");
    let err = ui
        .match_(["pending", "error"], |_| "Busy")
        .match_("default", |_| "Content")
        .match_("default", |_| "Again")
        .try_exhaustive()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"all statuses are already matched; `default` has nothing left to select"
    );
}

#[test]
fn undeclared_selector_is_reported() {
    let ui = declared("pending");
    let err = ui
        .match_("pending", |_| ())
        .match_("loading", |_| ())
        .try_non_exhaustive()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"`loading` is not a status of this snapshot (declared: pending, error, default)"
    );
}

#[test]
fn first_violation_wins_over_missing() {
    let ui = declared("pending");
    let err = ui
        .match_("pending", |_| ())
        .match_("pending", |_| ())
        .try_exhaustive()
        .unwrap_err();
    assert!(matches!(err, UiStateError::AlreadyMatched { .. }));
}

#[test]
fn violations_do_not_change_output() {
    let ui = declared("pending");
    let output = ui
        .match_("pending", |_| "Loading")
        .match_("pending", |_| "Twice")
        .exhaustive();
    assert_eq!(output, Some("Loading"));
}

#[test]
#[should_panic(expected = "missing: error, default")]
fn strict_policy_panics_on_missing() {
    let ui = declared("pending").with_config(MatchConfig::strict());
    let _ = ui.match_("pending", |_| ()).exhaustive();
}

#[test]
fn warn_policy_logs_and_returns_output() {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let ui = declared("pending").with_config(MatchConfig::new().with_policy(CoveragePolicy::Warn));
    let output = ui.match_("pending", |_| "Loading").exhaustive();
    assert_eq!(output, Some("Loading"));
}

#[test]
fn chain_debug_output() {
    let ui = declared("pending");
    let chain = ui.match_("pending", |_| ()).match_("pending", |_| ());
    insta::assert_snapshot!(
        format!("{:?}", chain),
        @r###"MatchChain { status: Pending, resolution: Resolved(..), covered: [Pending], violations: 1 }"###
    );
    let _ = chain.non_exhaustive();
}
