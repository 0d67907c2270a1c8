//! Core types for `.toml` snapshot fixtures.
//!
//! A fixture describes one snapshot, the probes and branches to run against
//! it, and what they are expected to produce:
//!
//! ```toml
//! title = "Default status renders the total"
//!
//! [snapshot]
//! status = "default"
//! payload = { total = 3 }
//! variants = ["pending", "error", "not-found", "default"]
//!
//! [[branch]]
//! select = "pending"
//! render = "Loading..."
//!
//! [[branch]]
//! select = ["error", "not-found"]
//! render = "Something went wrong"
//!
//! [[branch]]
//! select = "default"
//! render = "Total: {total}"
//!
//! [expect]
//! terminal = "exhaustive"
//! output = "Total: 3"
//! ```

use serde::{Deserialize, Serialize};
use ui_state::{Payload, Selector, Status};

use crate::errors::SpecResult;

/// A parsed fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiFixture {
    /// Optional human readable title.
    #[serde(default)]
    pub title: Option<String>,
    /// The snapshot under test.
    pub snapshot: SnapshotSpec,
    /// `is` probes, checked in order.
    #[serde(default)]
    pub is: Vec<IsProbe>,
    /// `when` probes, checked in order.
    #[serde(default)]
    pub when: Vec<WhenProbe>,
    /// Match chain branches, attached in order.
    #[serde(default, rename = "branch")]
    pub branches: Vec<Branch>,
    /// Expected result of the match chain. No chain is built without it.
    #[serde(default)]
    pub expect: Option<ChainExpectation>,
}

/// The status and payload a snapshot is built with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotSpec {
    pub status: String,
    #[serde(default)]
    pub payload: Payload,
    /// Declared variant universe; coverage is unchecked without it.
    #[serde(default)]
    pub variants: Option<Vec<String>>,
}

/// A status or list of statuses, as written in a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectSpec {
    One(String),
    Any(Vec<String>),
}

impl SelectSpec {
    pub fn to_selector(&self) -> Selector {
        match self {
            SelectSpec::One(status) => Selector::from(status.as_str()),
            SelectSpec::Any(statuses) => Selector::from(statuses.as_slice()),
        }
    }
}

impl std::fmt::Display for SelectSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectSpec::One(status) => write!(f, "{:?}", status),
            SelectSpec::Any(statuses) => write!(f, "{:?}", statuses),
        }
    }
}

/// `is(status)` with its expected answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsProbe {
    pub status: String,
    pub expect: bool,
}

/// `when(select, render)` with its expected output; absent means `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhenProbe {
    pub select: SelectSpec,
    pub render: String,
    #[serde(default)]
    pub expect: Option<String>,
}

/// One `match_(select, render)` branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Branch {
    pub select: SelectSpec,
    pub render: String,
}

/// Which terminal ends the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Terminal {
    Exhaustive,
    NonExhaustive,
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terminal::Exhaustive => f.write_str("exhaustive"),
            Terminal::NonExhaustive => f.write_str("non-exhaustive"),
        }
    }
}

/// Expected result of the match chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainExpectation {
    pub terminal: Terminal,
    /// Expected output; absent means the chain produces `None`.
    #[serde(default)]
    pub output: Option<String>,
    /// Expected handler invocations. Defaults to 1 when an output is
    /// expected and 0 otherwise.
    #[serde(default)]
    pub calls: Option<usize>,
    /// Substring of the expected coverage or selector error.
    #[serde(default)]
    pub error: Option<String>,
}

impl ChainExpectation {
    pub fn expected_calls(&self) -> usize {
        self.calls
            .unwrap_or(if self.output.is_some() { 1 } else { 0 })
    }
}

impl UiFixture {
    /// The snapshot's status.
    pub fn status(&self) -> Status {
        Status::from(self.snapshot.status.as_str())
    }
}

/// Parse a fixture from TOML source.
pub fn parse_fixture(source: &str) -> SpecResult<UiFixture> {
    Ok(toml::from_str(source)?)
}

/// Interpolate `{field}` placeholders with payload values.
///
/// String fields are inserted bare, other values as JSON. `{{` and `}}`
/// produce literal braces.
pub fn render_template(template: &str, payload: &Payload) -> SpecResult<String> {
    let template_error = |message: String| crate::SpecError::Template {
        template: template.to_string(),
        message,
    };

    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => field.push(c),
                        None => return Err(template_error("unclosed `{`".to_string())),
                    }
                }
                match payload.get(field.trim()) {
                    Some(serde_json::Value::String(text)) => output.push_str(text),
                    Some(value) => output.push_str(&value.to_string()),
                    None => return Err(template_error(format!("no payload field `{}`", field))),
                }
            }
            '}' => return Err(template_error("unmatched `}`".to_string())),
            c => output.push(c),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_fixture() {
        let fixture = parse_fixture(
            r#"
[snapshot]
status = "pending"
"#,
        )
        .unwrap();
        assert_eq!(fixture.status(), Status::Pending);
        assert!(fixture.snapshot.payload.is_empty());
        assert!(fixture.branches.is_empty());
        assert!(fixture.expect.is_none());
    }

    #[test]
    fn test_parse_select_forms() {
        let fixture = parse_fixture(
            r#"
[snapshot]
status = "not-found"

[[branch]]
select = "pending"
render = "Loading"

[[branch]]
select = ["error", "not-found"]
render = "Oops"

[[branch]]
select = []
render = "Never"
"#,
        )
        .unwrap();
        let selects: Vec<_> = fixture.branches.iter().map(|b| b.select.clone()).collect();
        assert_eq!(
            selects,
            vec![
                SelectSpec::One("pending".to_string()),
                SelectSpec::Any(vec!["error".to_string(), "not-found".to_string()]),
                SelectSpec::Any(vec![]),
            ]
        );
        assert!(fixture.branches[1].select.to_selector().matches(&Status::NotFound));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = parse_fixture(
            r#"
[snapshot]
status = "pending"
colour = "red"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `colour`"));
    }

    #[test]
    fn test_expected_calls_default() {
        let expectation = ChainExpectation {
            terminal: Terminal::NonExhaustive,
            output: None,
            calls: None,
            error: None,
        };
        assert_eq!(expectation.expected_calls(), 0);
        let expectation = ChainExpectation {
            output: Some("x".to_string()),
            ..expectation
        };
        assert_eq!(expectation.expected_calls(), 1);
    }

    #[test]
    fn test_render_template() {
        let payload = Payload::new()
            .with("total", 3)
            .with("label", "items")
            .with("user", serde_json::json!({ "name": "John" }));
        assert_eq!(
            render_template("Total: {total} {label}", &payload).unwrap(),
            "Total: 3 items"
        );
        assert_eq!(
            render_template("{{literal}} {user}", &payload).unwrap(),
            r#"{literal} {"name":"John"}"#
        );
    }

    #[test]
    fn test_render_template_errors() {
        let payload = Payload::new();
        insta::assert_snapshot!(
            render_template("Total: {total}", &payload).unwrap_err().to_string(),
            @"template `Total: {total}`: no payload field `total`"
        );
        assert!(render_template("Total: {total", &payload).is_err());
        assert!(render_template("Total }", &payload).is_err());
    }
}
