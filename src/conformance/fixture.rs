//! Rule fixtures embedded at compile time.
//!
//! Each rule has a `fixtures/<rule-id>.yml` file:
//!
//! ```yaml
//! rule_id: no-heading-punctuation
//! tests:
//!   'true':                 # JSON-serialized configuration
//!     ok.md:
//!       input: "# Mercury\n"
//!       output: []
//!     not-ok.md:
//!       input: "# Mercury.\n"
//!       output:
//!         - "1:1-1:11: Don’t add a trailing `.` to headings"
//! ```
//!
//! Fixture `config` holds file settings plus an optional `positionless`
//! flag for rules that do not depend on tree positions.

use std::collections::BTreeMap;

use include_dir::{include_dir, Dir};
use serde::Deserialize;

use crate::error::{LintError, Result};
use crate::lint::Settings;

/// Embedded fixtures directory.
static FIXTURES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/fixtures");

/// Per-fixture configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureConfig {
    /// Only check with positions.
    #[serde(default)]
    pub positionless: bool,

    /// Remaining keys become file settings.
    #[serde(flatten)]
    pub settings: Settings,
}

/// One input document and the messages it should produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub config: FixtureConfig,
    #[serde(default)]
    pub output: Vec<String>,
}

/// Static metadata for a rule: its fixtures keyed by configuration, then name.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDescriptor {
    pub rule_id: String,
    pub tests: BTreeMap<String, BTreeMap<String, Fixture>>,
}

/// Load the embedded descriptor for `rule_id`.
///
/// # Errors
///
/// Returns `FixtureParseError` when the file is missing, unreadable, or
/// declares a different rule id.
pub fn load_descriptor(rule_id: &str) -> Result<RuleDescriptor> {
    let fixture_error = |message: String| LintError::FixtureParseError {
        rule_id: rule_id.to_string(),
        message,
    };

    let file = FIXTURES_DIR
        .get_file(format!("{}.yml", rule_id))
        .ok_or_else(|| fixture_error("no fixture file".to_string()))?;
    let content = file
        .contents_utf8()
        .ok_or_else(|| fixture_error("Invalid UTF-8".to_string()))?;

    let descriptor: RuleDescriptor =
        serde_yaml::from_str(content).map_err(|e| fixture_error(e.to_string()))?;

    if descriptor.rule_id != rule_id {
        return Err(fixture_error(format!(
            "declares rule `{}`",
            descriptor.rule_id
        )));
    }

    Ok(descriptor)
}

/// Expand whitespace markers: `»` is a tab and `·` is a space.
pub fn preprocess(value: &str) -> String {
    value.replace('»', "\t").replace('·', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocess_expands_markers() {
        assert_eq!(preprocess("»a··b"), "\ta  b");
        assert_eq!(preprocess("plain"), "plain");
    }

    #[test]
    fn loads_descriptor_by_rule_id() {
        let descriptor = load_descriptor("final-newline").unwrap();
        assert_eq!(descriptor.rule_id, "final-newline");
        let fixtures = &descriptor.tests["true"];
        assert!(fixtures["not-ok.md"].config.positionless);
        assert_eq!(
            fixtures["not-ok.md"].output,
            vec!["1:1: Missing newline character at end of file"]
        );
    }

    #[test]
    fn missing_descriptor_is_an_error() {
        let err = load_descriptor("no-such-rule").unwrap_err();
        assert!(matches!(err, LintError::FixtureParseError { .. }));
    }

    #[test]
    fn fixture_config_collects_settings() {
        let fixture: Fixture =
            serde_yaml::from_str("input: x\nconfig:\n  positionless: true\n  flavor: gfm\n").unwrap();
        assert!(fixture.config.positionless);
        assert_eq!(fixture.config.settings["flavor"], "gfm");
        assert!(fixture.output.is_empty());
    }
}
