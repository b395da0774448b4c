//! Running rules against their fixtures.

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;

use super::fixture::{load_descriptor, preprocess, Fixture, RuleDescriptor};
use crate::error::{LintError, Result};
use crate::lint::{LintFile, LintMessage, Outcome, Pipeline, Rule, RuleId, RuleRegistry};

/// Expected and actual rendered messages for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl Comparison {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Result of checking one fixture under one setting.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    /// Serialized configuration the rule was attached with.
    pub setting: String,
    /// Fixture name, also used as the file path.
    pub name: String,
    pub with_position: Comparison,
    /// `None` for positionless fixtures.
    pub without_position: Option<Comparison>,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        self.with_position.passed()
            && self
                .without_position
                .as_ref()
                .map_or(true, Comparison::passed)
    }
}

/// All fixture results for one rule.
#[derive(Debug, Clone)]
pub struct RuleReport {
    pub rule_id: RuleId,
    pub fixtures: Vec<FixtureReport>,
}

impl RuleReport {
    pub fn passed(&self) -> bool {
        self.fixtures.iter().all(FixtureReport::passed)
    }

    /// Fixtures with at least one mismatching comparison.
    pub fn failures(&self) -> impl Iterator<Item = &FixtureReport> {
        self.fixtures.iter().filter(|f| !f.passed())
    }
}

/// Render a message without its leading file path segment.
pub fn normalize(message: &LintMessage) -> String {
    let rendered = message.to_string();
    match rendered.find(':') {
        Some(index) => rendered[index + 1..].to_string(),
        None => rendered,
    }
}

/// Check the registered rule `rule_id` against its embedded fixtures.
///
/// # Errors
///
/// Returns `UnknownRule` if the registry lacks the rule, and aborts with
/// the first fixture-level error from [`check_descriptor`].
pub fn check_rule(registry: &RuleRegistry, rule_id: &RuleId) -> Result<RuleReport> {
    let rule = registry
        .get(rule_id)
        .ok_or_else(|| LintError::UnknownRule {
            rule_id: rule_id.0.clone(),
        })?;
    let descriptor = load_descriptor(rule_id.as_str())?;
    check_descriptor(rule, &descriptor)
}

/// Check every registered rule, one rule per worker.
///
/// Reports come back in rule id order.
pub fn check_all(registry: &RuleRegistry) -> Result<Vec<RuleReport>> {
    registry
        .rule_ids()
        .par_iter()
        .map(|rule_id| check_rule(registry, rule_id))
        .collect()
}

/// Check `rule` against every setting and fixture in `descriptor`.
///
/// # Errors
///
/// Aborts on an unparsable setting, a configuration error, a failure
/// raised by the rule itself, or a message attributed to another rule.
/// Failures raised by the engine, such as an unknown directive keyword,
/// are recorded as a fatal message and compared like any other output.
pub fn check_descriptor(rule: Arc<dyn Rule>, descriptor: &RuleDescriptor) -> Result<RuleReport> {
    let rule_id = RuleId::new(descriptor.rule_id.as_str());
    let mut fixtures = Vec::new();

    for (setting, cases) in &descriptor.tests {
        let config: Value =
            serde_json::from_str(setting).map_err(|e| LintError::FixtureParseError {
                rule_id: rule_id.0.clone(),
                message: format!("setting `{}`: {}", setting, e),
            })?;

        for (name, fixture) in cases {
            tracing::debug!("Checking {} {} with `{}`", rule_id, name, setting);
            fixtures.push(check_fixture(&rule, &rule_id, setting, &config, name, fixture)?);
        }
    }

    Ok(RuleReport { rule_id, fixtures })
}

fn check_fixture(
    rule: &Arc<dyn Rule>,
    rule_id: &RuleId,
    setting: &str,
    config: &Value,
    name: &str,
    fixture: &Fixture,
) -> Result<FixtureReport> {
    let mut pipeline = Pipeline::new().with_settings(fixture.config.settings.clone());
    pipeline.attach(Arc::clone(rule), config.clone())?;

    let input = preprocess(&fixture.input);
    let actual = run(&pipeline, rule_id, name, &input)?;
    let with_position = Comparison {
        expected: fixture.output.clone(),
        actual,
    };

    let without_position = if fixture.config.positionless {
        None
    } else {
        let actual = run(&pipeline.clone().without_positions(), rule_id, name, &input)?;
        Some(Comparison {
            expected: Vec::new(),
            actual,
        })
    };

    Ok(FixtureReport {
        setting: setting.to_string(),
        name: name.to_string(),
        with_position,
        without_position,
    })
}

fn run(pipeline: &Pipeline, rule_id: &RuleId, name: &str, input: &str) -> Result<Vec<String>> {
    match pipeline.process(LintFile::new(input).with_path(name)) {
        Outcome::ProcessingFailure(failure) if failure.is_engine() => {
            tracing::debug!("Recording engine failure in {}: {}", name, failure.reason);
            let mut actual = rendered(rule_id, &failure.file)?;
            actual.push(normalize(&failure.message()));
            Ok(actual)
        }
        outcome => rendered(rule_id, &outcome.into_result()?),
    }
}

fn rendered(rule_id: &RuleId, file: &LintFile) -> Result<Vec<String>> {
    file.messages()
        .iter()
        .map(|message| {
            if message.rule_id != *rule_id {
                return Err(LintError::RuleIdMismatch {
                    expected: rule_id.0.clone(),
                    actual: message.rule_id.0.clone(),
                    message: message.to_string(),
                });
            }
            Ok(normalize(message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::NoTabsRule;
    use crate::markdown::{Point, Position};

    #[test]
    fn normalize_strips_path_segment() {
        let message = LintMessage::new(RuleId::new("r"), "Bad")
            .with_position(Position::new(Point::new(1, 1, 0), Point::new(1, 4, 3)))
            .with_file("not-ok.md");
        assert_eq!(normalize(&message), "1:1-1:4: Bad");
    }

    #[test]
    fn fixture_report_ignores_missing_positionless_run() {
        let report = FixtureReport {
            setting: "true".into(),
            name: "ok.md".into(),
            with_position: Comparison {
                expected: vec![],
                actual: vec![],
            },
            without_position: None,
        };
        assert!(report.passed());
    }

    #[test]
    fn mismatching_output_is_recorded_not_raised() {
        let descriptor: RuleDescriptor = serde_yaml::from_str(
            r#"
rule_id: no-tabs
tests:
  'true':
    wrong.md:
      input: "a»b\n"
      config:
        positionless: true
      output: []
"#,
        )
        .unwrap();

        let report = check_descriptor(Arc::new(NoTabsRule), &descriptor).unwrap();
        assert!(!report.passed());
        let failure = report.failures().next().unwrap();
        assert_eq!(
            failure.with_position.actual,
            vec!["1:2: Use spaces instead of hard-tabs"]
        );
    }

    #[test]
    fn unknown_directive_is_recorded_as_output() {
        let descriptor: RuleDescriptor = serde_yaml::from_str(
            r#"
rule_id: no-tabs
tests:
  'true':
    mute.md:
      input: "<!--lint mute-->\n\n# Mercury.\n"
      output:
        - "1:1-1:17: Unknown keyword `mute`: expected `'enable'`, `'disable'`, or `'ignore'`"
"#,
        )
        .unwrap();

        let report = check_descriptor(Arc::new(NoTabsRule), &descriptor).unwrap();
        assert!(report.passed(), "{:?}", report);
        let fixture = &report.fixtures[0];
        assert_eq!(fixture.without_position.as_ref().unwrap().actual, Vec::<String>::new());
    }

    #[test]
    fn bad_setting_key_is_a_fixture_error() {
        let descriptor: RuleDescriptor = serde_yaml::from_str(
            "rule_id: no-tabs\ntests:\n  'not json':\n    ok.md:\n      input: ''\n",
        )
        .unwrap();

        let err = check_descriptor(Arc::new(NoTabsRule), &descriptor).unwrap_err();
        assert!(matches!(err, LintError::FixtureParseError { .. }));
    }
}
