//! Trailing punctuation in headings.

use serde_json::Value;

use super::positioned_headings;
use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::Node;

const DEFAULT_PUNCTUATION: &str = ".,;:!?";

/// Warns when a heading ends in one of the configured punctuation characters.
///
/// Options: a string of characters to flag, defaulting to `.,;:!?`.
pub struct NoHeadingPunctuationRule;

impl NoHeadingPunctuationRule {
    fn punctuation(options: Option<&Value>) -> Result<String, String> {
        match options {
            None | Some(Value::Null) => Ok(DEFAULT_PUNCTUATION.to_string()),
            Some(Value::String(chars)) if !chars.is_empty() => Ok(chars.clone()),
            Some(other) => Err(format!(
                "expected a non-empty string of punctuation characters, not `{}`",
                other
            )),
        }
    }
}

impl Rule for NoHeadingPunctuationRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-heading-punctuation")
    }

    fn description(&self) -> &str {
        "Headings should not end in punctuation"
    }

    fn validate_options(&self, options: Option<&Value>) -> Result<(), String> {
        Self::punctuation(options).map(|_| ())
    }

    fn check(
        &self,
        tree: &Node,
        ctx: &mut RuleContext<'_>,
        options: Option<&Value>,
    ) -> anyhow::Result<()> {
        let punctuation = Self::punctuation(options).map_err(anyhow::Error::msg)?;

        for heading in positioned_headings(tree) {
            let Some(last) = heading.text().chars().last() else {
                continue;
            };
            if punctuation.contains(last) {
                ctx.report(
                    format!("Don’t add a trailing `{}` to headings", last),
                    heading.position.map(Into::into),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintFile, Settings};
    use crate::markdown::parse;
    use serde_json::json;

    fn check(contents: &str, options: Option<Value>) -> Vec<String> {
        let mut file = LintFile::new(contents);
        let rule_id = NoHeadingPunctuationRule.id();
        let settings = Settings::new();
        let tree = parse(contents);
        let mut ctx = RuleContext::new(&mut file, &rule_id, Some(false), &settings);
        NoHeadingPunctuationRule
            .check(&tree, &mut ctx, options.as_ref())
            .unwrap();
        file.messages().iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn warns_on_trailing_period() {
        assert_eq!(
            check("# Hello.\n", None),
            vec!["1:1-1:9: Don’t add a trailing `.` to headings"]
        );
    }

    #[test]
    fn custom_punctuation() {
        assert!(check("# Hello.\n", Some(json!("!"))).is_empty());
        assert_eq!(check("# Hello!\n", Some(json!("!"))).len(), 1);
    }

    #[test]
    fn finds_headings_after_inline_html_and_in_lists() {
        assert_eq!(
            check("<b>Note</b> text\n# Heading.\n", None),
            vec!["2:1-2:11: Don’t add a trailing `.` to headings"]
        );
        assert_eq!(
            check("- # Mercury.\n", None),
            vec!["1:3-1:13: Don’t add a trailing `.` to headings"]
        );
    }

    #[test]
    fn ignores_empty_headings_and_paragraphs() {
        assert!(check("#\n\nJust text.\n", None).is_empty());
    }

    #[test]
    fn rejects_non_string_options() {
        assert!(NoHeadingPunctuationRule.validate_options(Some(&json!(1))).is_err());
        assert!(NoHeadingPunctuationRule.validate_options(Some(&json!(""))).is_err());
        assert!(NoHeadingPunctuationRule.validate_options(None).is_ok());
    }
}
