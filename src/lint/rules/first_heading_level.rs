//! First heading level.

use serde_json::Value;

use super::{depth_option, positioned_headings};
use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::Node;

/// Warns when the first heading is not at the expected depth.
///
/// Options: the expected depth, defaulting to `1`.
pub struct FirstHeadingLevelRule;

impl Rule for FirstHeadingLevelRule {
    fn id(&self) -> RuleId {
        RuleId::new("first-heading-level")
    }

    fn description(&self) -> &str {
        "The first heading should be at the expected level"
    }

    fn validate_options(&self, options: Option<&Value>) -> Result<(), String> {
        depth_option(options, 1).map(|_| ())
    }

    fn check(
        &self,
        tree: &Node,
        ctx: &mut RuleContext<'_>,
        options: Option<&Value>,
    ) -> anyhow::Result<()> {
        let expected = depth_option(options, 1).map_err(anyhow::Error::msg)?;

        if let Some(first) = positioned_headings(tree).first() {
            if first.heading_depth() != Some(expected) {
                ctx.report(
                    format!("First heading level should be `{}`", expected),
                    first.position.map(Into::into),
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
        let rule_id = FirstHeadingLevelRule.id();
        let settings = Settings::new();
        let tree = parse(contents);
        let mut ctx = RuleContext::new(&mut file, &rule_id, Some(false), &settings);
        FirstHeadingLevelRule
            .check(&tree, &mut ctx, options.as_ref())
            .unwrap();
        file.messages().iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn warns_on_deep_first_heading() {
        assert_eq!(
            check("Intro\n\n## Alpha\n\n# Bravo\n", None),
            vec!["3:1-3:9: First heading level should be `1`"]
        );
    }

    #[test]
    fn only_first_heading_counts() {
        assert!(check("# Alpha\n\n### Bravo\n", None).is_empty());
    }

    #[test]
    fn configured_level() {
        assert!(check("## Alpha\n", Some(json!(2))).is_empty());
        assert_eq!(check("# Alpha\n", Some(json!(2))).len(), 1);
    }
}
