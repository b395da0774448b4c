//! Heading level increments.

use serde_json::Value;

use super::positioned_headings;
use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::Node;

/// Warns when a heading is more than one level deeper than the previous one.
pub struct HeadingIncrementRule;

impl Rule for HeadingIncrementRule {
    fn id(&self) -> RuleId {
        RuleId::new("heading-increment")
    }

    fn description(&self) -> &str {
        "Heading levels should increment by one level at a time"
    }

    fn check(
        &self,
        tree: &Node,
        ctx: &mut RuleContext<'_>,
        _options: Option<&Value>,
    ) -> anyhow::Result<()> {
        let mut previous: Option<u8> = None;

        for heading in positioned_headings(tree) {
            let Some(depth) = heading.heading_depth() else {
                continue;
            };
            if previous.is_some_and(|prev| depth > prev + 1) {
                ctx.report(
                    "Heading levels should increment by one level at a time",
                    heading.position.map(Into::into),
                );
            }
            previous = Some(depth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintFile, Settings};
    use crate::markdown::parse;

    fn check(contents: &str) -> Vec<String> {
        let mut file = LintFile::new(contents);
        let rule_id = HeadingIncrementRule.id();
        let settings = Settings::new();
        let tree = parse(contents);
        let mut ctx = RuleContext::new(&mut file, &rule_id, Some(false), &settings);
        HeadingIncrementRule.check(&tree, &mut ctx, None).unwrap();
        file.messages().iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn warns_on_skipped_level() {
        assert_eq!(
            check("# Alpha\n\n### Bravo\n"),
            vec!["3:1-3:10: Heading levels should increment by one level at a time"]
        );
    }

    #[test]
    fn allows_decreasing_levels() {
        assert!(check("# Alpha\n\n## Bravo\n\n### Charlie\n\n# Delta\n").is_empty());
    }

    #[test]
    fn first_heading_may_start_deep() {
        assert!(check("### Alpha\n").is_empty());
    }
}
