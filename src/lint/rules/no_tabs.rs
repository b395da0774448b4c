//! Hard tabs.

use serde_json::Value;

use super::char_points;
use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::Node;

/// Warns on every tab character in the file contents.
pub struct NoTabsRule;

impl Rule for NoTabsRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-tabs")
    }

    fn description(&self) -> &str {
        "Use spaces instead of hard tabs"
    }

    fn check(
        &self,
        _tree: &Node,
        ctx: &mut RuleContext<'_>,
        _options: Option<&Value>,
    ) -> anyhow::Result<()> {
        for point in char_points(ctx.contents(), '\t') {
            ctx.report("Use spaces instead of hard-tabs", Some(point.into()));
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
        let rule_id = NoTabsRule.id();
        let settings = Settings::new();
        let tree = parse(contents);
        let mut ctx = RuleContext::new(&mut file, &rule_id, Some(false), &settings);
        NoTabsRule.check(&tree, &mut ctx, None).unwrap();
        file.messages().iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn warns_on_each_tab() {
        assert_eq!(
            check("\tAlpha\nBravo\t\n"),
            vec![
                "1:1: Use spaces instead of hard-tabs",
                "2:6: Use spaces instead of hard-tabs"
            ]
        );
    }

    #[test]
    fn spaces_pass() {
        assert!(check("    Alpha\n").is_empty());
    }
}
