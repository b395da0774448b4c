//! Duplicate heading content.

use std::collections::HashMap;

use serde_json::Value;

use super::positioned_headings;
use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::{Node, Point};

/// Warns when two headings have the same text, ignoring case and
/// surrounding whitespace.
pub struct NoDuplicateHeadingsRule;

impl Rule for NoDuplicateHeadingsRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-duplicate-headings")
    }

    fn description(&self) -> &str {
        "Headings should have distinct content"
    }

    fn check(
        &self,
        tree: &Node,
        ctx: &mut RuleContext<'_>,
        _options: Option<&Value>,
    ) -> anyhow::Result<()> {
        let mut first_seen: HashMap<String, Point> = HashMap::new();

        for heading in positioned_headings(tree) {
            let Some(position) = heading.position else {
                continue;
            };
            let key = heading.text().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            match first_seen.get(&key) {
                Some(original) => ctx.report(
                    format!("Do not use headings with similar content ({})", original),
                    Some(position.into()),
                ),
                None => {
                    first_seen.insert(key, position.start);
                }
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

    fn check(contents: &str) -> Vec<String> {
        let mut file = LintFile::new(contents);
        let rule_id = NoDuplicateHeadingsRule.id();
        let settings = Settings::new();
        let tree = parse(contents);
        let mut ctx = RuleContext::new(&mut file, &rule_id, Some(false), &settings);
        NoDuplicateHeadingsRule.check(&tree, &mut ctx, None).unwrap();
        file.messages().iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn warns_on_repeated_heading() {
        assert_eq!(
            check("# Alpha\n\n## alpha\n"),
            vec!["3:1-3:9: Do not use headings with similar content (1:1)"]
        );
    }

    #[test]
    fn distinct_headings_pass() {
        assert!(check("# Alpha\n\n## Bravo\n").is_empty());
    }
}
