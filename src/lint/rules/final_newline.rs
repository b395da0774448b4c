//! Final newline check.
//!
//! Reads the raw file contents rather than the tree, so it reports
//! regardless of whether positions are available.

use serde_json::Value;

use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::{Node, Point};

/// Warns when a non-empty file does not end in a newline.
pub struct FinalNewlineRule;

impl Rule for FinalNewlineRule {
    fn id(&self) -> RuleId {
        RuleId::new("final-newline")
    }

    fn description(&self) -> &str {
        "Files should end with a newline character"
    }

    fn check(
        &self,
        _tree: &Node,
        ctx: &mut RuleContext<'_>,
        _options: Option<&Value>,
    ) -> anyhow::Result<()> {
        let contents = ctx.contents();
        if !contents.is_empty() && !contents.ends_with('\n') {
            ctx.report(
                "Missing newline character at end of file",
                Some(Point::new(1, 1, 0).into()),
            );
        }
        Ok(())
    }
}
