//! Multiple top level headings.

use serde_json::Value;

use super::{depth_option, positioned_headings};
use crate::lint::{Rule, RuleContext, RuleId};
use crate::markdown::Node;

/// Warns on every heading of the top level depth after the first one.
///
/// Options: the depth considered "top level", defaulting to `1`.
pub struct NoMultipleToplevelHeadingsRule;

impl Rule for NoMultipleToplevelHeadingsRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-multiple-toplevel-headings")
    }

    fn description(&self) -> &str {
        "Documents should have a single top level heading"
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
        let depth = depth_option(options, 1).map_err(anyhow::Error::msg)?;
        let mut seen = false;

        for heading in positioned_headings(tree) {
            if heading.heading_depth() != Some(depth) {
                continue;
            }
            if seen {
                if let Some(position) = heading.position {
                    ctx.report(
                        format!("Don’t use multiple top level headings ({})", position.start),
                        Some(position.into()),
                    );
                }
            }
            seen = true;
        }
        Ok(())
    }
}
