//! Built-in lint rules.
//!
//! This module contains all the built-in rules that come with marklint.
//! Tree-based rules skip nodes without a position, so they stay silent on
//! position-stripped trees; rules reading the raw file contents do not.

pub mod final_newline;
pub mod first_heading_level;
pub mod heading_increment;
pub mod no_duplicate_headings;
pub mod no_heading_punctuation;
pub mod no_multiple_toplevel_headings;
pub mod no_tabs;

pub use final_newline::FinalNewlineRule;
pub use first_heading_level::FirstHeadingLevelRule;
pub use heading_increment::HeadingIncrementRule;
pub use no_duplicate_headings::NoDuplicateHeadingsRule;
pub use no_heading_punctuation::NoHeadingPunctuationRule;
pub use no_multiple_toplevel_headings::NoMultipleToplevelHeadingsRule;
pub use no_tabs::NoTabsRule;

use serde_json::Value;

use crate::markdown::{visit, Node, Point};

/// Headings that carry a position, in document order.
pub(crate) fn positioned_headings(tree: &Node) -> Vec<&Node> {
    let mut headings = Vec::new();
    visit(tree, &mut |node| {
        if node.heading_depth().is_some() && !node.is_generated() {
            headings.push(node);
        }
    });
    headings
}

/// Parse a heading depth option, defaulting to `default`.
pub(crate) fn depth_option(options: Option<&Value>, default: u8) -> Result<u8, String> {
    match options {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(depth @ 1..=6) => Ok(depth as u8),
            _ => Err(format!("expected a heading depth between 1 and 6, not `{}`", n)),
        },
        Some(other) => Err(format!("expected a heading depth, not `{}`", other)),
    }
}

/// Points of every occurrence of `needle` in `contents`.
pub(crate) fn char_points(contents: &str, needle: char) -> Vec<Point> {
    let mut points = Vec::new();
    let mut line = 1;
    let mut column = 1;
    for (offset, ch) in contents.char_indices() {
        if ch == needle {
            points.push(Point::new(line, column, offset));
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    points
}
