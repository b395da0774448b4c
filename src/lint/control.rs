//! Comment directives that silence messages.
//!
//! HTML comments of the form `<!--lint KEYWORD [rule-id ...]-->` control
//! which messages survive a pass:
//!
//! - `ignore` drops messages that start inside the next sibling node
//! - `disable` drops messages after the comment, until a matching `enable`
//! - `enable` lifts a previous `disable`
//!
//! Without rule ids a directive applies to every rule. Messages without a
//! position are never dropped.

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::LintMessage;
use super::file::LintFile;
use crate::markdown::{Node, NodeKind, Point, Position};

/// Rule id used for failures raised by directive handling.
pub const CONTROL_RULE_ID: &str = "lint";

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<!--\s*lint\s+(.*?)\s*-->$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Enable,
    Disable,
    Ignore,
}

#[derive(Debug, Clone)]
struct Toggle {
    at: Point,
    rules: Vec<String>,
    enabled: bool,
}

#[derive(Debug, Clone)]
struct Ignored {
    range: Position,
    rules: Vec<String>,
}

/// A directive that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveError {
    pub reason: String,
    /// Where the offending comment sits.
    pub position: Position,
}

/// Directives collected from one tree.
#[derive(Debug, Default)]
pub struct Controls {
    toggles: Vec<Toggle>,
    ignored: Vec<Ignored>,
}

fn applies(rules: &[String], rule_id: &str) -> bool {
    rules.is_empty() || rules.iter().any(|r| r == rule_id)
}

impl Controls {
    /// Collect directives from `tree`.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectiveError`] when a directive uses an unknown keyword.
    pub fn collect(tree: &Node) -> Result<Self, DirectiveError> {
        let mut controls = Controls::default();
        controls.walk(tree)?;
        Ok(controls)
    }

    fn walk(&mut self, parent: &Node) -> Result<(), DirectiveError> {
        for (index, node) in parent.children.iter().enumerate() {
            if let (NodeKind::Html(value), Some(position)) = (&node.kind, node.position) {
                let directive = parse_directive(value)
                    .map_err(|reason| DirectiveError { reason, position })?;
                if let Some((keyword, rules)) = directive {
                    match keyword {
                        Keyword::Ignore => {
                            if let Some(range) =
                                parent.children.get(index + 1).and_then(|next| next.position)
                            {
                                self.ignored.push(Ignored { range, rules });
                            }
                        }
                        Keyword::Enable | Keyword::Disable => self.toggles.push(Toggle {
                            at: position.end,
                            rules,
                            enabled: keyword == Keyword::Enable,
                        }),
                    }
                }
            }
            self.walk(node)?;
        }
        Ok(())
    }

    /// Whether `message` survives the collected directives.
    pub fn allows(&self, message: &LintMessage) -> bool {
        let Some(start) = message.start() else {
            return true;
        };
        let rule_id = message.rule_id.as_str();

        if self
            .ignored
            .iter()
            .any(|i| applies(&i.rules, rule_id) && i.range.contains(start))
        {
            return false;
        }

        self.toggles
            .iter()
            .filter(|t| applies(&t.rules, rule_id) && t.at <= start)
            .last()
            .map_or(true, |t| t.enabled)
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty() && self.ignored.is_empty()
    }
}

fn parse_directive(value: &str) -> Result<Option<(Keyword, Vec<String>)>, String> {
    let Some(captures) = DIRECTIVE.captures(value.trim()) else {
        return Ok(None);
    };
    let mut words = captures[1].split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let keyword = match word {
        "enable" => Keyword::Enable,
        "disable" => Keyword::Disable,
        "ignore" => Keyword::Ignore,
        other => {
            return Err(format!(
                "Unknown keyword `{}`: expected `'enable'`, `'disable'`, or `'ignore'`",
                other
            ))
        }
    };
    Ok(Some((keyword, words.map(str::to_string).collect())))
}

/// Drop the messages of `file` silenced by directives in `tree`.
pub fn apply(tree: &Node, file: &mut LintFile) -> Result<(), DirectiveError> {
    let controls = Controls::collect(tree)?;
    if !controls.is_empty() {
        file.retain_messages(|message| controls.allows(message));
    }
    Ok(())
}
