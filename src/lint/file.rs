//! Per-document message aggregation.
//!
//! A [`LintFile`] owns one document's contents and the messages collected
//! for it. Each rule invocation gets a [`RuleContext`] borrowing the file,
//! which stamps messages with the rule's id, file path, and severity in
//! emission order.

use serde_json::{Map, Value};

use super::diagnostic::{LintMessage, Location};
use super::rule::RuleId;

/// File-level settings shared by every rule in a pass.
pub type Settings = Map<String, Value>;

/// A document being linted and the messages collected for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintFile {
    path: Option<String>,
    contents: String,
    messages: Vec<LintMessage>,
}

impl LintFile {
    /// Create a file from its contents.
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            path: None,
            contents: contents.into(),
            messages: Vec::new(),
        }
    }

    /// Set the file path used when rendering messages.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Messages in emission order.
    pub fn messages(&self) -> &[LintMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<LintMessage> {
        self.messages
    }

    /// Whether any message is fatal.
    pub fn has_fatal(&self) -> bool {
        self.messages.iter().any(|m| m.fatal == Some(true))
    }

    pub(crate) fn retain_messages(&mut self, keep: impl FnMut(&LintMessage) -> bool) {
        self.messages.retain(keep);
    }

    fn push(&mut self, message: LintMessage) {
        self.messages.push(message);
    }
}

/// The view of a file a rule gets while it runs.
pub struct RuleContext<'a> {
    file: &'a mut LintFile,
    rule_id: &'a RuleId,
    fatal: Option<bool>,
    settings: &'a Settings,
}

impl<'a> RuleContext<'a> {
    /// Create a context for one rule invocation.
    pub fn new(
        file: &'a mut LintFile,
        rule_id: &'a RuleId,
        fatal: Option<bool>,
        settings: &'a Settings,
    ) -> Self {
        Self {
            file,
            rule_id,
            fatal,
            settings,
        }
    }

    pub fn contents(&self) -> &str {
        self.file.contents()
    }

    pub fn path(&self) -> Option<&str> {
        self.file.path()
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    pub fn rule_id(&self) -> &RuleId {
        self.rule_id
    }

    /// Report a message attributed to the running rule.
    pub fn report(&mut self, reason: impl Into<String>, position: Option<Location>) {
        let mut message =
            LintMessage::new(self.rule_id.clone(), reason).with_fatal(self.fatal);
        message.position = position;
        self.push(message);
    }

    /// Append a prepared message. Its rule id is kept as is; only the file
    /// path is filled in when missing.
    pub fn push(&mut self, mut message: LintMessage) {
        if message.file.is_none() {
            message.file = self.file.path.clone();
        }
        self.file.push(message);
    }
}
