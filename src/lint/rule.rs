//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`Rule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule

use serde_json::Value;

use super::file::RuleContext;
use super::severity::Severity;
use crate::markdown::Node;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for RuleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A lint rule that inspects a markdown tree.
///
/// Rules only read the tree and only write messages through the
/// [`RuleContext`] they are handed. They hold no per-document state, so a
/// single instance can be attached to any number of pipelines and invoked
/// concurrently on different documents.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Severity used when the rule is enabled with a bare `true`.
    fn default_severity(&self) -> Severity {
        Severity::Warn
    }

    /// Validate rule options at attachment time.
    ///
    /// The error string is wrapped into
    /// [`LintError::InvalidOptions`](crate::LintError::InvalidOptions).
    fn validate_options(&self, _options: Option<&Value>) -> Result<(), String> {
        Ok(())
    }

    /// Check the tree and report messages into `ctx`.
    fn check(
        &self,
        tree: &Node,
        ctx: &mut RuleContext<'_>,
        options: Option<&Value>,
    ) -> anyhow::Result<()>;
}
