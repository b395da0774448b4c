//! Running documents through attached rules.
//!
//! A [`Pipeline`] holds an ordered list of attached rules, each with a
//! resolved configuration. [`Pipeline::process`] parses a document, runs
//! every enabled rule once against the tree, applies comment directives,
//! and reports an [`Outcome`].
//!
//! Rules never see each other's messages or state, so the combined
//! messages of a pass do not depend on attachment order beyond the order
//! in which they are listed.

use std::fmt;
use std::sync::Arc;

use super::control::{self, CONTROL_RULE_ID};
use super::diagnostic::LintMessage;
use super::file::{LintFile, RuleContext, Settings};
use super::registry::RuleRegistry;
use super::rule::{Rule, RuleId};
use super::severity::{resolve, ResolvedConfig, SeverityInput};
use crate::config::LintConfig;
use crate::error::{LintError, Result, SOURCE};
use crate::markdown::{self, Node, Position};

/// A rule together with its resolved configuration.
#[derive(Clone)]
pub struct AttachedRule {
    pub rule: Arc<dyn Rule>,
    pub rule_id: RuleId,
    pub config: ResolvedConfig,
}

impl fmt::Debug for AttachedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedRule")
            .field("rule_id", &self.rule_id)
            .field("config", &self.config)
            .finish()
    }
}

/// A pass stopped before completing.
#[derive(Debug)]
pub struct ProcessingFailure {
    pub rule_id: RuleId,
    pub reason: String,
    /// Origin tag: [`SOURCE`] when the engine itself raised the failure
    /// (directive handling), `None` when a rule's own check errored.
    pub source: Option<&'static str>,
    /// Location of the offending node, when known.
    pub position: Option<Position>,
    /// The file with the messages collected before the failure.
    pub file: LintFile,
}

impl ProcessingFailure {
    /// Whether the engine raised this failure rather than a rule.
    pub fn is_engine(&self) -> bool {
        self.source == Some(SOURCE)
    }

    /// The failure as a fatal message on its file.
    pub fn message(&self) -> LintMessage {
        let mut message =
            LintMessage::new(self.rule_id.clone(), self.reason.clone()).with_fatal(Some(true));
        if let Some(path) = self.file.path() {
            message = message.with_file(path);
        }
        if let Some(position) = self.position {
            message = message.with_position(position);
        }
        message
    }
}

impl fmt::Display for ProcessingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file.path() {
            Some(path) => write!(f, "{}: `{}` failed: {}", path, self.rule_id, self.reason),
            None => write!(f, "`{}` failed: {}", self.rule_id, self.reason),
        }
    }
}

/// Result of processing one document.
#[derive(Debug)]
pub enum Outcome {
    /// The pass completed; the file carries its messages.
    Success(LintFile),
    /// The pipeline could not be configured.
    ConfigurationError(LintError),
    /// A rule failed during the pass.
    ProcessingFailure(ProcessingFailure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The processed file, when the pass succeeded.
    pub fn file(&self) -> Option<&LintFile> {
        match self {
            Outcome::Success(file) => Some(file),
            _ => None,
        }
    }

    /// Convert into a `Result`, mapping failures onto [`LintError`].
    pub fn into_result(self) -> Result<LintFile> {
        match self {
            Outcome::Success(file) => Ok(file),
            Outcome::ConfigurationError(err) => Err(err),
            Outcome::ProcessingFailure(failure) => Err(LintError::RuleFailed {
                rule_id: failure.rule_id.0,
                message: failure.reason,
            }),
        }
    }
}

/// An ordered set of attached rules.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    attached: Vec<AttachedRule>,
    settings: Settings,
    strip_positions: bool,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from a configuration file's rule table.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRule` for ids missing from `registry`, and any
    /// attachment error from [`Pipeline::attach`].
    pub fn from_config(registry: &RuleRegistry, config: &LintConfig) -> Result<Self> {
        let mut pipeline = Self::new().with_settings(config.settings.clone());
        for (rule_id, value) in &config.rules {
            let rule = registry
                .get(&RuleId::new(rule_id.as_str()))
                .ok_or_else(|| LintError::UnknownRule {
                    rule_id: rule_id.clone(),
                })?;
            pipeline.attach(rule, value.clone())?;
        }
        Ok(pipeline)
    }

    /// Set the file-level settings handed to every rule.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Remove positional information from trees before rules run.
    pub fn without_positions(mut self) -> Self {
        self.strip_positions = true;
        self
    }

    /// Attach `rule` with a raw configuration value.
    ///
    /// A bare `false` skips the rule entirely and a bare `true` enables it at
    /// its default severity; every other shape goes through [`resolve`].
    /// Options are validated here, so configuration errors surface before
    /// any document is processed.
    pub fn attach(
        &mut self,
        rule: Arc<dyn Rule>,
        input: impl Into<SeverityInput>,
    ) -> Result<&mut Self> {
        let rule_id = rule.id();
        let config = match input.into() {
            SeverityInput::Bool(false) => {
                tracing::debug!("Skipping rule {}: turned off", rule_id);
                return Ok(self);
            }
            SeverityInput::Bool(true) => {
                ResolvedConfig::with_severity(rule.default_severity(), None)
            }
            other => resolve(rule_id.as_str(), &other)?,
        };

        rule.validate_options(config.options.as_ref())
            .map_err(|message| LintError::InvalidOptions {
                rule_id: rule_id.0.clone(),
                message,
            })?;

        tracing::debug!("Attached rule {} at {}", rule_id, config.severity());
        self.attached.push(AttachedRule {
            rule,
            rule_id,
            config,
        });
        Ok(self)
    }

    /// Attached rules in attachment order, including disabled ones.
    pub fn attached(&self) -> &[AttachedRule] {
        &self.attached
    }

    /// Parse `file` and run every enabled rule over it.
    pub fn process(&self, file: LintFile) -> Outcome {
        let tree = markdown::parse(file.contents());
        self.process_tree(&tree, file)
    }

    /// Run every enabled rule over an already parsed tree.
    pub fn process_tree(&self, tree: &Node, mut file: LintFile) -> Outcome {
        let stripped;
        let tree = if self.strip_positions {
            stripped = markdown::remove_positions(tree);
            &stripped
        } else {
            tree
        };

        for attached in self.attached.iter().filter(|a| a.config.enabled) {
            let before = file.messages().len();
            let mut ctx = RuleContext::new(
                &mut file,
                &attached.rule_id,
                attached.config.fatal,
                &self.settings,
            );
            if let Err(err) = attached
                .rule
                .check(tree, &mut ctx, attached.config.options.as_ref())
            {
                tracing::warn!("Rule {} failed: {:#}", attached.rule_id, err);
                return Outcome::ProcessingFailure(ProcessingFailure {
                    rule_id: attached.rule_id.clone(),
                    reason: format!("{:#}", err),
                    source: None,
                    position: None,
                    file,
                });
            }
            tracing::debug!(
                "Rule {} found {} message(s)",
                attached.rule_id,
                file.messages().len() - before
            );
        }

        if let Err(err) = control::apply(tree, &mut file) {
            tracing::warn!("Directive at {} failed: {}", err.position, err.reason);
            return Outcome::ProcessingFailure(ProcessingFailure {
                rule_id: RuleId::new(CONTROL_RULE_ID),
                reason: err.reason,
                source: Some(SOURCE),
                position: Some(err.position),
                file,
            });
        }

        Outcome::Success(file)
    }
}

/// Lint `file` with the rules configured in `config`.
pub fn lint_document(registry: &RuleRegistry, config: &LintConfig, file: LintFile) -> Outcome {
    match Pipeline::from_config(registry, config) {
        Ok(pipeline) => pipeline.process(file),
        Err(err) => Outcome::ConfigurationError(err),
    }
}
