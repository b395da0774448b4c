//! Rule-based markdown linting.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Severity** - Normalizing raw rule configuration ([`resolve`])
//! - **Rules** - Individual checks over a syntax tree ([`Rule`] trait)
//! - **Files** - Per-document message aggregation ([`LintFile`], [`RuleContext`])
//! - **Pipelines** - Running attached rules over a document ([`Pipeline`])
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//!
//! # Example
//!
//! ```
//! use marklint::lint::{LintFile, Pipeline, RuleRegistry, RuleId};
//! use serde_json::json;
//!
//! let registry = RuleRegistry::with_builtins();
//! let rule = registry.get(&RuleId::new("final-newline")).unwrap();
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.attach(rule, json!([2])).unwrap();
//!
//! let file = pipeline.process(LintFile::new(".")).into_result().unwrap();
//! assert_eq!(file.messages()[0].to_string(), "1:1: Missing newline character at end of file");
//! assert_eq!(file.messages()[0].fatal, Some(true));
//! ```

pub mod control;
pub mod diagnostic;
pub mod file;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod severity;

pub use diagnostic::{LintMessage, Location};
pub use file::{LintFile, RuleContext, Settings};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use pipeline::{lint_document, AttachedRule, Outcome, Pipeline, ProcessingFailure};
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleId};
pub use severity::{resolve, ResolvedConfig, Severity, SeverityInput};
