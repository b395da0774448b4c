//! marklint - Rule-based linting for markdown documents.
//!
//! marklint composes independent rules into a single pass over a parsed
//! document, normalizes each rule's severity configuration, and collects a
//! uniform stream of messages. Every built-in rule is verified against
//! embedded fixtures by a conformance harness.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading
//! - [`conformance`] - Fixture-driven rule verification
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Severity resolution, rules, and pipelines
//! - [`markdown`] - Markdown syntax tree and parser
//!
//! # Example
//!
//! ```
//! use marklint::config::LintConfig;
//! use marklint::lint::{lint_document, LintFile, RuleRegistry};
//!
//! let registry = RuleRegistry::with_builtins();
//! let config = LintConfig::all_rules(&registry);
//!
//! let file = lint_document(&registry, &config, LintFile::new("# Mercury.\n"))
//!     .into_result()
//!     .unwrap();
//! assert_eq!(
//!     file.messages()[0].to_string(),
//!     "1:1-1:11: Don’t add a trailing `.` to headings"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod conformance;
pub mod error;
pub mod lint;
pub mod markdown;

pub use error::{LintError, Result, SOURCE};
