//! Error types for marklint operations.
//!
//! This module defines [`LintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors (bad severities, bad options, unknown rules) are
//!   raised when a rule is attached, before any document is processed
//! - Diagnostics are never errors: they are data on a processed file
//! - Failures during a pass surface as
//!   [`Outcome::ProcessingFailure`](crate::lint::Outcome); those raised by
//!   the engine itself are tagged with [`SOURCE`]
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Origin tag for every message and failure produced by this engine.
pub const SOURCE: &str = "marklint";

/// Core error type for marklint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// A severity outside `0..=2` or the recognized keyword set.
    #[error("Invalid severity `{value}` for `{rule_id}`, expected 0, 1, or 2")]
    InvalidSeverity { rule_id: String, value: String },

    /// Rule options of the wrong shape.
    #[error("Invalid options for `{rule_id}`: {message}")]
    InvalidOptions { rule_id: String, message: String },

    /// Configuration names a rule that is not registered.
    #[error("Unknown rule `{rule_id}`")]
    UnknownRule { rule_id: String },

    /// A rule failed while processing a document.
    #[error("Rule `{rule_id}` failed: {message}")]
    RuleFailed { rule_id: String, message: String },

    /// A rule emitted a message attributed to another rule.
    #[error("Expected `{expected}`, not `{actual}` as `ruleId` for {message}")]
    RuleIdMismatch {
        expected: String,
        actual: String,
        message: String,
    },

    /// Embedded fixture file for a rule could not be read.
    #[error("Invalid fixtures for `{rule_id}`: {message}")]
    FixtureParseError { rule_id: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Whether this error belongs to the configuration class, raised at
    /// attachment time rather than during a pass.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LintError::InvalidSeverity { .. }
                | LintError::InvalidOptions { .. }
                | LintError::UnknownRule { .. }
                | LintError::ConfigNotFound { .. }
                | LintError::ConfigParseError { .. }
        )
    }
}

/// Result type alias for marklint operations.
pub type Result<T> = std::result::Result<T, LintError>;
