//! Lint output formatters.
//!
//! This module provides formatters for outputting lint messages
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::LintMessage;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

/// Label for a message's severity.
pub(crate) fn kind_label(message: &LintMessage) -> &'static str {
    match message.fatal {
        Some(true) => "error",
        Some(false) => "warning",
        None => "info",
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format messages to the given writer.
    fn format<W: Write>(&self, messages: &[LintMessage], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
