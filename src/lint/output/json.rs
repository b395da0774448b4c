//! JSON output formatter.
//!
//! Formats lint messages as machine-readable JSON for tooling integration.

use super::{kind_label, LintFormatter};
use crate::lint::{LintMessage, Location};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    messages: Vec<JsonMessage>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonMessage {
    rule_id: String,
    severity: &'static str,
    reason: String,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, messages: &[LintMessage], writer: &mut W) -> std::io::Result<()> {
        let json_messages: Vec<_> = messages
            .iter()
            .map(|m| {
                let start = m.start();
                let end = match m.position {
                    Some(Location::Range(position)) => Some(position.end),
                    _ => None,
                };
                JsonMessage {
                    rule_id: m.rule_id.0.clone(),
                    severity: kind_label(m),
                    reason: m.reason.clone(),
                    source: m.source,
                    file: m.file.clone(),
                    line: start.map(|p| p.line),
                    column: start.map(|p| p.column),
                    end_line: end.map(|p| p.line),
                    end_column: end.map(|p| p.column),
                }
            })
            .collect();

        let summary = JsonSummary {
            total: messages.len(),
            errors: messages.iter().filter(|m| m.fatal == Some(true)).count(),
            warnings: messages.iter().filter(|m| m.fatal == Some(false)).count(),
        };

        let output = JsonOutput {
            messages: json_messages,
            summary,
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}
