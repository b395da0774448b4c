//! Human-readable output formatter.
//!
//! One line per message, in the standard `path:position: reason` form,
//! followed by the severity and rule id, then a summary.

use super::{kind_label, LintFormatter};
use crate::lint::LintMessage;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, messages: &[LintMessage], writer: &mut W) -> std::io::Result<()> {
        for message in messages {
            writeln!(
                writer,
                "{}  {}  {}",
                message,
                kind_label(message),
                message.rule_id
            )?;
        }

        let error_count = messages.iter().filter(|m| m.fatal == Some(true)).count();
        let warning_count = messages.iter().filter(|m| m.fatal == Some(false)).count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
