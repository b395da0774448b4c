//! Lint messages.
//!
//! This module provides the [`LintMessage`] type for representing issues
//! found while linting a document. Messages are plain data: a `fatal`
//! message is still a successful result, never an error.

use std::fmt;

use super::rule::RuleId;
use crate::error::SOURCE;
use crate::markdown::{Point, Position};

/// Where a message points in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Point(Point),
    Range(Position),
}

impl Location {
    /// Start of the location.
    pub fn start(&self) -> Point {
        match self {
            Location::Point(point) => *point,
            Location::Range(position) => position.start,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Point(point) => write!(f, "{}", point),
            Location::Range(position) => write!(f, "{}", position),
        }
    }
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Location::Point(point)
    }
}

impl From<Position> for Location {
    fn from(position: Position) -> Self {
        Location::Range(position)
    }
}

/// A message produced by a lint rule.
#[derive(Debug, Clone, PartialEq)]
pub struct LintMessage {
    /// The rule that produced this message.
    pub rule_id: RuleId,
    /// Human-readable reason.
    pub reason: String,
    /// Path of the file the message belongs to.
    pub file: Option<String>,
    /// Optional source location.
    pub position: Option<Location>,
    /// `Some(true)` for errors, `Some(false)` for warnings, `None` for
    /// informational messages.
    pub fatal: Option<bool>,
    /// Origin tag; [`SOURCE`] for messages from this engine.
    pub source: &'static str,
}

impl LintMessage {
    /// Create a new informational message.
    pub fn new(rule_id: RuleId, reason: impl Into<String>) -> Self {
        Self {
            rule_id,
            reason: reason.into(),
            file: None,
            position: None,
            fatal: None,
            source: SOURCE,
        }
    }

    /// Add a source location to this message.
    pub fn with_position(mut self, position: impl Into<Location>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the fatal flag.
    pub fn with_fatal(mut self, fatal: Option<bool>) -> Self {
        self.fatal = fatal;
        self
    }

    /// Set the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Drop the source location.
    pub fn strip_position(&mut self) {
        self.position = None;
    }

    /// Start line and column, if the message has a location.
    pub fn start(&self) -> Option<Point> {
        self.position.map(|location| location.start())
    }
}

impl fmt::Display for LintMessage {
    /// `path:start-end: reason`, degrading to `path:line:col: reason` for a
    /// point and `path: reason` without a location.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, &self.position) {
            (Some(file), Some(location)) => write!(f, "{}:{}: {}", file, location, self.reason),
            (None, Some(location)) => write!(f, "{}: {}", location, self.reason),
            (Some(file), None) => write!(f, "{}: {}", file, self.reason),
            (None, None) => write!(f, "{}", self.reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(sl: usize, sc: usize, el: usize, ec: usize) -> Position {
        Position::new(Point::new(sl, sc, 0), Point::new(el, ec, 0))
    }

    #[test]
    fn message_creation() {
        let message = LintMessage::new(RuleId::new("test-rule"), "Test message");

        assert_eq!(message.rule_id, RuleId::new("test-rule"));
        assert_eq!(message.reason, "Test message");
        assert_eq!(message.source, SOURCE);
        assert!(message.fatal.is_none());
        assert!(message.position.is_none());
    }

    #[test]
    fn displays_range_with_path() {
        let message = LintMessage::new(RuleId::new("no-heading-punctuation"), "Don’t add a trailing `.` to headings")
            .with_file("virtual.md")
            .with_position(range(3, 1, 3, 24));

        assert_eq!(
            message.to_string(),
            "virtual.md:3:1-3:24: Don’t add a trailing `.` to headings"
        );
    }

    #[test]
    fn displays_point_without_path() {
        let message = LintMessage::new(RuleId::new("final-newline"), "Missing newline character at end of file")
            .with_position(Point::new(1, 1, 0));

        assert_eq!(message.to_string(), "1:1: Missing newline character at end of file");
    }

    #[test]
    fn displays_path_without_position() {
        let mut message = LintMessage::new(RuleId::new("no-tabs"), "Use spaces instead of hard-tabs")
            .with_file("doc.md")
            .with_position(Point::new(2, 4, 9));
        message.strip_position();

        assert_eq!(message.to_string(), "doc.md: Use spaces instead of hard-tabs");
        assert!(message.start().is_none());
    }

    #[test]
    fn start_of_range() {
        let message = LintMessage::new(RuleId::new("x"), "y").with_position(range(2, 3, 4, 5));
        assert_eq!(message.start(), Some(Point::new(2, 3, 0)));
    }
}
