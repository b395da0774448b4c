//! Severity configuration.
//!
//! Rule configuration arrives in many shapes: a boolean, a number, a
//! keyword, or a list whose first element is one of those and whose second
//! element is passed through to the rule as options. [`resolve`] turns all of
//! them into one canonical [`ResolvedConfig`].
//!
//! | input                        | enabled | fatal  |
//! |------------------------------|---------|--------|
//! | absent                       | false   | -      |
//! | `true`, `2`, `"error"`       | true    | true   |
//! | `1`, `"warn"`, `"on"`        | true    | false  |
//! | `false`, `0`, `"off"`        | false   | -      |
//! | `[x, options]`               | as `x`  | as `x` |
//!
//! A bare boolean handed to [`Pipeline::attach`](super::Pipeline::attach) is
//! interpreted by the pipeline before it reaches the resolver: `false` skips
//! the rule and `true` enables it at the rule's default severity. Only
//! booleans reaching `resolve` directly (or inside a list) follow the table.

use serde_json::Value;

use crate::error::{LintError, Result};

/// Canonical severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Off = 0,
    Warn = 1,
    Error = 2,
}

impl Severity {
    /// Map an integer level onto a severity.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Map a keyword onto a severity.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "off" => Some(Severity::Off),
            "on" | "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    /// The integer level.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Raw rule configuration as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SeverityInput {
    Absent,
    Bool(bool),
    Level(i64),
    Keyword(String),
    /// A number that is not an integer; always rejected.
    Number(String),
    /// `[severity, options]`.
    List {
        severity: Box<SeverityInput>,
        options: Option<Value>,
    },
    /// Options without a severity, enabled as a warning.
    Options(Value),
}

impl From<Value> for SeverityInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SeverityInput::Absent,
            Value::Bool(b) => SeverityInput::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(level) => SeverityInput::Level(level),
                None => SeverityInput::Number(n.to_string()),
            },
            Value::String(s) => SeverityInput::Keyword(s),
            Value::Array(items)
                if items
                    .first()
                    .is_some_and(|v| v.is_boolean() || v.is_number() || v.is_string()) =>
            {
                let mut items = items.into_iter();
                let severity = items.next().map(SeverityInput::from);
                SeverityInput::List {
                    severity: Box::new(severity.unwrap_or(SeverityInput::Absent)),
                    options: items.next(),
                }
            }
            other => SeverityInput::Options(other),
        }
    }
}

impl From<Option<Value>> for SeverityInput {
    fn from(value: Option<Value>) -> Self {
        value.map(SeverityInput::from).unwrap_or(SeverityInput::Absent)
    }
}

impl From<bool> for SeverityInput {
    fn from(value: bool) -> Self {
        SeverityInput::Bool(value)
    }
}

impl From<i64> for SeverityInput {
    fn from(value: i64) -> Self {
        SeverityInput::Level(value)
    }
}

impl From<&str> for SeverityInput {
    fn from(value: &str) -> Self {
        SeverityInput::Keyword(value.to_string())
    }
}

/// Canonical rule configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub enabled: bool,
    /// `Some(true)` for errors, `Some(false)` for warnings, `None` when off.
    pub fatal: Option<bool>,
    pub options: Option<Value>,
}

impl ResolvedConfig {
    /// Configuration for a given severity.
    pub fn with_severity(severity: Severity, options: Option<Value>) -> Self {
        match severity {
            Severity::Off => Self {
                enabled: false,
                fatal: None,
                options,
            },
            Severity::Warn | Severity::Error => Self {
                enabled: true,
                fatal: Some(severity == Severity::Error),
                options,
            },
        }
    }

    /// The severity this configuration represents.
    pub fn severity(&self) -> Severity {
        match (self.enabled, self.fatal) {
            (false, _) => Severity::Off,
            (true, Some(true)) => Severity::Error,
            (true, _) => Severity::Warn,
        }
    }
}

/// Resolve a raw configuration value for the rule `rule_id`.
///
/// # Errors
///
/// Returns `InvalidSeverity` for levels outside `0..=2`, non-integer
/// numbers, and unrecognized keywords.
pub fn resolve(rule_id: &str, input: &SeverityInput) -> Result<ResolvedConfig> {
    let invalid = |value: String| LintError::InvalidSeverity {
        rule_id: rule_id.to_string(),
        value,
    };

    let severity = match input {
        SeverityInput::Absent => Severity::Off,
        SeverityInput::Bool(true) => Severity::Error,
        SeverityInput::Bool(false) => Severity::Off,
        SeverityInput::Level(level) => {
            Severity::from_level(*level).ok_or_else(|| invalid(level.to_string()))?
        }
        SeverityInput::Keyword(keyword) => {
            Severity::from_keyword(keyword).ok_or_else(|| invalid(keyword.clone()))?
        }
        SeverityInput::Number(literal) => return Err(invalid(literal.clone())),
        SeverityInput::List { severity, options } => {
            let mut resolved = resolve(rule_id, severity)?;
            resolved.options = options.clone();
            return Ok(resolved);
        }
        SeverityInput::Options(options) => {
            return Ok(ResolvedConfig::with_severity(
                Severity::Warn,
                Some(options.clone()),
            ))
        }
    };

    Ok(ResolvedConfig::with_severity(severity, None))
}
