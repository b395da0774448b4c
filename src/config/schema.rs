//! Configuration schema definitions for marklint.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::lint::{RuleRegistry, Settings};

/// Root configuration structure for `.marklint.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Raw configuration per rule id: any severity shape, optionally with
    /// options (`[2]`, `"warn"`, `["error", ".!"]`, `false`, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Value>,

    /// File-level settings handed to every rule
    #[serde(skip_serializing_if = "Settings::is_empty")]
    pub settings: Settings,
}

impl LintConfig {
    /// Configuration enabling every rule in `registry` at its default severity.
    pub fn all_rules(registry: &RuleRegistry) -> Self {
        Self {
            rules: registry
                .rule_ids()
                .into_iter()
                .map(|id| (id.0, Value::Bool(true)))
                .collect(),
            settings: Settings::new(),
        }
    }
}
