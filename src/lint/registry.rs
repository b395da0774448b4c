//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] is the explicit table of available rules. Rules are
//! kept sorted by id so discovery order is deterministic, and are shared
//! (`Arc`) so any number of pipelines can attach the same instance.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::rule::{Rule, RuleId};
use super::rules::{
    FinalNewlineRule, FirstHeadingLevelRule, HeadingIncrementRule, NoDuplicateHeadingsRule,
    NoHeadingPunctuationRule, NoMultipleToplevelHeadingsRule, NoTabsRule,
};

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FinalNewlineRule));
        registry.register(Arc::new(FirstHeadingLevelRule));
        registry.register(Arc::new(HeadingIncrementRule));
        registry.register(Arc::new(NoDuplicateHeadingsRule));
        registry.register(Arc::new(NoHeadingPunctuationRule));
        registry.register(Arc::new(NoMultipleToplevelHeadingsRule));
        registry.register(Arc::new(NoTabsRule));
        registry
    }

    /// Register a lint rule, replacing any rule with the same id.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<Arc<dyn Rule>> {
        self.rules.get(id).cloned()
    }

    /// Rule ids in sorted order.
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.keys().cloned().collect()
    }

    /// Iterate over all rules in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.values()
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleContext;
    use crate::markdown::Node;
    use serde_json::Value;

    struct MockRule {
        id: RuleId,
    }

    impl Rule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn check(
            &self,
            _tree: &Node,
            _ctx: &mut RuleContext<'_>,
            _options: Option<&Value>,
        ) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Arc::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_ids_are_sorted() {
        let mut registry = RuleRegistry::new();
        registry.register(Arc::new(MockRule {
            id: RuleId::new("zeta"),
        }));
        registry.register(Arc::new(MockRule {
            id: RuleId::new("alpha"),
        }));

        assert_eq!(
            registry.rule_ids(),
            vec![RuleId::new("alpha"), RuleId::new("zeta")]
        );
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_with_builtins_has_rules() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.len(), 7);
        for id in [
            "final-newline",
            "first-heading-level",
            "heading-increment",
            "no-duplicate-headings",
            "no-heading-punctuation",
            "no-multiple-toplevel-headings",
            "no-tabs",
        ] {
            assert!(registry.get(&RuleId::new(id)).is_some(), "missing {}", id);
        }
    }
}
