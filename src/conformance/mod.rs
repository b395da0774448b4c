//! Fixture conformance harness.
//!
//! Every built-in rule ships a fixture file listing inputs and the exact
//! messages the rule must produce for them under each configuration. The
//! harness runs each fixture twice: once on the parsed tree, where the
//! output must match, and once with positions stripped, where the rule must
//! stay silent (unless the fixture is marked `positionless`).
//!
//! # Example
//!
//! ```
//! use marklint::conformance::check_all;
//! use marklint::lint::RuleRegistry;
//!
//! let reports = check_all(&RuleRegistry::with_builtins()).unwrap();
//! assert!(reports.iter().all(|r| r.passed()));
//! ```

pub mod fixture;
pub mod runner;

pub use fixture::{load_descriptor, preprocess, Fixture, FixtureConfig, RuleDescriptor};
pub use runner::{
    check_all, check_descriptor, check_rule, normalize, Comparison, FixtureReport, RuleReport,
};
