//! Fixtures command implementation.
//!
//! The `marklint fixtures` command runs the conformance harness over the
//! built-in rules and prints each rule's description followed by one line
//! per fixture.

use std::io::Write;

use crate::cli::args::FixturesArgs;
use crate::conformance::{check_all, check_rule, Comparison, RuleReport};
use crate::error::Result;
use crate::lint::{RuleId, RuleRegistry};

use super::dispatcher::{Command, CommandResult};

/// The fixtures command implementation.
pub struct FixturesCommand {
    args: FixturesArgs,
}

impl FixturesCommand {
    /// Create a new fixtures command.
    pub fn new(args: FixturesArgs) -> Self {
        Self { args }
    }

    fn reports(&self, registry: &RuleRegistry) -> Result<Vec<RuleReport>> {
        match &self.args.rule {
            Some(rule) => Ok(vec![check_rule(registry, &RuleId::new(rule.as_str()))?]),
            None => check_all(registry),
        }
    }
}

fn write_comparison(out: &mut dyn Write, label: &str, comparison: &Comparison) -> Result<()> {
    if comparison.passed() {
        return Ok(());
    }
    writeln!(out, "    {}:", label)?;
    writeln!(out, "      expected: {:?}", comparison.expected)?;
    writeln!(out, "      actual:   {:?}", comparison.actual)?;
    Ok(())
}

impl Command for FixturesCommand {
    fn execute(&self, out: &mut dyn Write, _err: &mut dyn Write) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();
        let reports = self.reports(&registry)?;
        let mut total = 0;
        let mut failed = 0;

        for report in &reports {
            if let Some(rule) = registry.get(&report.rule_id) {
                writeln!(out, "{}: {}", report.rule_id, rule.description())?;
            }
            for fixture in &report.fixtures {
                total += 1;
                let status = if fixture.passed() { "ok" } else { "FAIL" };
                writeln!(
                    out,
                    "{:<4} {} `{}` {}",
                    status, report.rule_id, fixture.setting, fixture.name
                )?;
                if !fixture.passed() {
                    failed += 1;
                    write_comparison(out, "with positions", &fixture.with_position)?;
                    if let Some(without) = &fixture.without_position {
                        write_comparison(out, "without positions", without)?;
                    }
                }
            }
        }

        writeln!(out, "{} fixture(s), {} failed", total, failed)?;

        if failed > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
