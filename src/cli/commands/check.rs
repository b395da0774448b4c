//! Check command implementation.
//!
//! The `marklint check` command lints markdown files with the configured rules.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{find_config, load_config_file, LintConfig};
use crate::error::{LintError, Result};
use crate::lint::{
    HumanFormatter, JsonFormatter, LintFile, LintFormatter, LintMessage, Outcome, OutputFormat,
    Pipeline, RuleRegistry,
};

use super::dispatcher::{Command, CommandResult};

/// Exit code for fatal messages and rule failures.
const EXIT_FATAL: i32 = 1;
/// Exit code for configuration errors.
const EXIT_CONFIG: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Load the explicit config, the discovered one, or enable every rule.
    fn load_config(&self, registry: &RuleRegistry) -> Result<LintConfig> {
        if let Some(path) = &self.config_path {
            return load_config_file(path);
        }
        match find_config(&self.project_root) {
            Some(path) => {
                tracing::debug!("Using config {}", path.display());
                load_config_file(&path)
            }
            None => {
                tracing::debug!("No config found, enabling all rules");
                Ok(LintConfig::all_rules(registry))
            }
        }
    }

    fn build_pipeline(&self) -> Result<(Pipeline, OutputFormat)> {
        let format = self
            .args
            .format
            .parse::<OutputFormat>()
            .map_err(|message| LintError::Other(anyhow::anyhow!(message)))?;
        let registry = RuleRegistry::with_builtins();
        let config = self.load_config(&registry)?;
        Ok((Pipeline::from_config(&registry, &config)?, format))
    }

    fn format_output(
        &self,
        format: OutputFormat,
        messages: &[LintMessage],
        mut out: &mut dyn Write,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => JsonFormatter::new().format(messages, &mut out)?,
            OutputFormat::Human => HumanFormatter::new().format(messages, &mut out)?,
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult> {
        let (pipeline, format) = match self.build_pipeline() {
            Ok(built) => built,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                return Ok(CommandResult::failure(EXIT_CONFIG));
            }
        };

        let mut messages = Vec::new();
        let mut failed = false;

        for path in &self.args.files {
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    writeln!(err, "{}: {}", path.display(), e)?;
                    failed = true;
                    continue;
                }
            };
            let file = LintFile::new(contents).with_path(path.display().to_string());

            match pipeline.process(file) {
                Outcome::ProcessingFailure(failure) => {
                    writeln!(err, "{}", failure)?;
                    let engine_message = failure.is_engine().then(|| failure.message());
                    messages.extend(failure.file.into_messages());
                    messages.extend(engine_message);
                    failed = true;
                }
                outcome => messages.extend(outcome.into_result()?.into_messages()),
            }
        }

        self.format_output(format, &messages, out)?;

        if failed || messages.iter().any(|m| m.fatal == Some(true)) {
            Ok(CommandResult::failure(EXIT_FATAL))
        } else {
            Ok(CommandResult::success())
        }
    }
}
