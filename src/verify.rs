//! Optional first run of the generated suite.
//!
//! The example tests target a live site, so a run that ends with failing
//! tests (exit code 1) is reported but does not fail the scaffold.

use colored::Colorize;
use std::path::Path;

use crate::core::Configuration;
use crate::error::{Result, ScaffoldError};
use crate::prompt::Prompter;
use crate::runner::{CommandRunner, OutputMode};

/// How a completed test run is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    /// The runner finished but some tests failed
    ExpectedFailures,
}

/// Map a test-runner exit code onto an outcome.
///
/// 0 passes, 1 means failing tests; anything else (including a missing code)
/// means the runner itself broke.
pub fn classify_exit(command: &str, exit_code: Option<i32>) -> Result<RunOutcome> {
    match exit_code {
        Some(0) => Ok(RunOutcome::Passed),
        Some(1) => Ok(RunOutcome::ExpectedFailures),
        other => Err(ScaffoldError::command_failed(command, other)),
    }
}

/// Arguments for `npx playwright test` against the generated config
pub fn test_command_args(config: &Configuration) -> Vec<String> {
    vec![
        "playwright".to_string(),
        "test".to_string(),
        "--config".to_string(),
        format!("{}/playwright.config.ts", config.test_dir_name),
    ]
}

pub struct VerifyStep<'a> {
    runner: &'a CommandRunner,
}

impl<'a> VerifyStep<'a> {
    pub fn new(runner: &'a CommandRunner) -> Self {
        Self { runner }
    }

    /// Ask, then run the suite. `None` when the user declined.
    pub fn run(
        &self,
        prompter: &dyn Prompter,
        config: &Configuration,
        root: &Path,
    ) -> Result<Option<RunOutcome>> {
        if !prompter.confirm("Run the example tests now?", true)? {
            println!("{} Skipping test run", "→".blue());
            return Ok(None);
        }

        self.verify(config, root).map(Some)
    }

    pub fn verify(&self, config: &Configuration, root: &Path) -> Result<RunOutcome> {
        let args = test_command_args(config);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        println!(
            "{} Running {}",
            "🧪".blue(),
            self.runner.display_command("npx", &args).cyan()
        );

        let outcome = self.runner.run("npx", &args, root, OutputMode::Inherit)?;
        let result = classify_exit(&outcome.command, outcome.exit_code)?;

        match result {
            RunOutcome::Passed => println!("  {} All example tests passed", "✓".green()),
            RunOutcome::ExpectedFailures => {
                tracing::info!(command = %outcome.command, "Test run finished with failures");
                println!(
                    "  {} Some example tests failed. They target {}; point them at your own app.",
                    "⚠".yellow(),
                    config.base_url.cyan()
                );
            }
        }

        Ok(result)
    }
}
