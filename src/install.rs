//! Dependency installation for a freshly scaffolded framework.
//!
//! Checks that a recent enough Node.js is available, then runs `npm install`
//! followed by `npx playwright install` in the framework root. Every step is
//! blocking and any non-zero exit aborts the run.

use colored::Colorize;
use std::path::Path;

use crate::deps::{DependencyChecker, NodeChecker};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::runner::{CommandRunner, OutputMode};

/// Commands run by the install step, in order
pub const INSTALL_COMMANDS: &[(&str, &[&str])] = &[
    ("npm", &["install"]),
    ("npx", &["playwright", "install"]),
];

pub struct InstallStep<'a> {
    runner: &'a CommandRunner,
    checker: Box<dyn DependencyChecker + 'a>,
    verbose: bool,
}

impl<'a> InstallStep<'a> {
    pub fn new(runner: &'a CommandRunner, verbose: bool) -> Self {
        Self {
            runner,
            checker: Box::new(NodeChecker::new()),
            verbose,
        }
    }

    pub fn with_checker(mut self, checker: Box<dyn DependencyChecker + 'a>) -> Self {
        self.checker = checker;
        self
    }

    /// Ask, then install. Returns whether anything was installed.
    pub fn run(&self, prompter: &dyn Prompter, root: &Path) -> Result<bool> {
        if !prompter.confirm("Install dependencies now (npm install + browsers)?", true)? {
            println!("{} Skipping dependency installation", "→".blue());
            return Ok(false);
        }

        self.install(root)?;
        Ok(true)
    }

    /// Install without asking
    pub fn install(&self, root: &Path) -> Result<()> {
        println!("{} Checking Node.js...", "🔍".blue());
        let check = self.checker.check()?;
        let version = check.ensure_installed()?;
        println!(
            "  {} Node.js {}",
            "✓".green(),
            version.as_deref().unwrap_or("(version unknown)").cyan()
        );

        let mode = if self.verbose {
            OutputMode::Inherit
        } else {
            OutputMode::Captured
        };

        for (tool, args) in INSTALL_COMMANDS {
            println!(
                "{} Running {}",
                "→".green(),
                self.runner.display_command(tool, args).cyan()
            );
            self.runner.run(tool, args, root, mode)?.into_result()?;
        }

        println!("  {} Dependencies installed", "✓".green());
        Ok(())
    }
}
