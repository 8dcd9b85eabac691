//! The end-to-end scaffold flow.
//!
//! Collects settings, writes the framework files into the framework root,
//! then optionally installs dependencies and runs the example suite. Each
//! phase runs to completion before the next starts and the first error ends
//! the run.

use colored::Colorize;
use std::path::PathBuf;

use crate::collector::{Answers, SettingsCollector};
use crate::core::Configuration;
use crate::emitter::TemplateEmitter;
use crate::error::Result;
use crate::install::InstallStep;
use crate::prompt::Prompter;
use crate::runner::{CommandRunner, Platform};
use crate::verify::{RunOutcome, VerifyStep};

/// What a finished scaffold run produced
#[derive(Debug)]
pub struct ScaffoldReport {
    pub config: Configuration,
    pub written: Vec<PathBuf>,
    pub installed: bool,
    pub test_run: Option<RunOutcome>,
}

pub struct ScaffoldCommand {
    verbose: bool,
    presets: Answers,
    skip_install: bool,
    skip_verify: bool,
    platform: Platform,
}

impl ScaffoldCommand {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            presets: Answers::default(),
            skip_install: false,
            skip_verify: false,
            platform: Platform::detect(),
        }
    }

    pub fn with_presets(mut self, presets: Answers) -> Self {
        self.presets = presets;
        self
    }

    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn execute(&self, prompter: &dyn Prompter) -> Result<ScaffoldReport> {
        println!("{}", "🎭 Playwright framework scaffold".blue().bold());
        println!();

        let config = SettingsCollector::new(prompter)
            .with_presets(self.presets.clone())
            .collect()?;

        println!();
        println!(
            "{} Writing framework into {}",
            "→".green(),
            config.framework_root.display().to_string().cyan()
        );
        let written = TemplateEmitter::new(&config.framework_root)
            .with_verbose(self.verbose)
            .emit(&config)?;
        println!("  {} {} files written", "✓".green(), written.len());

        let runner = CommandRunner::new(self.platform, self.verbose);

        let installed = if self.skip_install {
            false
        } else {
            println!();
            InstallStep::new(&runner, self.verbose).run(prompter, &config.framework_root)?
        };

        // Running the suite needs the installed toolchain
        let test_run = if self.skip_verify || !installed {
            None
        } else {
            println!();
            VerifyStep::new(&runner).run(prompter, &config, &config.framework_root)?
        };

        self.print_summary(&config, installed);

        Ok(ScaffoldReport {
            config,
            written,
            installed,
            test_run,
        })
    }

    fn print_summary(&self, config: &Configuration, installed: bool) {
        println!();
        println!("{}", "✅ Framework ready!".green().bold());
        println!();
        println!("  Root:      {}", config.framework_root.display().to_string().cyan());
        println!("  Tests:     {}", config.test_dir_name.cyan());
        println!("  Base URL:  {}", config.base_url.cyan());
        println!("  Workers:   {}", config.max_workers.to_string().cyan());
        println!("  Retries:   {}", config.retries.to_string().cyan());
        println!("  Browsers:  {}", config.browser_list().cyan());
        println!();
        println!("Next steps:");
        println!("  • cd {}", config.framework_root.display().to_string().cyan());
        if !installed {
            println!("  • {}", "npm install && npx playwright install".cyan());
        }
        println!("  • {}", "npm test".cyan());
    }
}
