//! Interactive collection of scaffold settings.
//!
//! The collector asks one question per configuration field and feeds each
//! raw answer through the normalizers in [`crate::core`]. A field can also be
//! preset (from command-line flags), in which case its prompt is skipped but
//! the answer is normalized exactly the same way.
//!
//! Resolving the target path has a side effect: the framework root is created
//! and becomes the process working directory. Nothing undoes this if a later
//! step fails.

use colored::Colorize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::{
    Configuration, DEFAULT_BASE_URL, DEFAULT_RETRIES, DEFAULT_WORKERS, UNBOUNDED_SENTINEL,
};
use crate::core::normalize::{
    default_target_path, looks_like_url, parse_retries, parse_workers, resolve_base_url,
    resolve_target_path,
};
use crate::core::parse_browser_selection;
use crate::error::{Result, ScaffoldError};
use crate::logging;
use crate::prompt::Prompter;

/// Answers supplied up front instead of through a prompt
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub path: Option<String>,
    pub base_url: Option<String>,
    pub workers: Option<String>,
    pub retries: Option<String>,
    pub browsers: Option<String>,
}

pub struct SettingsCollector<'a> {
    prompter: &'a dyn Prompter,
    presets: Answers,
    cwd: Option<PathBuf>,
    enter_root: bool,
}

impl<'a> SettingsCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self {
            prompter,
            presets: Answers::default(),
            cwd: None,
            enter_root: true,
        }
    }

    pub fn with_presets(mut self, presets: Answers) -> Self {
        self.presets = presets;
        self
    }

    /// Resolve relative paths against `cwd` instead of the process directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Skip creating and entering the framework root
    pub fn without_entering_root(mut self) -> Self {
        self.enter_root = false;
        self
    }

    /// Run every prompt and return the resolved configuration
    pub fn collect(&self) -> Result<Configuration> {
        let cwd = match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => env::current_dir().map_err(|e| ScaffoldError::working_directory(".", e))?,
        };

        let default_path = default_target_path(&cwd);
        let raw_path = self.answer(
            self.presets.path.as_deref(),
            "Where should the test framework be created?",
            &default_path.display().to_string(),
        )?;
        let target = resolve_target_path(&raw_path, &cwd);

        let framework_root = if self.enter_root {
            enter_root(&target.framework_root)?
        } else {
            target.framework_root
        };

        let raw_url = self.answer(self.presets.base_url.as_deref(), "Base URL", DEFAULT_BASE_URL)?;
        let base_url = resolve_base_url(&raw_url);
        if !looks_like_url(&base_url) {
            logging::log_unparsed_base_url(&base_url);
        }

        let raw_workers = self.answer(
            self.presets.workers.as_deref(),
            &format!("Max parallel workers (0 or '{UNBOUNDED_SENTINEL}' for OS default)"),
            "OS default",
        )?;
        let max_workers = parse_workers(&raw_workers, DEFAULT_WORKERS);

        let raw_retries = self.answer(
            self.presets.retries.as_deref(),
            "Retries for failing tests",
            &DEFAULT_RETRIES.to_string(),
        )?;
        let retries = parse_retries(&raw_retries, DEFAULT_RETRIES);

        let raw_browsers = self.answer(
            self.presets.browsers.as_deref(),
            "Browsers (comma-separated: chromium, firefox, webkit, mobile-chrome)",
            "chromium, firefox",
        )?;
        let selection = parse_browser_selection(&raw_browsers);
        for token in &selection.discarded {
            logging::log_token_discarded(token);
            println!("  {} Ignoring unknown browser: {}", "⚠".yellow(), token.yellow());
        }
        if selection.defaulted && !raw_browsers.trim().is_empty() {
            println!(
                "  {} No recognized browsers, using the default set",
                "ℹ".blue()
            );
        }

        let config = Configuration {
            test_dir_name: target.test_dir_name,
            framework_root,
            base_url,
            max_workers,
            retries,
            browser_projects: selection.projects,
        };
        logging::log_configuration_resolved(&config);

        Ok(config)
    }

    fn answer(&self, preset: Option<&str>, prompt: &str, hint: &str) -> Result<String> {
        match preset {
            Some(value) => Ok(value.to_string()),
            None => self.prompter.input(prompt, hint),
        }
    }
}

/// Create the framework root if needed and make it the working directory.
///
/// Returns the absolute path of the new working directory.
pub fn enter_root(root: &Path) -> Result<PathBuf> {
    if let Err(err) = fs::create_dir_all(root) {
        if err.kind() != io::ErrorKind::AlreadyExists {
            return Err(ScaffoldError::directory_creation(
                root.display().to_string(),
                err,
            ));
        }
    }

    env::set_current_dir(root)
        .map_err(|e| ScaffoldError::working_directory(root.display().to_string(), e))?;

    env::current_dir().map_err(|e| ScaffoldError::working_directory(root.display().to_string(), e))
}
