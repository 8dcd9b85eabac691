use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::error::{Result, ScaffoldError};
use crate::logging;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    pub fn detect() -> Self {
        match env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOS,
            "linux" => Platform::Linux,
            other => {
                tracing::warn!(os = other, "Unknown platform, defaulting to Linux behavior");
                Platform::Linux
            }
        }
    }
}

/// How a child process' output is handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    /// Stream straight to the terminal
    Inherit,
    /// Capture behind a spinner; printed only on failure
    Captured,
}

/// How an external command ended
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub command: String,
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Treat anything but a clean exit as fatal
    pub fn into_result(self) -> Result<()> {
        if self.success() {
            Ok(())
        } else {
            Err(ScaffoldError::command_failed(self.command, self.exit_code))
        }
    }
}

pub struct CommandRunner {
    platform: Platform,
    verbose: bool,
}

impl CommandRunner {
    pub fn new(platform: Platform, verbose: bool) -> Self {
        Self { platform, verbose }
    }

    /// Node tool name for the platform (`npx` becomes `npx.cmd` on Windows)
    pub fn program_for(&self, tool: &str) -> String {
        match self.platform {
            Platform::Windows if matches!(tool, "npm" | "npx") => format!("{tool}.cmd"),
            _ => tool.to_string(),
        }
    }

    /// Human-readable form of an invocation
    pub fn display_command(&self, tool: &str, args: &[&str]) -> String {
        let mut parts = vec![self.program_for(tool)];
        parts.extend(args.iter().map(|arg| arg.to_string()));
        parts.join(" ")
    }

    /// Run a tool synchronously in `dir` and report how it exited.
    ///
    /// Only a failure to start the process is an error here; a non-zero exit
    /// is returned for the caller to classify.
    pub fn run(&self, tool: &str, args: &[&str], dir: &Path, mode: OutputMode) -> Result<CommandOutcome> {
        let program = self.program_for(tool);
        let display = self.display_command(tool, args);

        if self.verbose {
            eprintln!("{} Executing: {} (in {})", "ℹ".blue(), display, dir.display());
        }

        if which::which(&program).is_err() {
            tracing::error!(program = %program, "Executable not found in PATH");
            return Err(ScaffoldError::command_failed(display, None));
        }

        let mut cmd = Command::new(&program);
        cmd.args(args).current_dir(dir);

        let exit_code = match mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .with_context(|| format!("Failed to execute command: {display}"))?;
                status.code()
            }
            OutputMode::Captured => {
                let spinner = spinner(&display)?;
                let output = cmd
                    .stdin(Stdio::null())
                    .output()
                    .with_context(|| format!("Failed to execute command: {display}"));
                spinner.finish_and_clear();
                let output = output?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    for line in tail(&stderr, 20) {
                        eprintln!("    {}", line.dimmed());
                    }
                }
                output.status.code()
            }
        };

        logging::log_command_run(&display, exit_code);

        Ok(CommandOutcome {
            command: display,
            exit_code,
        })
    }
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template("  {spinner:.green} {msg}")
        .map_err(|e| anyhow::anyhow!("Invalid progress template: {e}"))?;
    let bar = ProgressBar::new_spinner();
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Ok(bar)
}

/// Last `count` non-empty lines of `text`
fn tail(text: &str, count: usize) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].to_vec()
}
