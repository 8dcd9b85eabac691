//! Common utilities for E2E testing
//!
//! Provides helpers for binary execution, temporary directories,
//! and test environment setup.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Flags that keep a run offline and non-interactive
pub const NON_INTERACTIVE: &[&str] = &["--yes", "--skip-install", "--skip-verify"];

/// Test environment for E2E tests
pub struct TestEnvironment {
    /// Temporary directory the binary runs in
    pub temp_dir: TempDir,
    /// Path to the pw-scaffold binary
    pub binary_path: PathBuf,
    /// Environment variables for the test
    pub env_vars: HashMap<String, String>,
}

impl TestEnvironment {
    /// Create a new test environment
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let binary_path = find_binary_path()?;

        let mut env_vars = HashMap::new();
        // Keep log output predictable regardless of the caller's RUST_LOG
        env_vars.insert("RUST_LOG".to_string(), "pw_scaffold=info".to_string());
        env_vars.insert("NO_COLOR".to_string(), "1".to_string());

        Ok(Self {
            temp_dir,
            binary_path,
            env_vars,
        })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file in the temporary directory
    pub fn create_file<P: AsRef<Path>>(&self, path: P, contents: &str) -> Result<PathBuf> {
        let full_path = self.temp_path().join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&full_path, contents)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

        Ok(full_path)
    }

    /// Create a directory in the temporary directory
    pub fn create_dir<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let full_path = self.temp_path().join(path);
        fs::create_dir_all(&full_path)
            .with_context(|| format!("Failed to create directory: {}", full_path.display()))?;
        Ok(full_path)
    }

    /// Execute the pw-scaffold binary with given arguments
    pub fn run_command(&self, args: &[&str]) -> Result<CommandResult> {
        self.run_in(self.temp_path(), args)
    }

    /// Execute the binary from a specific working directory
    pub fn run_in(&self, dir: &Path, args: &[&str]) -> Result<CommandResult> {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute command: {cmd:?}"))?;

        Ok(CommandResult {
            output,
            args: args.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Run a non-interactive scaffold with extra flags appended
    pub fn scaffold(&self, extra: &[&str]) -> Result<CommandResult> {
        let mut args: Vec<&str> = NON_INTERACTIVE.to_vec();
        args.extend_from_slice(extra);
        self.run_command(&args)
    }

    /// Execute a command and expect it to succeed
    pub fn run_success(&self, args: &[&str]) -> Result<CommandResult> {
        let result = self.run_command(args)?;
        if !result.success() {
            anyhow::bail!(
                "Command failed: {:?}\nstdout: {}\nstderr: {}",
                result.args,
                result.stdout_string(),
                result.stderr_string()
            );
        }
        Ok(result)
    }

    /// Execute a command and expect it to fail
    pub fn run_failure(&self, args: &[&str]) -> Result<CommandResult> {
        let result = self.run_command(args)?;
        if result.success() {
            anyhow::bail!(
                "Command unexpectedly succeeded: {:?}\nstdout: {}",
                result.args,
                result.stdout_string()
            );
        }
        Ok(result)
    }

    /// Set an environment variable for subsequent commands
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }
}

/// Result of executing a command
pub struct CommandResult {
    output: Output,
    args: Vec<String>,
}

impl CommandResult {
    /// Check if the command succeeded
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    /// Get the exit code
    pub fn exit_code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Get stdout as a string
    pub fn stdout_string(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    /// Get stderr as a string
    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Get the command arguments that were executed
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Find the path to the pw-scaffold binary
fn find_binary_path() -> Result<PathBuf> {
    // Cargo sets this for integration tests of crates with a binary target
    if let Some(path) = option_env!("CARGO_BIN_EXE_pw-scaffold") {
        return Ok(PathBuf::from(path));
    }

    let cargo_manifest_dir =
        env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    let project_root = PathBuf::from(cargo_manifest_dir);

    for profile in ["debug", "release"] {
        let candidate = project_root.join("target").join(profile).join(binary_name());
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    which::which("pw-scaffold").context("pw-scaffold binary not found in target directory or PATH")
}

/// Get the binary name for the current platform
fn binary_name() -> &'static str {
    if cfg!(windows) {
        "pw-scaffold.exe"
    } else {
        "pw-scaffold"
    }
}
