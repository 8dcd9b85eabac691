use crate::deps::{
    node_install_instructions, DependencyCheck, DependencyChecker, DependencyStatus,
};
use anyhow::{Context, Result};
use semver::Version;
use std::process::Command;
use which::which;

/// Oldest Node.js release supported by current Playwright versions
pub const MIN_NODE_VERSION: &str = "18.0.0";

#[derive(Debug)]
pub struct NodeChecker {
    min_version: String,
}

impl NodeChecker {
    pub fn new() -> Self {
        Self {
            min_version: MIN_NODE_VERSION.to_string(),
        }
    }

    pub fn with_min_version(mut self, version: impl Into<String>) -> Self {
        self.min_version = version.into();
        self
    }

    fn get_node_version() -> Result<String> {
        let output = Command::new("node")
            .arg("--version")
            .output()
            .context("Failed to execute node --version")?;

        if !output.status.success() {
            anyhow::bail!("node --version failed with status: {}", output.status);
        }

        let version_str = String::from_utf8(output.stdout)
            .context("Failed to parse node version output as UTF-8")?;

        Ok(strip_version_prefix(&version_str))
    }

    fn compare_versions(&self, installed: &str) -> Result<DependencyStatus> {
        let installed_version =
            Version::parse(installed).context("Failed to parse installed Node.js version")?;
        let required_version =
            Version::parse(&self.min_version).context("Failed to parse required Node.js version")?;

        if installed_version < required_version {
            Ok(DependencyStatus::VersionMismatch {
                installed: installed.to_string(),
                required: self.min_version.clone(),
            })
        } else {
            Ok(DependencyStatus::Installed {
                version: Some(installed.to_string()),
            })
        }
    }
}

impl Default for NodeChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Node prints versions as `v20.11.1`
fn strip_version_prefix(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed).to_string()
}

impl DependencyChecker for NodeChecker {
    fn check(&self) -> Result<DependencyCheck> {
        let status = if which("node").is_err() {
            DependencyStatus::Missing
        } else {
            match Self::get_node_version() {
                Ok(version) => self
                    .compare_versions(&version)
                    .unwrap_or(DependencyStatus::Installed {
                        version: Some(version),
                    }),
                Err(_) => DependencyStatus::Missing,
            }
        };

        Ok(DependencyCheck {
            dependency: "Node.js",
            required_version: Some(self.min_version.clone()),
            status,
            install_instructions: node_install_instructions(),
        })
    }
}
