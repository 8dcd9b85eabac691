pub mod node;

use anyhow::Result;
use std::fmt;

use crate::error::ScaffoldError;

pub use node::{NodeChecker, MIN_NODE_VERSION};

#[derive(Debug, Clone)]
pub struct DependencyCheck {
    pub dependency: &'static str,
    pub required_version: Option<String>,
    pub status: DependencyStatus,
    pub install_instructions: InstallInstructions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DependencyStatus {
    Installed { version: Option<String> },
    Missing,
    VersionMismatch { installed: String, required: String },
}

#[derive(Debug, Clone, Default)]
pub struct InstallInstructions {
    pub windows: Vec<InstallMethod>,
    pub macos: Vec<InstallMethod>,
    pub linux: Vec<InstallMethod>,
}

#[derive(Debug, Clone)]
pub struct InstallMethod {
    pub name: String,
    pub command: String,
}

pub trait DependencyChecker {
    fn check(&self) -> Result<DependencyCheck>;
}

impl DependencyCheck {
    /// Turn a failed check into the matching fatal error
    pub fn ensure_installed(self) -> std::result::Result<Option<String>, ScaffoldError> {
        let guidance = self.install_instructions.guidance();
        match self.status {
            DependencyStatus::Installed { version } => Ok(version),
            DependencyStatus::Missing => Err(ScaffoldError::missing_dependency(
                self.dependency,
                self.required_version,
                guidance,
            )),
            DependencyStatus::VersionMismatch {
                installed,
                required,
            } => Err(ScaffoldError::version_mismatch(
                self.dependency,
                installed,
                required,
                guidance,
            )),
        }
    }
}

impl fmt::Display for DependencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyStatus::Installed { version } => {
                if let Some(v) = version {
                    write!(f, "Installed ({v})")
                } else {
                    write!(f, "Installed")
                }
            }
            DependencyStatus::Missing => write!(f, "Not installed"),
            DependencyStatus::VersionMismatch {
                installed,
                required,
            } => {
                write!(
                    f,
                    "Version mismatch (installed: {installed}, required: {required})"
                )
            }
        }
    }
}

impl InstallInstructions {
    pub fn for_platform(&self) -> &[InstallMethod] {
        #[cfg(target_os = "windows")]
        return &self.windows;

        #[cfg(target_os = "macos")]
        return &self.macos;

        #[cfg(target_os = "linux")]
        return &self.linux;

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        return &[];
    }

    /// One line per install method for the current platform
    pub fn guidance(&self) -> String {
        let methods = self.for_platform();
        if methods.is_empty() {
            return "See https://nodejs.org/en/download/".to_string();
        }
        methods
            .iter()
            .map(|method| format!("{}: {}", method.name, method.command))
            .collect::<Vec<_>>()
            .join("\n  ")
    }
}

impl InstallMethod {
    fn new(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
        }
    }
}

type MethodTable = &'static [(&'static str, &'static str)];

struct InstallConfig {
    windows: MethodTable,
    macos: MethodTable,
    linux: MethodTable,
}

impl InstallConfig {
    fn to_instructions(&self) -> InstallInstructions {
        let convert = |table: MethodTable| -> Vec<InstallMethod> {
            table
                .iter()
                .map(|(name, cmd)| InstallMethod::new(name, cmd))
                .collect()
        };
        InstallInstructions {
            windows: convert(self.windows),
            macos: convert(self.macos),
            linux: convert(self.linux),
        }
    }
}

const NODEJS_CONFIG: InstallConfig = InstallConfig {
    windows: &[
        ("winget", "winget install OpenJS.NodeJS.LTS"),
        ("chocolatey", "choco install nodejs-lts"),
        ("download", "https://nodejs.org/en/download/"),
    ],
    macos: &[
        ("homebrew", "brew install node@20"),
        ("download", "https://nodejs.org/en/download/"),
    ],
    linux: &[
        ("nvm", "nvm install --lts"),
        ("apt", "sudo apt update && sudo apt install nodejs npm"),
        ("dnf", "sudo dnf install nodejs npm"),
    ],
};

pub fn node_install_instructions() -> InstallInstructions {
    NODEJS_CONFIG.to_instructions()
}
