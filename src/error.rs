use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum ScaffoldError {
    DirectoryCreation {
        path: String,
        source: std::io::Error,
    },
    WorkingDirectory {
        path: String,
        source: std::io::Error,
    },
    WriteFailed {
        path: String,
        source: anyhow::Error,
    },
    MissingDependency {
        dependency: String,
        required_version: Option<String>,
        guidance: String,
    },
    VersionMismatch {
        dependency: String,
        current_version: String,
        required_version: String,
        guidance: String,
    },
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
    },
    Prompt(String),
    Other(anyhow::Error),
}

impl ScaffoldError {
    pub fn directory_creation(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    pub fn working_directory(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::WorkingDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn missing_dependency(
        dependency: impl Into<String>,
        required_version: Option<String>,
        guidance: impl Into<String>,
    ) -> Self {
        Self::MissingDependency {
            dependency: dependency.into(),
            required_version,
            guidance: guidance.into(),
        }
    }

    pub fn version_mismatch(
        dependency: impl Into<String>,
        current_version: impl Into<String>,
        required_version: impl Into<String>,
        guidance: impl Into<String>,
    ) -> Self {
        Self::VersionMismatch {
            dependency: dependency.into(),
            current_version: current_version.into(),
            required_version: required_version.into(),
            guidance: guidance.into(),
        }
    }

    pub fn command_failed(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
        }
    }
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryCreation { path, source } => {
                writeln!(f, "{} Could not create directory", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::WorkingDirectory { path, source } => {
                writeln!(
                    f,
                    "{} Could not switch into the framework directory",
                    "✗".red().bold()
                )?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::WriteFailed { path, source } => {
                writeln!(
                    f,
                    "{} Failed to write file: {}",
                    "✗".red().bold(),
                    path.yellow()
                )?;
                writeln!(f, "  {} Error: {:#}", "→".blue(), source)?;
                writeln!(
                    f,
                    "  {} Files written before this one were left in place",
                    "→".blue()
                )?;
                Ok(())
            }
            Self::MissingDependency {
                dependency,
                required_version,
                guidance,
            } => {
                writeln!(
                    f,
                    "{} Missing dependency: {}",
                    "✗".red().bold(),
                    dependency.yellow()
                )?;
                if let Some(version) = required_version {
                    writeln!(f, "  {} Required version: {}", "→".blue(), version)?;
                }
                writeln!(f)?;
                writeln!(f, "{}", "How to install:".green().bold())?;
                writeln!(f, "  {guidance}")?;
                Ok(())
            }
            Self::VersionMismatch {
                dependency,
                current_version,
                required_version,
                guidance,
            } => {
                writeln!(
                    f,
                    "{} Version mismatch for: {}",
                    "✗".red().bold(),
                    dependency.yellow()
                )?;
                writeln!(
                    f,
                    "  {} Current version: {}",
                    "→".blue(),
                    current_version.red()
                )?;
                writeln!(
                    f,
                    "  {} Required version: {}",
                    "→".blue(),
                    required_version.green()
                )?;
                writeln!(f)?;
                writeln!(f, "{}", "How to upgrade:".green().bold())?;
                writeln!(f, "  {guidance}")?;
                Ok(())
            }
            Self::CommandFailed { command, exit_code } => {
                writeln!(
                    f,
                    "{} Command failed: {}",
                    "✗".red().bold(),
                    command.yellow()
                )?;
                match exit_code {
                    Some(code) => writeln!(f, "  {} Exit status: {}", "→".blue(), code)?,
                    None => writeln!(
                        f,
                        "  {} Process did not exit normally (terminated by a signal or failed to start)",
                        "→".blue()
                    )?,
                }
                Ok(())
            }
            Self::Prompt(message) => write!(f, "{} Prompt failed: {}", "✗".red().bold(), message),
            Self::Other(err) => write!(f, "{} {:#}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreation { source, .. } | Self::WorkingDirectory { source, .. } => {
                Some(source)
            }
            Self::WriteFailed { source, .. } => Some(source.as_ref()),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(anyhow::Error::new(err))
    }
}

impl From<anyhow::Error> for ScaffoldError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
