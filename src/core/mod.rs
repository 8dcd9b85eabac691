//! Core scaffolding logic
//!
//! Pure functions and value types with no I/O: the resolved configuration,
//! answer normalization and the browser classifier. Prompting and file
//! writing live in the modules that call into this one.

pub mod browser;
pub mod config;
pub mod normalize;

#[cfg(test)]
mod browser_proptest;

#[cfg(test)]
mod normalize_proptest;

pub use browser::{classify_token, parse_browser_selection, BrowserProject, BrowserSelection};
pub use config::{default_browsers, Configuration, WorkerCount};
pub use normalize::{
    parse_retries, parse_workers, resolve_base_url, resolve_target_path, TargetPath,
};
