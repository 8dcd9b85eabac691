//! The resolved scaffold configuration and its defaults
//!
//! A [`Configuration`] is assembled once by the settings collector and never
//! mutated afterwards. Every field is guaranteed to be populated.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::core::browser::BrowserProject;

/// Base URL used when the user leaves the prompt blank
pub const DEFAULT_BASE_URL: &str = "https://playwright.dev";

/// Retry count used when the answer is blank or not a number
pub const DEFAULT_RETRIES: u32 = 2;

/// Worker count used when the answer is blank or not a number
pub const DEFAULT_WORKERS: WorkerCount = WorkerCount::OsDefault;

/// Directory created next to the current directory when no path is given
pub const DEFAULT_ROOT_NAME: &str = "playwright-framework";

/// Name of the nested test-framework directory when no path is given
pub const DEFAULT_TEST_DIR_NAME: &str = "tests";

/// Literal answer that requests an unbounded worker pool
pub const UNBOUNDED_SENTINEL: &str = "unbounded";

/// Browsers selected when nothing recognizable was entered
pub fn default_browsers() -> BTreeSet<BrowserProject> {
    BTreeSet::from([BrowserProject::Chromium, BrowserProject::Firefox])
}

/// Maximum number of parallel Playwright workers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCount {
    /// A fixed pool size, always at least one
    Fixed(u32),
    /// Let Playwright pick based on the CPU count
    OsDefault,
}

impl WorkerCount {
    /// Literal emitted into `playwright.config.ts`
    pub fn as_config_literal(&self) -> String {
        match self {
            WorkerCount::Fixed(count) => count.to_string(),
            WorkerCount::OsDefault => "undefined".to_string(),
        }
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerCount::Fixed(count) => write!(f, "{count}"),
            WorkerCount::OsDefault => write!(f, "OS default"),
        }
    }
}

/// Fully resolved settings that drive template rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub test_dir_name: String,
    pub framework_root: PathBuf,
    pub base_url: String,
    pub max_workers: WorkerCount,
    pub retries: u32,
    pub browser_projects: BTreeSet<BrowserProject>,
}

impl Configuration {
    /// Comma-separated canonical browser names, in enum order
    pub fn browser_list(&self) -> String {
        self.browser_projects
            .iter()
            .map(|project| project.canonical_name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Relative path of the generated Playwright config, from the framework root
    pub fn playwright_config_path(&self) -> String {
        format!("{}/playwright.config.ts", self.test_dir_name)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            test_dir_name: DEFAULT_TEST_DIR_NAME.to_string(),
            framework_root: PathBuf::from(DEFAULT_ROOT_NAME),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_workers: DEFAULT_WORKERS,
            retries: DEFAULT_RETRIES,
            browser_projects: default_browsers(),
        }
    }
}
