//! Test fixtures and data builders for consistent test data

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::{BrowserProject, Configuration, WorkerCount};

/// A configuration with every field set away from its default
pub fn sample_configuration() -> Configuration {
    Configuration {
        test_dir_name: "e2e".to_string(),
        framework_root: PathBuf::from("/tmp/playwright-framework"),
        base_url: "http://localhost:3000".to_string(),
        max_workers: WorkerCount::Fixed(2),
        retries: 3,
        browser_projects: BTreeSet::from([BrowserProject::Webkit]),
    }
}

/// A configuration selecting every browser project
pub fn all_browsers_configuration() -> Configuration {
    Configuration {
        browser_projects: BrowserProject::ALL.into_iter().collect(),
        ..sample_configuration()
    }
}

/// A configuration rooted at the given directory
pub fn configuration_at(root: impl Into<PathBuf>) -> Configuration {
    Configuration {
        framework_root: root.into(),
        ..sample_configuration()
    }
}
