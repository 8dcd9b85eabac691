//! Normalization of raw prompt answers
//!
//! Every function here is total: blank or malformed input degrades to a
//! default instead of producing an error, so scaffolding is never blocked by
//! a bad answer.

use std::path::{Component, Path, PathBuf};

use crate::core::config::{
    WorkerCount, DEFAULT_BASE_URL, DEFAULT_ROOT_NAME, DEFAULT_TEST_DIR_NAME, UNBOUNDED_SENTINEL,
};

/// Where the framework goes: a root directory plus the nested test directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    pub framework_root: PathBuf,
    pub test_dir_name: String,
}

/// Default target: `<parent of cwd>/playwright-framework/tests`
pub fn default_target_path(cwd: &Path) -> PathBuf {
    let parent = cwd.parent().unwrap_or(cwd);
    parent.join(DEFAULT_ROOT_NAME).join(DEFAULT_TEST_DIR_NAME)
}

/// Split the chosen path into framework root and test directory name.
///
/// Relative answers are resolved against `cwd`. A path without a usable
/// final component (`/`, `..`) keeps the whole path as the root and uses the
/// default test directory name.
pub fn resolve_target_path(raw: &str, cwd: &Path) -> TargetPath {
    let trimmed = raw.trim();
    let chosen = if trimmed.is_empty() {
        default_target_path(cwd)
    } else {
        cwd.join(trimmed)
    };

    match chosen.components().next_back() {
        Some(Component::Normal(name)) => {
            let root = chosen
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            TargetPath {
                framework_root: root,
                test_dir_name: name.to_string_lossy().into_owned(),
            }
        }
        _ => TargetPath {
            framework_root: chosen,
            test_dir_name: DEFAULT_TEST_DIR_NAME.to_string(),
        },
    }
}

/// Blank answers fall back to the default URL; anything else is kept verbatim
pub fn resolve_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether the URL would parse; used only for a warning, never to reject
pub fn looks_like_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Parse a worker count. `0` and `unbounded` mean "let Playwright decide".
pub fn parse_workers(raw: &str, default: WorkerCount) -> WorkerCount {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(UNBOUNDED_SENTINEL) {
        return WorkerCount::OsDefault;
    }

    match trimmed.parse::<u32>() {
        Ok(0) => WorkerCount::OsDefault,
        Ok(count) => WorkerCount::Fixed(count),
        Err(_) => default,
    }
}

/// Parse a non-negative retry count
pub fn parse_retries(raw: &str, default: u32) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(default)
}
