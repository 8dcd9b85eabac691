//! Custom assertions for E2E testing
//!
//! Provides domain-specific assertions for pw-scaffold command output and
//! the framework files it writes.

#![allow(dead_code)]

use super::CommandResult;
use std::fs;
use std::path::Path;

/// Files every scaffold writes, relative to the framework root.
/// `{}` stands for the test directory name.
pub const FRAMEWORK_FILES: &[&str] = &[
    "package.json",
    ".gitignore",
    "tsconfig.json",
    "README.md",
    "{}/playwright.config.ts",
    "{}/fixtures/test-fixtures.ts",
    "{}/pages/base-page.ts",
    "{}/pages/home-page.ts",
    "{}/utils/helpers.ts",
    "{}/data/test-data.json",
    "{}/specs/home.spec.ts",
    "{}/specs/navigation.spec.ts",
    "{}/specs/api.spec.ts",
];

/// Assert that a command succeeded
pub fn assert_command_success(result: &CommandResult) {
    assert!(
        result.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        result.args(),
        result.stdout_string(),
        result.stderr_string()
    );
}

/// Assert that a command exited with a specific code
pub fn assert_command_exit_code(result: &CommandResult, expected_code: i32) {
    match result.exit_code() {
        Some(code) => assert_eq!(
            code,
            expected_code,
            "Command exited with code {} but expected {}\nstdout: {}\nstderr: {}",
            code,
            expected_code,
            result.stdout_string(),
            result.stderr_string()
        ),
        None => panic!(
            "Command was terminated by signal, expected exit code {}\nstdout: {}\nstderr: {}",
            expected_code,
            result.stdout_string(),
            result.stderr_string()
        ),
    }
}

/// Assert that stdout contains specific text
pub fn assert_stdout_contains(result: &CommandResult, expected: &str) {
    let stdout = result.stdout_string();
    assert!(
        stdout.contains(expected),
        "stdout does not contain '{expected}'\nActual stdout: {stdout}"
    );
}

/// Assert that stderr contains specific text
pub fn assert_stderr_contains(result: &CommandResult, expected: &str) {
    let stderr = result.stderr_string();
    assert!(
        stderr.contains(expected),
        "stderr does not contain '{expected}'\nActual stderr: {stderr}"
    );
}

/// Assert that a file exists
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(
        path.is_file(),
        "Expected file to exist: {}",
        path.display()
    );
}

/// Assert that a path does not exist
pub fn assert_not_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(
        !path.exists(),
        "Expected path to not exist: {}",
        path.display()
    );
}

/// Assert that a file contains specific text
pub fn assert_file_contains<P: AsRef<Path>>(path: P, expected: &str) {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
    assert!(
        contents.contains(expected),
        "File {} does not contain '{}'\nActual contents: {}",
        path.display(),
        expected,
        contents
    );
}

/// Assert that the full framework layout exists under `root`
pub fn assert_framework_written<P: AsRef<Path>>(root: P, test_dir: &str) {
    let root = root.as_ref();
    for file in FRAMEWORK_FILES {
        let relative = file.replace("{}", test_dir);
        assert_file_exists(root.join(relative));
    }
}

/// Assert that help output is properly formatted
pub fn assert_help_text_formatted(result: &CommandResult) {
    assert_command_success(result);
    let stdout = result.stdout_string();
    assert!(stdout.contains("Usage:"), "Help text should contain 'Usage:'");
    assert!(stdout.contains("Options:"), "Help text should contain 'Options:'");
    assert!(stdout.contains("--help"), "Help text should mention --help");
}

/// Assert that version output is properly formatted
pub fn assert_version_output(result: &CommandResult) {
    assert_command_success(result);
    let stdout = result.stdout_string();
    assert!(
        stdout.contains("pw-scaffold"),
        "Version output should contain the binary name"
    );
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Version output should contain the package version"
    );
}
