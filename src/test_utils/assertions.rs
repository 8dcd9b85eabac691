//! Custom assertion helpers for common test patterns

use std::fs;
use std::path::Path;

/// Asserts that a path exists and is a file
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(
        path.exists(),
        "Expected file to exist at path: {}",
        path.display()
    );
    assert!(
        path.is_file(),
        "Expected path to be a file, but it was not: {}",
        path.display()
    );
}

/// Asserts that a path exists and is a directory
pub fn assert_dir_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(
        path.is_dir(),
        "Expected directory to exist at path: {}",
        path.display()
    );
}

/// Asserts that content ends with exactly one newline
pub fn assert_single_trailing_newline(content: &str, context: &str) {
    assert!(
        content.ends_with('\n'),
        "{context}: expected a trailing newline"
    );
    assert!(
        !content.ends_with("\n\n") && !content.trim_end_matches('\n').ends_with(char::is_whitespace),
        "{context}: expected exactly one trailing newline, got {:?}",
        tail(content, 10)
    );
}

/// The last `chars` characters of `content`
fn tail(content: &str, chars: usize) -> &str {
    let start = content
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map_or(0, |(index, _)| index);
    &content[start..]
}

/// Asserts that a file contains every expected substring
pub fn assert_file_contains_all<P: AsRef<Path>>(path: P, expected: &[&str]) {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    for text in expected {
        assert!(
            content.contains(text),
            "{} does not contain '{text}'\nActual content:\n{content}",
            path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trailing_newline_accepts() {
        assert_single_trailing_newline("content\n", "ok");
    }

    #[test]
    #[should_panic(expected = "exactly one trailing newline")]
    fn test_single_trailing_newline_rejects_double() {
        assert_single_trailing_newline("content\n\n", "double");
    }

    #[test]
    #[should_panic(expected = "expected a trailing newline")]
    fn test_single_trailing_newline_rejects_missing() {
        assert_single_trailing_newline("content", "missing");
    }

    #[test]
    #[should_panic(expected = "exactly one trailing newline")]
    fn test_single_trailing_newline_rejects_double_after_multibyte() {
        assert_single_trailing_newline("──────────\n\n", "multibyte");
    }

    #[test]
    fn test_tail_respects_char_boundaries() {
        assert_eq!(tail("ab──\n", 3), "──\n");
        assert_eq!(tail("✓", 10), "✓");
        assert_eq!(tail("", 10), "");
    }
}
