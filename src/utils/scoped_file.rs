//! Scoped file writes: the destination is fully replaced, never merged.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the file at `path` with `contents`.
///
/// Missing parent directories are created. The data goes to a temporary file
/// in the same directory first and is then renamed over the destination, so
/// a crash never leaves a half-written file behind. Any previous content is
/// discarded.
///
/// # Example
/// ```rust,no_run
/// use pw_scaffold::utils::scoped_file;
/// use std::path::Path;
///
/// scoped_file::write_scoped(Path::new("tests/playwright.config.ts"), b"export default {};\n")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_scoped(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut temp_file =
        NamedTempFile::new_in(parent).context("Failed to create temporary file")?;
    temp_file
        .write_all(contents)
        .context("Failed to write to temporary file")?;

    // Temporary files are created owner-only; generated sources should not be
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o644);
        fs::set_permissions(temp_file.path(), perms).context("Failed to set file permissions")?;
    }

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file to {}", path.display()))?;

    Ok(())
}
