//! Line-oriented in-place edits of shell and config files.
//!
//! Only whole lines beginning with a fixed token are rewritten; the rest of
//! the file is kept byte for byte.

use std::path::Path;

use tokio::fs;

use crate::error::{CoreError, CoreResult};

/// Replace every line starting with `prefix` by `replacement`.
///
/// Returns the new content and how many lines were replaced. Line endings
/// of replaced lines are kept.
pub fn replace_prefixed_lines(content: &str, prefix: &str, replacement: &str) -> (String, usize) {
    let mut patched = String::with_capacity(content.len() + replacement.len());
    let mut replaced = 0;

    for line in content.split_inclusive('\n') {
        if line.starts_with(prefix) {
            patched.push_str(replacement);
            if line.ends_with("\r\n") {
                patched.push_str("\r\n");
            } else if line.ends_with('\n') {
                patched.push('\n');
            }
            replaced += 1;
        } else {
            patched.push_str(line);
        }
    }

    (patched, replaced)
}

/// Patch `path` in place, see [`replace_prefixed_lines`].
///
/// A file without a matching line is left untouched and `Ok(false)` is
/// returned; a missing file is an error.
pub async fn patch_prefixed_line(path: &Path, prefix: &str, replacement: &str) -> CoreResult<bool> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))?;

    let (patched, replaced) = replace_prefixed_lines(&content, prefix, replacement);
    if replaced == 0 {
        return Ok(false);
    }

    fs::write(path, patched)
        .await
        .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))?;

    Ok(true)
}
