//! Post file discovery.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects Markdown post files under a root directory.
///
/// Returns matching paths in filesystem traversal order; callers that need
/// a particular ordering sort the parsed posts themselves. The root entry
/// is excluded from the results.
///
/// Matching is substring based: any path containing `.md` matches, so a
/// `notes.md.bak` is collected alongside `notes.md`. Inherited behavior,
/// kept so existing post directories keep producing the same page set.
///
/// # Arguments
///
/// * `root`: Root directory of Markdown posts
///
/// # Returns
///
/// Paths of discovered post files in traversal order
///
/// # Errors
///
/// Returns error if the directory does not exist or traversal encounters
/// an I/O error.
pub fn find_post_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry
            .with_context(|| format!("Failed to walk posts directory: {}", root.display()))?;

        if entry.path() == root {
            continue;
        }

        if entry.path().to_string_lossy().contains(".md") {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}
