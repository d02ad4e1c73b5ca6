use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::{error::Error, ignore_rules::IgnoreRules};

/// Version-control metadata directory, always skipped during traversal.
const VCS_DIR: &str = ".git";

/// Recursively list the files under `root` as root-relative paths, in
/// directory-listing order. Excluded entries are pruned before descent, so
/// an ignored directory is never read. Traversal errors are fatal.
pub fn walk(root: &Path, ignores: &IgnoreRules) -> Result<Vec<PathBuf>, Error> {
    let entries = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path());
            rel != Path::new(VCS_DIR) && !ignores.ignores(rel, entry.file_type().is_dir())
        });

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        files.push(rel);
    }

    debug!(files = files.len(), "walked source tree");
    Ok(files)
}
