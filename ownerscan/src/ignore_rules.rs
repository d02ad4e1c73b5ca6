use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Error;

/// Name of the optional ignore file read from the scan root.
const IGNORE_FILE: &str = ".gitignore";

// Fixed rules appended after the root ignore file's own patterns.
const DEFAULT_RULES: &[&str] = &[
    ".git/",
    "**/lib/",
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.ico",
    "*.zip",
    "*.tar",
    "*.gz",
];

/// Answers whether a root-relative path is excluded from the scan.
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Load the ignore rules for `root`. A missing ignore file is treated
    /// as an empty ruleset; the fixed rules always apply.
    pub fn load(root: &Path) -> Result<IgnoreRules, Error> {
        let mut builder = GitignoreBuilder::new(root);

        let ignore_file = root.join(IGNORE_FILE);
        if ignore_file.exists() {
            if let Some(err) = builder.add(&ignore_file) {
                return Err(err.into());
            }
        }
        for rule in DEFAULT_RULES {
            builder.add_line(None, rule)?;
        }

        Ok(IgnoreRules {
            matcher: builder.build()?,
        })
    }

    /// True if `path` (relative to the scan root) is excluded. Matching is
    /// parent-aware, so a rule excluding a directory also covers everything
    /// beneath it.
    pub fn ignores(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_ignore_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let rules = IgnoreRules::load(dir.path()).unwrap();

        assert!(!rules.ignores(Path::new("src/main.rs"), false));
    }

    #[test]
    fn root_ignore_file_rules_apply() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "target/\n*.log\n").unwrap();
        let rules = IgnoreRules::load(dir.path()).unwrap();

        assert!(rules.ignores(Path::new("target"), true));
        assert!(rules.ignores(Path::new("target/debug/app"), false));
        assert!(rules.ignores(Path::new("build.log"), false));
        assert!(!rules.ignores(Path::new("src/lib.rs"), false));
    }

    #[test]
    fn fixed_rules_always_apply() {
        let dir = tempfile::tempdir().unwrap();
        let rules = IgnoreRules::load(dir.path()).unwrap();

        assert!(rules.ignores(Path::new(".git"), true));
        assert!(rules.ignores(Path::new("vendor/lib"), true));
        assert!(rules.ignores(Path::new("vendor/lib/dep.js"), false));
        assert!(rules.ignores(Path::new("assets/logo.png"), false));
        assert!(rules.ignores(Path::new("bundle.tar"), false));
        assert!(!rules.ignores(Path::new("src/library.rs"), false));
    }

    #[test]
    fn later_patterns_can_reinclude() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.txt\n!keep.txt\n").unwrap();
        let rules = IgnoreRules::load(dir.path()).unwrap();

        assert!(rules.ignores(Path::new("notes.txt"), false));
        assert!(!rules.ignores(Path::new("keep.txt"), false));
    }
}
