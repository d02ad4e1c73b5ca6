use std::{fs, path::Path};

use memchr::memmem::Finder;

use crate::error::Error;

/// A file containing the query, with the 1-based numbers of every line the
/// query occurs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    pub path: String,
    pub lines: Vec<usize>,
}

/// Scans file contents for a literal query substring.
pub struct QueryScanner {
    finder: Finder<'static>,
}

impl QueryScanner {
    pub fn new(query: &str) -> Self {
        Self {
            finder: Finder::new(query).into_owned(),
        }
    }

    /// 1-based numbers of the lines containing the query, in order. Both
    /// `\n` and `\r\n` line endings are handled. The check is case-sensitive
    /// literal containment, not a word or pattern match.
    pub fn scan(&self, content: &str) -> Vec<usize> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| self.finder.find(line.as_bytes()).is_some())
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Scan the file at `path`. Content that does not decode as UTF-8 is an
    /// error.
    pub fn scan_path(&self, path: &Path) -> Result<Vec<usize>, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Ok(self.scan(&content))
    }
}
