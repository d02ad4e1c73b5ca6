use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::Error;

/// A compiled set of glob patterns. `*` and `?` stay within a path segment,
/// `**` crosses segments, bracket classes match as usual.
#[derive(Clone)]
pub struct PatternSetMatcher(GlobSet);

impl PatternSetMatcher {
    /// Indices of every pattern matching `path`, in the order the patterns
    /// were added.
    pub fn matching_patterns(&self, path: impl AsRef<Path>) -> Vec<usize> {
        self.0.matches(path.as_ref()).into_iter().collect()
    }
}

pub struct PatternSetBuilder(GlobSetBuilder);

impl PatternSetBuilder {
    pub fn new() -> Self {
        Self(GlobSetBuilder::new())
    }

    pub fn add(&mut self, pattern: &str) -> Result<(), Error> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()?;
        self.0.add(glob);
        Ok(())
    }

    pub fn build(self) -> Result<PatternSetMatcher, Error> {
        Ok(PatternSetMatcher(self.0.build()?))
    }
}

impl Default for PatternSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
