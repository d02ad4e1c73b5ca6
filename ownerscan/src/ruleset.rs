use std::path::Path;

use crate::{
    error::Error,
    parser::Rule,
    patternset::{PatternSetBuilder, PatternSetMatcher},
};

/// Parsed ownership rules paired with a compiled pattern set for matching
/// paths against all of them at once.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    patterns: PatternSetMatcher,
}

impl RuleSet {
    /// Every rule whose pattern matches `path`, in declaration order. All
    /// matching rules apply; there is no specificity ranking and no
    /// short-circuit.
    pub fn matching_rules(&self, path: impl AsRef<Path>) -> Vec<(usize, &Rule)> {
        self.patterns
            .matching_patterns(path)
            .iter()
            .map(|&idx| (idx, &self.rules[idx]))
            .collect()
    }
}

pub struct RuleSetBuilder {
    rules: Vec<Rule>,
    patterns: PatternSetBuilder,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            patterns: PatternSetBuilder::new(),
        }
    }

    pub fn add(&mut self, rule: Rule) -> Result<(), Error> {
        self.patterns.add(&rule.pattern)?;
        self.rules.push(rule);
        Ok(())
    }

    pub fn build(self) -> Result<RuleSet, Error> {
        Ok(RuleSet {
            rules: self.rules,
            patterns: self.patterns.build()?,
        })
    }
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
