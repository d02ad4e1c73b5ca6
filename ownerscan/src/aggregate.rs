use std::collections::HashMap;

use crate::{ruleset::RuleSet, scanner::FileMatch};

/// One attributed occurrence: a file and the line numbers it matched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerEntry {
    pub file: String,
    pub lines: Vec<usize>,
}

/// Everything accumulated for a single owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerTally {
    pub owner: String,
    pub entries: Vec<OwnerEntry>,
}

impl OwnerTally {
    /// Occurrences attributed to this owner. A file counts once per
    /// matching rule, so this is the entry count.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Per-owner accumulation, in the order owners were first encountered.
#[derive(Default)]
pub struct OwnerAggregate {
    tallies: Vec<OwnerTally>,
    index: HashMap<String, usize>,
}

impl OwnerAggregate {
    pub fn owners(&self) -> &[OwnerTally] {
        &self.tallies
    }

    fn record(&mut self, owner: &str, file_match: &FileMatch) {
        let idx = match self.index.get(owner) {
            Some(&idx) => idx,
            None => {
                let idx = self.tallies.len();
                self.tallies.push(OwnerTally {
                    owner: owner.to_string(),
                    entries: Vec::new(),
                });
                self.index.insert(owner.to_string(), idx);
                idx
            }
        };
        self.tallies[idx].entries.push(OwnerEntry {
            file: file_match.path.clone(),
            lines: file_match.lines.clone(),
        });
    }
}

/// Attribute every file match to the owners of every rule whose pattern
/// matches its path. A file matching several rules naming the same owner is
/// recorded once per rule; nothing is deduplicated, and a file matching no
/// rule is silently unattributed.
pub fn attribute(matches: &[FileMatch], ruleset: &RuleSet) -> OwnerAggregate {
    let mut aggregate = OwnerAggregate::default();
    for file_match in matches {
        for (_, rule) in ruleset.matching_rules(&file_match.path) {
            for owner in &rule.owners {
                aggregate.record(owner, file_match);
            }
        }
    }
    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Rule;
    use crate::ruleset::RuleSetBuilder;

    fn ruleset(rules: &[(&str, &[&str])]) -> RuleSet {
        let mut builder = RuleSetBuilder::new();
        for (pattern, owners) in rules {
            builder
                .add(Rule {
                    pattern: pattern.to_string(),
                    owners: owners.iter().map(|o| o.to_string()).collect(),
                })
                .unwrap();
        }
        builder.build().unwrap()
    }

    fn file_match(path: &str, lines: &[usize]) -> FileMatch {
        FileMatch {
            path: path.to_string(),
            lines: lines.to_vec(),
        }
    }

    #[test]
    fn one_entry_per_matching_rule() {
        let ruleset = ruleset(&[("a/*", &["alice"]), ("a/b.txt", &["alice"])]);
        let matches = vec![file_match("a/b.txt", &[1, 3])];

        let aggregate = attribute(&matches, &ruleset);

        assert_eq!(aggregate.owners().len(), 1);
        let tally = &aggregate.owners()[0];
        assert_eq!(tally.owner, "alice");
        assert_eq!(tally.count(), 2);
        assert_eq!(tally.entries[0], tally.entries[1]);
    }

    #[test]
    fn owners_keep_first_encounter_order() {
        let ruleset = ruleset(&[("a/*", &["bob", "alice"]), ("a/b.txt", &["carol"])]);
        let matches = vec![file_match("a/b.txt", &[2])];

        let aggregate = attribute(&matches, &ruleset);
        let owners: Vec<_> = aggregate
            .owners()
            .iter()
            .map(|t| t.owner.as_str())
            .collect();

        assert_eq!(owners, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn unmatched_files_attribute_nothing() {
        let ruleset = ruleset(&[("a/*", &["alice"])]);
        let matches = vec![file_match("elsewhere/x.txt", &[1])];

        let aggregate = attribute(&matches, &ruleset);

        assert!(aggregate.owners().is_empty());
    }
}
