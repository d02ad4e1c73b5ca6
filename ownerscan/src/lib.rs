pub mod aggregate;
pub mod error;
pub mod ignore_rules;
pub mod parser;
pub mod patternset;
pub mod report;
pub mod ruleset;
pub mod scanner;
pub mod walker;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use aggregate::{attribute, OwnerAggregate};
pub use error::Error;
pub use ignore_rules::IgnoreRules;
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use scanner::{FileMatch, QueryScanner};

/// Everything a run needs, built once at startup and passed explicitly to
/// each stage.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Ownership-rules file, resolved relative to `root`.
    pub codeowners: PathBuf,
    /// Literal substring to search for.
    pub query: String,
    /// Output directory for the CSV reports.
    pub out_dir: PathBuf,
}

/// Build a `RuleSet` from an ownership file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<RuleSet, Error> {
    let rules = parser::parse_file(path.as_ref())?;
    debug!(rules = rules.len(), "parsed ownership rules");
    let mut builder = RuleSetBuilder::new();
    for rule in rules {
        builder.add(rule)?;
    }
    builder.build()
}

/// Run the whole pipeline: walk the tree, scan each file for the query,
/// attribute matches to owners, write the CSV reports. Strictly sequential,
/// one shot; the first error aborts the run.
pub fn run(config: &Config) -> Result<(), Error> {
    let ignores = IgnoreRules::load(&config.root)?;
    let files = walker::walk(&config.root, &ignores)?;

    let scanner = QueryScanner::new(&config.query);
    let mut matches = Vec::new();
    for file in &files {
        let lines = scanner.scan_path(&config.root.join(file))?;
        if !lines.is_empty() {
            matches.push(FileMatch {
                path: file.to_string_lossy().into_owned(),
                lines,
            });
        }
    }
    debug!(scanned = files.len(), matched = matches.len(), "scan complete");

    let ruleset = from_path(config.root.join(&config.codeowners))?;
    let aggregate = attribute(&matches, &ruleset);
    report::write_reports(&config.out_dir, &aggregate)
}
