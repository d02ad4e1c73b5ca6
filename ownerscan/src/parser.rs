use std::{fs, path::Path};

use crate::error::Error;

/// A parsed ownership rule: a glob pattern and the owners it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub owners: Vec<String>,
}

/// Parse ownership rules from a string. Blank lines and lines starting with
/// `#` are skipped. Every other line is `<pattern> <owner>...`, split on
/// whitespace, with the pattern's leading path-anchor character stripped.
///
/// Lines with no owner tokens produce an owner-less rule rather than an
/// error, and the anchor character is stripped whatever it is.
pub fn parse(source: &str) -> Vec<Rule> {
    source.lines().filter_map(parse_line).collect()
}

/// Parse ownership rules from a file path.
pub fn parse_file(path: &Path) -> Result<Vec<Rule>, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    Ok(parse(&source))
}

fn parse_line(line: &str) -> Option<Rule> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let pattern = strip_anchor(tokens.next()?);
    let owners = tokens.map(str::to_string).collect();
    Some(Rule { pattern, owners })
}

// The first character of the pattern token is the path-anchor marker and is
// always dropped.
fn strip_anchor(token: &str) -> String {
    let mut chars = token.chars();
    chars.next();
    chars.as_str().to_string()
}
