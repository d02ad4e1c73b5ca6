use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{aggregate::OwnerAggregate, error::Error};

/// Summary report file name.
const SUMMARY_FILE: &str = "results.csv";

const QUOTE_TRIGGERS: &[char] = &[',', '"', '\n', '\r'];

/// An ordered table of named columns and stringified cells. The table owns
/// CSV quoting: a field is quoted when it contains the delimiter, a quote,
/// or a line break, with embedded quotes doubled.
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write_record(out, &self.columns)?;
        for row in &self.rows {
            write_record(out, row)?;
        }
        Ok(())
    }
}

fn write_record(out: &mut impl Write, fields: &[String]) -> io::Result<()> {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.write_all(b",")?;
        }
        write_field(out, field)?;
    }
    out.write_all(b"\n")
}

fn write_field(out: &mut impl Write, field: &str) -> io::Result<()> {
    if field.contains(QUOTE_TRIGGERS) {
        write!(out, "\"{}\"", field.replace('"', "\"\""))
    } else {
        out.write_all(field.as_bytes())
    }
}

/// Write the summary table plus one detail table per owner under `out_dir`,
/// creating the directory (and missing parents) if needed. Existing files
/// are overwritten silently.
pub fn write_reports(out_dir: &Path, aggregate: &OwnerAggregate) -> Result<(), Error> {
    fs::create_dir_all(out_dir).map_err(|source| Error::io(out_dir, source))?;

    let mut summary = Table::new(["owner", "count"]);
    for tally in aggregate.owners() {
        summary.push_row([tally.owner.clone(), tally.count().to_string()]);
    }
    write_table(&out_dir.join(SUMMARY_FILE), &summary)?;

    for tally in aggregate.owners() {
        let mut detail = Table::new(["file", "lines"]);
        for entry in &tally.entries {
            detail.push_row([entry.file.clone(), join_lines(&entry.lines)]);
        }
        let file_name = format!("{}.csv", sanitize_owner(&tally.owner));
        write_table(&out_dir.join(file_name), &detail)?;
    }

    debug!(owners = aggregate.owners().len(), "wrote reports");
    Ok(())
}

fn write_table(path: &Path, table: &Table) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| Error::io(path, source))?;
    let mut out = BufWriter::new(file);
    table
        .write_to(&mut out)
        .and_then(|_| out.flush())
        .map_err(|source| Error::io(path, source))
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Owner identifiers become file names; every character outside
/// `[A-Za-z0-9_-]` is replaced with `_`.
fn sanitize_owner(owner: &str) -> String {
    owner
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
