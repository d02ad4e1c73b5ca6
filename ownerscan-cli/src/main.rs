use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ownerscan::Config;

/// Scan a source tree for a literal query string and report, per code
/// owner, which owned files contain it and where.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Root directory to scan
    #[arg(short, long)]
    root: PathBuf,

    /// Ownership-rules file, relative to the root
    #[arg(short, long, default_value = "CODEOWNERS")]
    codeowners: PathBuf,

    /// Literal substring to search for
    #[arg(short, long)]
    query: String,

    /// Output directory for the CSV reports
    #[arg(short, long, default_value = "results")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config {
        root: cli.root,
        codeowners: cli.codeowners,
        query: cli.query,
        out_dir: cli.out,
    };

    ownerscan::run(&config)
        .with_context(|| format!("scanning {} for `{}`", config.root.display(), config.query))
}
