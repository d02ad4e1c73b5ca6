use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the scan pipeline. All of them are fatal; nothing is
/// retried or recovered, partial output already on disk is left as-is.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory traversal failed")]
    Walk(#[from] walkdir::Error),

    #[error("invalid ignore rule")]
    IgnoreRules(#[from] ignore::Error),

    #[error("invalid ownership pattern")]
    Pattern(#[from] globset::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
