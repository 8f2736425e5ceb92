use std::path::PathBuf;

use pq_core::TableError;
use thiserror::Error;

/// Table loading errors. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error(transparent)]
    Table(#[from] TableError),
}
