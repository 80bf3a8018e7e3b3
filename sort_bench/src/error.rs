use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] dnc_sort::ConfigError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{algorithm} produced unsorted output for pattern {pattern} len {len}")]
    Unsorted {
        algorithm: &'static str,
        pattern: String,
        len: usize,
    },
}
