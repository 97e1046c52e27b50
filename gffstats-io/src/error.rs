use std::io;
use thiserror::Error;

/// Error type for gffstats-io operations.
#[derive(Error, Debug)]
pub enum StatsWriteError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Statistics could not be rendered as JSON.
    #[error("Failed to serialize statistics to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to create parent directories for the output file.
    #[error("Failed to create parent directories for {path}: {source}")]
    ParentDirectoryCreation {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for gffstats-io operations.
pub type Result<T> = std::result::Result<T, StatsWriteError>;
