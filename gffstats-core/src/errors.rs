use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GffError {
    #[error("GFF file not found: {0}")]
    FileNotFound(String),

    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Invalid {field} coordinate {value:?}: {source}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Malformed line {line_number}: {source}")]
    MalformedLine {
        line_number: usize,
        #[source]
        source: Box<GffError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GffError {
    /// True when the input could not be located at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GffError::FileNotFound(_))
    }
}
