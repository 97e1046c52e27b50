use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::errors::GffError;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// Multi-member gzip streams are decoded in full, so bgzip output works too.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, GffError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GffError::FileNotFound(path.display().to_string()),
        _ => GffError::FileReadError(format!("{}: {}", path.display(), e)),
    })?;

    debug!("Opened {} (gzipped: {})", path.display(), is_gzipped);

    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - path: path to the file to read, or '-' for stdin
///
pub fn get_dynamic_reader_w_stdin<P: AsRef<Path>>(
    path: P,
) -> Result<BufReader<Box<dyn Read>>, GffError> {
    let path = path.as_ref();
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading features from stdin");
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(path)
    }
}
