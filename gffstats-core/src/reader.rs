//! Lazy iteration over the features of a GFF source.

use std::io::{BufRead, BufReader, Lines, Read};
use std::iter::FusedIterator;
use std::path::Path;

use log::{debug, info, trace};

use crate::errors::GffError;
use crate::models::{FeatureRecord, parse_line};
use crate::utils::get_dynamic_reader_w_stdin;

///
/// Iterator over the features of a GFF source.
///
/// Lines that are not data lines are skipped and counted. The first parse
/// error is reported with its line number and ends the iteration.
///
pub struct FeatureReader<R> {
    lines: Lines<R>,
    line_number: usize,
    skipped: usize,
    done: bool,
}

impl<R: BufRead> FeatureReader<R> {
    pub fn new(reader: R) -> Self {
        FeatureReader {
            lines: reader.lines(),
            line_number: 0,
            skipped: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Number of blank, comment and short lines passed over so far.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

impl FeatureReader<BufReader<Box<dyn Read>>> {
    ///
    /// Open a GFF file (optionally gzipped) or stdin for reading.
    ///
    /// # Arguments
    /// - path: path to the file on disk, or `-` for stdin
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GffError> {
        let path = path.as_ref();
        let reader = get_dynamic_reader_w_stdin(path)?;
        info!("Reading features from {}", path.display());

        Ok(FeatureReader::new(reader))
    }
}

impl<R: BufRead> Iterator for FeatureReader<R> {
    type Item = Result<FeatureRecord, GffError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    debug!(
                        "Finished after {} lines ({} skipped)",
                        self.line_number, self.skipped
                    );
                    return None;
                }
            };
            self.line_number += 1;

            match parse_line(&line) {
                Ok(Some(record)) => {
                    trace!("line {}: {}", self.line_number, record);
                    return Some(Ok(record));
                }
                Ok(None) => self.skipped += 1,
                Err(e) => {
                    self.done = true;
                    return Some(Err(GffError::MalformedLine {
                        line_number: self.line_number,
                        source: Box::new(e),
                    }));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for FeatureReader<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/gff")
            .join(file_name)
    }

    #[rstest]
    fn test_skips_non_data_lines() {
        let input = "##gff-version 3\n\n# comment\nchr1\tsrc\tgene\t1\t10\t.\t+\t.\nshort\tline\nchr1\tsrc\tCDS\t2\t9\t.\t-\t0\tID=c1\n";
        let mut reader = FeatureReader::new(Cursor::new(input));

        let types: Vec<String> = reader
            .by_ref()
            .map(|r| r.unwrap().feature_type)
            .collect();

        assert_eq!(types, vec!["gene", "CDS"]);
        assert_eq!(reader.lines_read(), 6);
        assert_eq!(reader.skipped_lines(), 4);
    }

    #[rstest]
    fn test_reports_line_number_and_stops() {
        let input = "chr1\tsrc\tgene\t1\t10\t.\t+\t.\n#\nchr1\tsrc\tgene\tone\t10\t.\t+\t.\nchr1\tsrc\tgene\t1\t10\t.\t+\t.\n";
        let mut reader = FeatureReader::new(Cursor::new(input));

        assert!(reader.next().unwrap().is_ok());
        match reader.next() {
            Some(Err(GffError::MalformedLine {
                line_number,
                source,
            })) => {
                assert_eq!(line_number, 3);
                assert!(matches!(*source, GffError::InvalidCoordinate { field: "start", .. }));
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[rstest]
    fn test_empty_source() {
        let mut reader = FeatureReader::new(Cursor::new(""));
        assert!(reader.next().is_none());
        assert_eq!(reader.lines_read(), 0);
    }

    #[rstest]
    fn test_from_path() {
        let reader = FeatureReader::from_path(get_test_path("small.gff3")).unwrap();
        let records: Vec<FeatureRecord> = reader.collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].length(), 101);
    }

    #[rstest]
    fn test_from_missing_path() {
        let result = FeatureReader::from_path(get_test_path("missing.gff3"));
        assert!(matches!(result, Err(GffError::FileNotFound(_))));
    }
}
