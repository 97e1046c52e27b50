use std::fmt::{self, Display};

use crate::errors::GffError;

/// Lines with fewer tab-separated columns than this are not data lines.
///
/// GFF nominally has 9 columns, but the attributes column is optional here.
pub const MIN_GFF_FIELDS: usize = 8;

///
/// FeatureRecord struct, representation of one data line of a GFF file.
///
/// Coordinates are kept exactly as written: 1-based and inclusive, with no
/// check that `end >= start`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct FeatureRecord {
    pub sequence_id: String,
    pub source: String,
    pub feature_type: String,
    pub start: i64,
    pub end: i64,
    pub score: String,
    pub strand: String,
    pub phase: String,

    pub attributes: Option<String>,
}

impl FeatureRecord {
    ///
    /// Inclusive length of the feature: `end - start + 1`.
    ///
    /// Zero or negative when `end < start`; the value is never clamped.
    /// Widened to `i128` so any pair of `i64` coordinates has an exact length.
    ///
    pub fn length(&self) -> i128 {
        i128::from(self.end) - i128::from(self.start) + 1
    }

    ///
    /// Get the tab-separated GFF line for this record
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}{}",
            self.sequence_id,
            self.source,
            self.feature_type,
            self.start,
            self.end,
            self.score,
            self.strand,
            self.phase,
            self.attributes
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

impl Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<i64, GffError> {
    value
        .parse::<i64>()
        .map_err(|source| GffError::InvalidCoordinate {
            field,
            value: value.to_string(),
            source,
        })
}

///
/// Parse a single line of a GFF file.
///
/// Returns `Ok(None)` for lines that carry no feature: blank lines, comments
/// and `##` directives, and lines with fewer than [`MIN_GFF_FIELDS`] columns.
/// A data line whose start or end column is not an integer is an error.
///
/// # Arguments
/// - line: one raw line, with or without its trailing newline
///
pub fn parse_line(line: &str) -> Result<Option<FeatureRecord>, GffError> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() < MIN_GFF_FIELDS {
        return Ok(None);
    }

    let start = parse_coordinate("start", fields[3])?;
    let end = parse_coordinate("end", fields[4])?;

    Ok(Some(FeatureRecord {
        sequence_id: fields[0].to_string(),
        source: fields[1].to_string(),
        feature_type: fields[2].to_string(),
        start,
        end,
        score: fields[5].to_string(),
        strand: fields[6].to_string(),
        phase: fields[7].to_string(),
        attributes: fields.get(8).map(|s| s.to_string()),
    }))
}
