//! Feature statistics for GFF sources
//!
//! Counts features per type and per strand and averages their inclusive
//! lengths, in a single pass over the records.
//!

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::path::Path;

use gffstats_core::{FeatureReader, FeatureRecord, GffError};
use log::{debug, info};

use crate::models::{FeatureFilter, FeatureStatistics, TypeStats};

/// Single-pass accumulator behind [`aggregate`] and [`summarize_gff`].
///
/// Records rejected by the filter are ignored entirely. Averages are only
/// computed, and rounded, in [`FeatureStatsAccumulator::finish`].
#[derive(Debug, Clone, Default)]
pub struct FeatureStatsAccumulator {
    filter: FeatureFilter,
    total_features: u64,
    by_type: BTreeMap<String, TypeStats>,
    strands: BTreeMap<String, u64>,
}

impl FeatureStatsAccumulator {
    pub fn new(filter: FeatureFilter) -> Self {
        FeatureStatsAccumulator {
            filter,
            ..Default::default()
        }
    }

    /// Add one record. Returns whether it passed the filter.
    pub fn push(&mut self, record: &FeatureRecord) -> bool {
        if !self.filter.matches(record) {
            return false;
        }

        self.total_features += 1;
        self.by_type
            .entry(record.feature_type.clone())
            .or_default()
            .add(record.length());
        *self.strands.entry(record.strand.clone()).or_default() += 1;

        true
    }

    /// Number of records counted so far.
    pub fn total_features(&self) -> u64 {
        self.total_features
    }

    pub fn finish(self) -> FeatureStatistics {
        let by_type = self
            .by_type
            .iter()
            .map(|(feature_type, stats)| (feature_type.clone(), stats.count))
            .collect();

        let avg_length = self
            .by_type
            .iter()
            .map(|(feature_type, stats)| (feature_type.clone(), stats.mean_length()))
            .collect();

        let stats = FeatureStatistics {
            total_features: self.total_features,
            by_type,
            avg_length,
            strand_distribution: self.strands,
        };
        debug_assert!(stats.is_consistent());

        stats
    }
}

impl<R: Borrow<FeatureRecord>> Extend<R> for FeatureStatsAccumulator {
    fn extend<T: IntoIterator<Item = R>>(&mut self, iter: T) {
        for record in iter {
            self.push(record.borrow());
        }
    }
}

///
/// Compute feature statistics over a sequence of records.
///
/// # Arguments
/// - records: owned or borrowed [`FeatureRecord`]s, in any order
/// - filter: which feature types to count
///
pub fn aggregate<I>(records: I, filter: &FeatureFilter) -> FeatureStatistics
where
    I: IntoIterator,
    I::Item: Borrow<FeatureRecord>,
{
    let mut accumulator = FeatureStatsAccumulator::new(filter.clone());
    accumulator.extend(records);
    accumulator.finish()
}

///
/// Read a GFF file (plain, gzipped, or `-` for stdin) and compute its
/// feature statistics.
///
/// A missing file is reported as [`GffError::FileNotFound`]; a data line
/// with a non-integer coordinate aborts with [`GffError::MalformedLine`].
///
pub fn summarize_gff<P: AsRef<Path>>(
    path: P,
    filter: &FeatureFilter,
) -> Result<FeatureStatistics, GffError> {
    let path = path.as_ref();
    let mut reader = FeatureReader::from_path(path)?;
    let mut accumulator = FeatureStatsAccumulator::new(filter.clone());

    for record in reader.by_ref() {
        accumulator.push(&record?);
    }

    debug!(
        "{}: {} lines read, {} skipped",
        path.display(),
        reader.lines_read(),
        reader.skipped_lines()
    );
    info!(
        "Counted {} features ({}) in {}",
        accumulator.total_features(),
        filter,
        path.display()
    );

    Ok(accumulator.finish())
}

/// Trait for computing feature statistics over an in-memory set of records.
pub trait FeatureSetStatistics {
    /// Statistics over all records that pass `filter`.
    fn feature_statistics(&self, filter: &FeatureFilter) -> FeatureStatistics;

    /// Statistics over every record.
    fn all_feature_statistics(&self) -> FeatureStatistics {
        self.feature_statistics(&FeatureFilter::Any)
    }
}

impl FeatureSetStatistics for [FeatureRecord] {
    fn feature_statistics(&self, filter: &FeatureFilter) -> FeatureStatistics {
        aggregate(self, filter)
    }
}
