use std::collections::BTreeMap;
use std::fmt::{self, Display};

use gffstats_core::FeatureRecord;
use serde::{Deserialize, Serialize};

use crate::utils::mean_to_one_decimal;

/// Which features take part in the statistics.
///
/// Filtering is applied before any counting, so every view of the result
/// describes the same subset of features.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeatureFilter {
    /// Every feature is counted.
    #[default]
    Any,
    /// Only features whose type equals this value exactly (case-sensitive).
    ByType(String),
}

impl FeatureFilter {
    pub fn matches(&self, record: &FeatureRecord) -> bool {
        match self {
            FeatureFilter::Any => true,
            FeatureFilter::ByType(feature_type) => record.feature_type == *feature_type,
        }
    }
}

impl From<Option<String>> for FeatureFilter {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(feature_type) => FeatureFilter::ByType(feature_type),
            None => FeatureFilter::Any,
        }
    }
}

impl Display for FeatureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureFilter::Any => write!(f, "all feature types"),
            FeatureFilter::ByType(feature_type) => write!(f, "feature type {:?}", feature_type),
        }
    }
}

/// Running totals for a single feature type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeStats {
    /// Number of features of this type
    pub count: u64,
    /// Sum of inclusive lengths, negative lengths included
    pub total_length: i128,
}

impl TypeStats {
    pub fn add(&mut self, length: i128) {
        self.count += 1;
        self.total_length += length;
    }

    /// Mean length rounded to one decimal place.
    pub fn mean_length(&self) -> f64 {
        mean_to_one_decimal(self.total_length, self.count)
    }
}

/// Summary statistics for the features of one GFF source.
///
/// Maps are keyed and ordered by feature type (or strand value), so the
/// serialized form is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatistics {
    /// Number of features counted
    pub total_features: u64,
    /// Feature count per type
    pub by_type: BTreeMap<String, u64>,
    /// Mean inclusive length per type, one decimal place
    pub avg_length: BTreeMap<String, f64>,
    /// Feature count per strand value, as written in the file
    pub strand_distribution: BTreeMap<String, u64>,
}

impl FeatureStatistics {
    /// True when the per-type and per-strand counts both sum to the total.
    pub fn is_consistent(&self) -> bool {
        self.by_type.values().sum::<u64>() == self.total_features
            && self.strand_distribution.values().sum::<u64>() == self.total_features
            && self.by_type.len() == self.avg_length.len()
    }
}
