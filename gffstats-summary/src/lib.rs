//! Summary statistics for GFF feature annotations.
//!
//! This crate turns a stream of [`FeatureRecord`](gffstats_core::FeatureRecord)s into:
//!
//! - the total number of features
//! - feature counts per feature type
//! - mean inclusive feature length per type, rounded to one decimal place
//! - feature counts per strand value
//!
//! optionally restricted to a single feature type.
//!
//! # Example
//!
//! ```no_run
//! use gffstats_summary::{FeatureFilter, summarize_gff};
//!
//! let stats = summarize_gff("annotation.gff3", &FeatureFilter::ByType("CDS".into())).unwrap();
//! println!("{} CDS features", stats.total_features);
//! ```

pub mod models;
pub mod statistics;
pub mod utils;

// re-exports
pub use models::{FeatureFilter, FeatureStatistics, TypeStats};
pub use statistics::{FeatureSetStatistics, FeatureStatsAccumulator, aggregate, summarize_gff};
