//! # Input/Output utilities for feature statistics.
//!
//! Renders [`FeatureStatistics`](gffstats_summary::FeatureStatistics) as
//! indented JSON, to a string, any writer, or a (optionally gzipped) file on
//! disk.
//!
pub mod error;
pub mod json;

// re-expose core functions
pub use error::*;
pub use json::*;
