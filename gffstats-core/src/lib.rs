//! # Core types for gffstats
//!
//! Feature records, the single-line GFF parser, and the line sources that
//! feed it. Everything above this crate works on [`FeatureRecord`] values
//! produced by [`parse_line`] or [`FeatureReader`].
//!
//! ```no_run
//! use gffstats_core::FeatureReader;
//!
//! for record in FeatureReader::from_path("annotation.gff3.gz").unwrap() {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.feature_type, record.length());
//! }
//! ```
pub mod errors;
pub mod models;
pub mod reader;
pub mod utils;

pub use errors::GffError;
pub use models::{FeatureRecord, parse_line};
pub use reader::FeatureReader;
