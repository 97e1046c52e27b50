pub mod feature;

// re-export for cleaner imports
pub use self::feature::{FeatureRecord, MIN_GFF_FIELDS, parse_line};
