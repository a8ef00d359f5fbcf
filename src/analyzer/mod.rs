// Analyzer module: catalog-wide statistics.

pub mod catalog_stats;

pub use catalog_stats::{calculate_stats, CatalogStats, TierCounts};
