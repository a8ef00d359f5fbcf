pub mod analyzer;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod reconciler;
pub mod scraper;
pub mod search;
pub mod storage;
pub mod utils;

pub use catalog::Catalog;
pub use classifier::Classifier;
pub use model::{CanonicalDeal, CategoryLabel, LinkTier, MergeReport, SourceRecord, TitleKey};
pub use normalizer::{normalize_title, LinkNormalizer};
pub use reconciler::{recategorize, Reconciler};
