// Normalizer module: canonical links and dedup keys for titles.

pub mod link;
pub mod title;

pub use link::LinkNormalizer;
pub use title::normalize_title;
