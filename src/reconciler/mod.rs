// Reconciler: candidate ingestion, merge and recategorization.

pub mod ingest;
pub mod merge;
pub mod recategorize;

pub use ingest::{derive_id, Ingestor};
pub use merge::Reconciler;
pub use recategorize::{recategorize, RecategorizeReport};
