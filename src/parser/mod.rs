pub mod feed_parser;
pub mod search_results;
pub mod sheet_parser;

pub use feed_parser::FeedParser;
pub use search_results::SearchResultsParser;
pub use sheet_parser::SheetParser;

use crate::model::{ParserError, SourceRecord};

/// Turns a fetched document into source records.
pub trait RecordParser {
    fn parse(&self, input: &str) -> Result<Vec<SourceRecord>, ParserError>;
}
