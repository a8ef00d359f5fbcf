// Core structs: SourceRecord, CanonicalDeal, CategoryLabel, MergeReport
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Which collaborator produced a record. Scopes generated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Sheet,
    Feed,
    Resolver,
}

impl SourceKind {
    pub fn scope(&self) -> &'static str {
        match self {
            SourceKind::Sheet => "sheet",
            SourceKind::Feed => "feed",
            SourceKind::Resolver => "resolve",
        }
    }
}

/// Columns a spreadsheet row carries beyond title and link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceExtras {
    pub main_category: String,
    pub sub_category: String,
    pub sale_price: String,
    pub original_price: String,
    pub store: String,
    pub sale_period: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub title: String,
    /// Empty when the source had no link for this row.
    pub link: String,
    pub pub_date: String,
    pub extras: SourceExtras,
}

impl SourceRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            pub_date: String::new(),
            extras: SourceExtras::default(),
        }
    }

    pub fn with_pub_date(mut self, pub_date: impl Into<String>) -> Self {
        self.pub_date = pub_date.into();
        self
    }

    pub fn with_extras(mut self, extras: SourceExtras) -> Self {
        self.extras = extras;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub main: String,
    pub sub: String,
}

impl CategoryLabel {
    pub const UNCATEGORIZED: &'static str = "Uncategorized";

    pub fn new(main: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            sub: sub.into(),
        }
    }

    pub fn uncategorized() -> Self {
        Self::new(Self::UNCATEGORIZED, "")
    }

    pub fn is_uncategorized(&self) -> bool {
        self.main == Self::UNCATEGORIZED
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sub.is_empty() {
            write!(f, "{}", self.main)
        } else {
            write!(f, "{} / {}", self.main, self.sub)
        }
    }
}

/// Dedup identity derived from a title. Never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TitleKey(pub(crate) String);

impl TitleKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Link specificity. Variant order is the quality order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkTier {
    Empty,
    SearchFallback,
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDeal {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default = "uncategorized_main", deserialize_with = "lenient_main")]
    pub main_category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub_category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sale_price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub original_price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub store: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sale_period: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pub_date: String,
}

impl CanonicalDeal {
    pub fn new(id: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
            main_category: CategoryLabel::UNCATEGORIZED.to_string(),
            sub_category: String::new(),
            sale_price: String::new(),
            original_price: String::new(),
            store: String::new(),
            sale_period: String::new(),
            notes: String::new(),
            pub_date: String::new(),
        }
    }

    pub fn category(&self) -> CategoryLabel {
        CategoryLabel::new(self.main_category.clone(), self.sub_category.clone())
    }

    pub fn set_category(&mut self, label: CategoryLabel) {
        self.main_category = label.main;
        self.sub_category = label.sub;
    }
}

fn uncategorized_main() -> String {
    CategoryLabel::UNCATEGORIZED.to_string()
}

// Older catalog files wrote `null` for missing dates.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_main<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let main = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if main.trim().is_empty() {
        Ok(uncategorized_main())
    } else {
        Ok(main)
    }
}

/// Outcome counters of one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub skipped: usize,
    pub upgraded: usize,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.added + self.skipped + self.upgraded
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "added {}, upgraded {}, skipped {}",
            self.added, self.upgraded, self.skipped
        )
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("request to {0} timed out")]
    Timeout(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid feed xml: {0}")]
    Xml(String),
    #[error("invalid html: {0}")]
    Html(String),
    #[error("header row not found (expected {0})")]
    MissingHeader(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("could not persist catalog: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_order_by_quality() {
        assert!(LinkTier::Direct > LinkTier::SearchFallback);
        assert!(LinkTier::SearchFallback > LinkTier::Empty);
    }

    #[test]
    fn deal_tolerates_nulls_and_missing_fields() {
        let json = r#"{"id":"a","title":"Widget","link":"https://x/f/1","pubDate":null,"mainCategory":""}"#;
        let deal: CanonicalDeal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.pub_date, "");
        assert_eq!(deal.main_category, "Uncategorized");
        assert_eq!(deal.sub_category, "");
        assert_eq!(deal.notes, "");
    }

    #[test]
    fn deal_serializes_with_camel_case_keys() {
        let mut deal = CanonicalDeal::new("a", "Widget", "https://x/f/1");
        deal.sale_price = "$5".into();
        let value = serde_json::to_value(&deal).unwrap();
        assert_eq!(value["salePrice"], "$5");
        assert_eq!(value["mainCategory"], "Uncategorized");
        assert!(value.get("pubDate").is_some());
    }

    #[test]
    fn label_display_omits_empty_sub() {
        assert_eq!(CategoryLabel::uncategorized().to_string(), "Uncategorized");
        assert_eq!(
            CategoryLabel::new("Grocery", "Pasta").to_string(),
            "Grocery / Pasta"
        );
    }
}
