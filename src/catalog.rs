use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

use crate::model::{CanonicalDeal, TitleKey};
use crate::normalizer::{normalize_title, LinkNormalizer};
use crate::utils::parse_datetime;

/// Persisted catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub deals: Vec<CanonicalDeal>,
}

/// Deduplicated deal set, indexed by id and by title key.
///
/// Entries are kept in insertion order; [`Catalog::sorted`] gives the
/// exposed order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    deals: Vec<CanonicalDeal>,
    by_id: HashMap<String, usize>,
    by_title: HashMap<TitleKey, usize>,
    last_updated: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from stored deals. A repeated id keeps its first
    /// occurrence.
    pub fn from_deals(deals: impl IntoIterator<Item = CanonicalDeal>) -> Self {
        let mut catalog = Self::new();
        for deal in deals {
            if catalog.contains_id(&deal.id) {
                warn!(id = %deal.id, "Duplicate id in stored catalog, keeping first");
                continue;
            }
            catalog.insert(deal);
        }
        catalog
    }

    pub fn from_file(file: CatalogFile) -> Self {
        let mut catalog = Self::from_deals(file.deals);
        catalog.last_updated = file.last_updated;
        catalog
    }

    pub fn to_file(&self, last_updated: String) -> CatalogFile {
        CatalogFile {
            last_updated: Some(last_updated),
            deals: self.sorted().into_iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn set_last_updated(&mut self, timestamp: impl Into<String>) {
        self.last_updated = Some(timestamp.into());
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&CanonicalDeal> {
        self.by_id.get(id).map(|&i| &self.deals[i])
    }

    pub fn find_by_title(&self, key: &TitleKey) -> Option<&CanonicalDeal> {
        self.by_title.get(key).map(|&i| &self.deals[i])
    }

    pub(crate) fn index_of_title(&self, key: &TitleKey) -> Option<usize> {
        self.by_title.get(key).copied()
    }

    pub(crate) fn deal_mut(&mut self, index: usize) -> &mut CanonicalDeal {
        &mut self.deals[index]
    }

    /// Adds a deal the caller has already checked is new by id.
    /// The title index keeps the first deal seen for a key.
    pub(crate) fn insert(&mut self, deal: CanonicalDeal) {
        let index = self.deals.len();
        self.by_id.insert(deal.id.clone(), index);
        self.by_title
            .entry(normalize_title(&deal.title))
            .or_insert(index);
        self.deals.push(deal);
    }

    /// Brings stored links written before the current marker up to date.
    /// Returns how many links changed.
    pub fn normalize_links(&mut self, links: &LinkNormalizer) -> usize {
        let mut changed = 0;
        for deal in &mut self.deals {
            let normalized = links.normalize(&deal.link);
            if normalized != deal.link {
                deal.link = normalized;
                changed += 1;
            }
        }
        changed
    }

    /// Insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalDeal> {
        self.deals.iter()
    }

    /// Only category fields may be rewritten through this; ids and titles
    /// back the indexes.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CanonicalDeal> {
        self.deals.iter_mut()
    }

    /// Newest first. Dates that do not parse sort after every parsed one,
    /// descending as plain text; empty dates go last. Ties keep insertion
    /// order.
    pub fn sorted(&self) -> Vec<&CanonicalDeal> {
        let mut keyed: Vec<_> = self
            .deals
            .iter()
            .map(|deal| (PubDateKey::of(&deal.pub_date), deal))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        keyed.into_iter().map(|(_, deal)| deal).collect()
    }
}

/// Sort key for the exposed order; `Ord` puts the first deal first.
#[derive(Debug, PartialEq, Eq)]
enum PubDateKey<'a> {
    Parsed(DateTime<Utc>),
    Raw(&'a str),
    Missing,
}

impl<'a> PubDateKey<'a> {
    fn of(pub_date: &'a str) -> Self {
        let trimmed = pub_date.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match parse_datetime(trimmed) {
            Some(dt) => Self::Parsed(dt),
            None => Self::Raw(trimmed),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Parsed(_) => 0,
            Self::Raw(_) => 1,
            Self::Missing => 2,
        }
    }
}

impl Ord for PubDateKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Parsed(a), Self::Parsed(b)) => b.cmp(a),
            (Self::Raw(a), Self::Raw(b)) => b.cmp(a),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for PubDateKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(id: &str, title: &str, pub_date: &str) -> CanonicalDeal {
        let mut deal = CanonicalDeal::new(id, title, format!("https://x/f/{id}"));
        deal.pub_date = pub_date.to_string();
        deal
    }

    #[test]
    fn indexes_by_id_and_title() {
        let catalog = Catalog::from_deals(vec![dated("a", "Widget $5", "")]);
        assert!(catalog.contains_id("a"));
        assert_eq!(catalog.get("a").unwrap().title, "Widget $5");
        assert_eq!(
            catalog.find_by_title(&normalize_title("WIDGET")).unwrap().id,
            "a"
        );
        assert!(catalog.get("b").is_none());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let catalog = Catalog::from_deals(vec![
            dated("a", "First", ""),
            dated("a", "Second", ""),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().title, "First");
    }

    #[test]
    fn sorted_newest_first_with_undated_last() {
        let catalog = Catalog::from_deals(vec![
            dated("undated-1", "U1", ""),
            dated("old", "Old", "2024-11-01T00:00:00Z"),
            dated("bad", "Bad", "not a date"),
            dated("new", "New", "2024-11-29T08:00:00Z"),
            dated("undated-2", "U2", ""),
            dated("mid", "Mid", "2024-11-15T12:00:00+00:00"),
        ]);
        let order: Vec<_> = catalog.sorted().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, ["new", "mid", "old", "bad", "undated-1", "undated-2"]);
    }

    #[test]
    fn date_only_and_odd_dates_sort_ahead_of_empty_ones() {
        let catalog = Catalog::from_deals(vec![
            dated("undated", "U", ""),
            dated("date-only", "D", "2024-11-29"),
            dated("older", "O", "2024-11-01T00:00:00Z"),
            dated("rfc2822", "R", "Sat, 30 Nov 2024 08:00:00 +0000"),
            dated("odd-a", "A", "Black Friday"),
            dated("odd-b", "B", "Cyber Monday"),
            dated("blank", "W", "   "),
        ]);
        let order: Vec<_> = catalog.sorted().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            order,
            ["rfc2822", "date-only", "older", "odd-b", "odd-a", "undated", "blank"]
        );
    }

    #[test]
    fn normalizes_stored_links_once() {
        let links = LinkNormalizer::default();
        let mut catalog = Catalog::from_deals(vec![
            CanonicalDeal::new("a", "Bare", "https://x/f/1"),
            CanonicalDeal::new("b", "Marked", "https://x/f/2?sdtrk=bfsheet"),
            CanonicalDeal::new("c", "Empty", ""),
        ]);
        assert_eq!(catalog.normalize_links(&links), 1);
        assert_eq!(catalog.get("a").unwrap().link, "https://x/f/1?sdtrk=bfsheet");
        assert_eq!(catalog.get("c").unwrap().link, "");
        assert_eq!(catalog.normalize_links(&links), 0);
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let catalog = Catalog::from_deals(vec![
            dated("b", "B", "2024-11-29T08:00:00Z"),
            dated("a", "A", "2024-11-29T08:00:00Z"),
        ]);
        let order: Vec<_> = catalog.sorted().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn file_round_trip_keeps_schema() {
        let catalog = Catalog::from_deals(vec![dated("a", "Widget", "2024-11-29T08:00:00Z")]);
        let file = catalog.to_file("2024-11-30T00:00:00Z".to_string());
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["lastUpdated"], "2024-11-30T00:00:00Z");
        assert_eq!(json["deals"][0]["pubDate"], "2024-11-29T08:00:00Z");

        let back: CatalogFile = serde_json::from_value(json).unwrap();
        let restored = Catalog::from_file(back);
        assert_eq!(restored.last_updated(), Some("2024-11-30T00:00:00Z"));
        assert_eq!(restored.get("a").unwrap().title, "Widget");
    }
}
