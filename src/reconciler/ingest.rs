use chrono::{DateTime, Utc};

use crate::classifier::Classifier;
use crate::model::{CanonicalDeal, CategoryLabel, SourceKind, SourceRecord};
use crate::normalizer::LinkNormalizer;
use crate::search::SearchFallback;
use crate::utils::{
    detect_store, extract_deal_number, extract_price, format_datetime, to_kebab_case,
    truncate_chars,
};

const MAX_ID_CHARS: usize = 100;
const SLUG_WORDS: usize = 5;

/// `<scope>-<seq>-<slug>`, stable for unchanged input.
pub fn derive_id(scope: &str, seq: usize, title: &str) -> String {
    let id = format!("{scope}-{seq}-{}", to_kebab_case(title, SLUG_WORDS));
    truncate_chars(&id, MAX_ID_CHARS)
}

/// Turns collaborator records into merge candidates.
pub struct Ingestor<'a> {
    links: &'a LinkNormalizer,
    classifier: &'a Classifier,
    search: &'a SearchFallback,
    now: DateTime<Utc>,
}

impl<'a> Ingestor<'a> {
    pub fn new(
        links: &'a LinkNormalizer,
        classifier: &'a Classifier,
        search: &'a SearchFallback,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            links,
            classifier,
            search,
            now,
        }
    }

    /// Feed items with a `/f/<n>` link are keyed `<id_prefix>-f<n>`.
    pub fn ingest_feed(&self, id_prefix: &str, records: &[SourceRecord]) -> Vec<CanonicalDeal> {
        self.ingest(SourceKind::Feed, Some(id_prefix), records)
    }

    pub fn ingest_sheet(&self, records: &[SourceRecord]) -> Vec<CanonicalDeal> {
        self.ingest(SourceKind::Sheet, None, records)
    }

    pub fn ingest_resolved(&self, records: &[SourceRecord]) -> Vec<CanonicalDeal> {
        self.ingest(SourceKind::Resolver, None, records)
    }

    pub fn ingest(
        &self,
        kind: SourceKind,
        id_prefix: Option<&str>,
        records: &[SourceRecord],
    ) -> Vec<CanonicalDeal> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| self.candidate(kind, id_prefix, i + 1, record))
            .collect()
    }

    fn candidate(
        &self,
        kind: SourceKind,
        id_prefix: Option<&str>,
        seq: usize,
        record: &SourceRecord,
    ) -> CanonicalDeal {
        let title = record.title.trim();
        let link = if record.link.trim().is_empty() && kind == SourceKind::Sheet {
            self.search.search_url(title)
        } else {
            self.links.normalize(&record.link)
        };

        let id = match (kind, id_prefix, extract_deal_number(&link)) {
            (SourceKind::Feed, Some(prefix), Some(number)) => format!("{prefix}-f{number}"),
            _ => derive_id(kind.scope(), seq, title),
        };

        let extras = &record.extras;
        let mut deal = CanonicalDeal::new(id, title, link);

        let label = self.classifier.classify(&deal.title, &deal.link);
        if label.is_uncategorized() && !extras.main_category.trim().is_empty() {
            deal.set_category(CategoryLabel::new(
                extras.main_category.trim(),
                extras.sub_category.trim(),
            ));
        } else {
            deal.set_category(label);
        }

        deal.sale_price = non_empty_or(&extras.sale_price, || extract_price(title));
        deal.store = non_empty_or(&extras.store, || detect_store(title));
        deal.original_price = extras.original_price.trim().to_string();
        deal.sale_period = extras.sale_period.trim().to_string();
        deal.notes = extras.notes.trim().to_string();
        deal.pub_date = if !record.pub_date.trim().is_empty() {
            record.pub_date.trim().to_string()
        } else if kind == SourceKind::Sheet {
            format_datetime(&self.now)
        } else {
            String::new()
        };

        deal
    }
}

fn non_empty_or(value: &str, fallback: impl FnOnce() -> String) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback()
    } else {
        value.to_string()
    }
}
