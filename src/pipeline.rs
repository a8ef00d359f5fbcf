// Pipeline stages: load catalog, collect candidates, merge, save.
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::analyzer::{calculate_stats, CatalogStats};
use crate::catalog::Catalog;
use crate::classifier::Classifier;
use crate::config::AppConfig;
use crate::model::{
    CanonicalDeal, FetchError, LinkTier, MergeReport, ParserError, SourceRecord, StorageError,
};
use crate::normalizer::LinkNormalizer;
use crate::parser::{FeedParser, RecordParser, SearchResultsParser, SheetParser};
use crate::reconciler::{recategorize, Ingestor, RecategorizeReport, Reconciler};
use crate::scraper::Fetcher;
use crate::search::SearchFallback;
use crate::storage::CatalogStore;
use crate::utils::format_datetime;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub candidates: usize,
    pub merge: MergeReport,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub attempted: usize,
    pub found: usize,
    pub merge: MergeReport,
}

/// Where `sync` takes spreadsheet rows from.
#[derive(Debug, Clone, Copy)]
pub enum SheetSource<'p> {
    /// `sheet_html_url` from the config, when set.
    Configured,
    File(&'p Path),
    Skip,
}

pub struct Pipeline<'a> {
    config: &'a AppConfig,
    links: LinkNormalizer,
    classifier: Classifier,
    search: SearchFallback,
    fetcher: &'a dyn Fetcher,
    store: &'a dyn CatalogStore,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a AppConfig,
        classifier: Classifier,
        fetcher: &'a dyn Fetcher,
        store: &'a dyn CatalogStore,
    ) -> Self {
        Self {
            config,
            links: LinkNormalizer::from_config(config),
            classifier,
            search: SearchFallback::from_config(config),
            fetcher,
            store,
        }
    }

    /// Loads the stored catalog with every link carrying the current marker.
    fn load(&self) -> Result<Catalog, PipelineError> {
        let mut catalog = self.store.load()?;
        let fixed = catalog.normalize_links(&self.links);
        if fixed > 0 {
            info!(links = fixed, "Normalized stored links");
        }
        Ok(catalog)
    }

    fn ingestor(&self, now: DateTime<Utc>) -> Ingestor<'_> {
        Ingestor::new(&self.links, &self.classifier, &self.search, now)
    }

    fn merge_and_save(
        &self,
        catalog: &mut Catalog,
        candidates: Vec<CanonicalDeal>,
        now: DateTime<Utc>,
    ) -> Result<MergeReport, PipelineError> {
        let report = Reconciler::new(&self.links, &self.classifier).merge(catalog, candidates);
        info!(
            added = report.added,
            upgraded = report.upgraded,
            skipped = report.skipped,
            total = catalog.len(),
            "Merge complete"
        );
        catalog.set_last_updated(format_datetime(&now));
        self.store.save(catalog)?;
        Ok(report)
    }

    /// Polls every feed concurrently plus the spreadsheet, then merges
    /// everything collected in one pass. A failing source is logged and
    /// skipped.
    pub async fn sync(
        &self,
        sheet: SheetSource<'_>,
        now: DateTime<Utc>,
    ) -> Result<SyncSummary, PipelineError> {
        let mut catalog = self.load()?;
        let mut summary = SyncSummary::default();
        let mut candidates = Vec::new();
        let ingestor = self.ingestor(now);

        // sheet rows merge before feed items, so their links win title collisions
        let sheet_html = match sheet {
            SheetSource::File(path) => Some(read_file(path)?),
            SheetSource::Configured => match &self.config.sheet_html_url {
                Some(url) => match self.fetcher.fetch(url).await {
                    Ok(html) => Some(html),
                    Err(e) => {
                        warn!(url = %url, "Sheet fetch failed: {}", e);
                        summary.sources_failed += 1;
                        None
                    }
                },
                None => None,
            },
            SheetSource::Skip => None,
        };
        if let Some(html) = sheet_html {
            match SheetParser::new()?.parse(&html) {
                Ok(records) => {
                    info!(rows = records.len(), "Parsed spreadsheet");
                    candidates.extend(ingestor.ingest_sheet(&records));
                    summary.sources_ok += 1;
                }
                Err(e) => {
                    warn!("Spreadsheet skipped: {}", e);
                    summary.sources_failed += 1;
                }
            }
        }

        let fetches = self.config.feeds.iter().map(|feed| async move {
            (feed, self.fetcher.fetch(&feed.url).await)
        });
        let feed_parser = FeedParser::new();
        for (feed, result) in join_all(fetches).await {
            let records = match result
                .map_err(PipelineError::from)
                .and_then(|xml| feed_parser.parse(&xml).map_err(PipelineError::from))
            {
                Ok(records) => records,
                Err(e) => {
                    warn!(feed = %feed.name, "Feed failed: {}", e);
                    summary.sources_failed += 1;
                    continue;
                }
            };
            info!(feed = %feed.name, items = records.len(), "Parsed feed");
            candidates.extend(ingestor.ingest_feed(&feed.id_prefix, &records));
            summary.sources_ok += 1;
        }

        summary.candidates = candidates.len();
        summary.merge = self.merge_and_save(&mut catalog, candidates, now)?;
        Ok(summary)
    }

    pub fn import_sheet(
        &self,
        html: &str,
        now: DateTime<Utc>,
    ) -> Result<MergeReport, PipelineError> {
        let mut catalog = self.load()?;
        let records = SheetParser::new()?.parse(html)?;
        info!(rows = records.len(), "Parsed spreadsheet");
        let candidates = self.ingestor(now).ingest_sheet(&records);
        self.merge_and_save(&mut catalog, candidates, now)
    }

    pub fn import_sheet_file(
        &self,
        path: &Path,
        now: DateTime<Utc>,
    ) -> Result<MergeReport, PipelineError> {
        self.import_sheet(&read_file(path)?, now)
    }

    /// Looks up a direct link for deals that only have a search link. Found
    /// links go through the normal merge, which upgrades by title.
    pub async fn resolve(
        &self,
        limit: Option<usize>,
        now: DateTime<Utc>,
    ) -> Result<ResolveSummary, PipelineError> {
        let mut catalog = self.load()?;
        let parser = SearchResultsParser::new(&self.config.link_patterns.direct)?;
        let delay = Duration::from_millis(self.config.resolve_delay_millis);

        let pending: Vec<(String, String)> = catalog
            .iter()
            .filter(|deal| self.links.tier(&deal.link) == LinkTier::SearchFallback)
            .take(limit.unwrap_or(usize::MAX))
            .map(|deal| (deal.title.clone(), deal.link.clone()))
            .collect();
        info!(pending = pending.len(), "Resolving search links");

        let mut summary = ResolveSummary::default();
        let mut records = Vec::new();
        for (i, (title, search_url)) in pending.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                sleep(delay).await;
            }
            summary.attempted += 1;
            match self.fetcher.fetch(search_url).await {
                Ok(html) => match parser.first_direct_link(&html, search_url) {
                    Some(link) => records.push(SourceRecord::new(title.clone(), link)),
                    None => info!(title = %title, "No direct link found"),
                },
                Err(e) => warn!(title = %title, "Search failed: {}", e),
            }
        }
        summary.found = records.len();

        let candidates = self.ingestor(now).ingest_resolved(&records);
        summary.merge = self.merge_and_save(&mut catalog, candidates, now)?;
        Ok(summary)
    }

    pub fn recategorize(&self, now: DateTime<Utc>) -> Result<RecategorizeReport, PipelineError> {
        let mut catalog = self.load()?;
        let report = recategorize(&mut catalog, &self.classifier);
        info!(
            changed = report.changed,
            uncategorized_before = report.uncategorized_before,
            uncategorized_after = report.uncategorized_after,
            "Recategorized"
        );
        catalog.set_last_updated(format_datetime(&now));
        self.store.save(&catalog)?;
        Ok(report)
    }

    pub fn stats(&self) -> Result<CatalogStats, PipelineError> {
        let catalog = self.load()?;
        Ok(calculate_stats(&catalog, &self.links))
    }
}

fn read_file(path: &Path) -> Result<String, PipelineError> {
    std::fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.display().to_string(),
        source,
    })
}
