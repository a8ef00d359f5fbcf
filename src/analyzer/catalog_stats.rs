use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::model::LinkTier;
use crate::normalizer::LinkNormalizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub direct: usize,
    pub search_fallback: usize,
    pub empty: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub uncategorized: usize,
    pub by_main: BTreeMap<String, usize>,
    pub by_store: BTreeMap<String, usize>,
    pub tiers: TierCounts,
}

impl CatalogStats {
    /// Share of uncategorized deals in percent; 0 for an empty catalog.
    pub fn uncategorized_share(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.uncategorized as f64 * 100.0 / self.total as f64
        }
    }

    /// Main categories by descending count, ties by name.
    pub fn top_categories(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self
            .by_main
            .iter()
            .map(|(name, &count)| (name.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

pub fn calculate_stats(catalog: &Catalog, links: &LinkNormalizer) -> CatalogStats {
    let mut stats = CatalogStats {
        total: catalog.len(),
        ..CatalogStats::default()
    };

    for deal in catalog.iter() {
        let label = deal.category();
        if label.is_uncategorized() {
            stats.uncategorized += 1;
        }
        *stats.by_main.entry(label.main).or_default() += 1;

        if !deal.store.is_empty() {
            *stats.by_store.entry(deal.store.clone()).or_default() += 1;
        }

        match links.tier(&deal.link) {
            LinkTier::Direct => stats.tiers.direct += 1,
            LinkTier::SearchFallback => stats.tiers.search_fallback += 1,
            LinkTier::Empty => stats.tiers.empty += 1,
        }
    }

    stats
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total deals: {}", self.total)?;
        writeln!(
            f,
            "Uncategorized: {} ({:.1}%)",
            self.uncategorized,
            self.uncategorized_share()
        )?;
        writeln!(
            f,
            "Links: {} direct, {} search, {} empty",
            self.tiers.direct, self.tiers.search_fallback, self.tiers.empty
        )?;
        writeln!(f, "Categories:")?;
        for (name, count) in self.top_categories(self.by_main.len()) {
            writeln!(f, "  {name}: {count}")?;
        }
        Ok(())
    }
}
