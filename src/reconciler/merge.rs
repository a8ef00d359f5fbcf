use tracing::debug;

use crate::catalog::Catalog;
use crate::classifier::Classifier;
use crate::model::{CanonicalDeal, MergeReport};
use crate::normalizer::{normalize_title, LinkNormalizer};

use super::ingest::derive_id;

pub struct Reconciler<'a> {
    links: &'a LinkNormalizer,
    classifier: &'a Classifier,
}

impl<'a> Reconciler<'a> {
    pub fn new(links: &'a LinkNormalizer, classifier: &'a Classifier) -> Self {
        Self { links, classifier }
    }

    /// Merges candidates into the catalog in input order.
    ///
    /// A candidate is skipped when its id is known, upgrades the link of the
    /// existing deal with the same title key when its link tier is strictly
    /// better, and is added otherwise. Each candidate is applied whole, so a
    /// run never leaves a half-merged deal behind.
    pub fn merge(
        &self,
        catalog: &mut Catalog,
        candidates: impl IntoIterator<Item = CanonicalDeal>,
    ) -> MergeReport {
        let mut report = MergeReport::default();

        for (pos, mut candidate) in candidates.into_iter().enumerate() {
            if candidate.id.trim().is_empty() {
                let derived = derive_id("candidate", pos + 1, &candidate.title);
                candidate.id = unused_id(catalog, derived);
            }

            if catalog.contains_id(&candidate.id) {
                report.skipped += 1;
                continue;
            }

            let key = normalize_title(&candidate.title);
            if let Some(index) = catalog.index_of_title(&key) {
                let existing = catalog.deal_mut(index);
                if self.links.tier(&candidate.link) > self.links.tier(&existing.link) {
                    existing.link = self.links.normalize(&candidate.link);
                    let label = self.classifier.classify(&existing.title, &existing.link);
                    // keep a category a source supplied when rules still find nothing
                    if !label.is_uncategorized() {
                        existing.set_category(label);
                    }
                    debug!(id = %existing.id, link = %existing.link, "Upgraded link");
                    report.upgraded += 1;
                } else {
                    report.skipped += 1;
                }
                continue;
            }

            candidate.link = self.links.normalize(&candidate.link);
            debug!(id = %candidate.id, title = %candidate.title, "Added deal");
            catalog.insert(candidate);
            report.added += 1;
        }

        report
    }
}

/// A derived id must not land on a stored deal it has nothing to do with.
fn unused_id(catalog: &Catalog, base: String) -> String {
    if !catalog.contains_id(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{base}-{n}");
        if !catalog.contains_id(&id) {
            return id;
        }
        n += 1;
    }
}
