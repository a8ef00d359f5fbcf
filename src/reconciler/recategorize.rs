use std::fmt;

use crate::catalog::Catalog;
use crate::classifier::Classifier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecategorizeReport {
    pub total: usize,
    pub changed: usize,
    pub uncategorized_before: usize,
    pub uncategorized_after: usize,
}

impl fmt::Display for RecategorizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} deals changed, uncategorized {} -> {}",
            self.changed, self.total, self.uncategorized_before, self.uncategorized_after
        )
    }
}

/// Rewrites every deal's category from its title and link. Nothing but
/// the two category fields is touched, so a second pass changes nothing.
pub fn recategorize(catalog: &mut Catalog, classifier: &Classifier) -> RecategorizeReport {
    let mut report = RecategorizeReport {
        total: catalog.len(),
        ..RecategorizeReport::default()
    };

    for deal in catalog.iter_mut() {
        let before = deal.category();
        if before.is_uncategorized() {
            report.uncategorized_before += 1;
        }

        let after = classifier.classify(&deal.title, &deal.link);
        if after.is_uncategorized() {
            report.uncategorized_after += 1;
        }
        if after != before {
            deal.set_category(after);
            report.changed += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CanonicalDeal, CategoryLabel};

    fn catalog() -> Catalog {
        let mut stale = CanonicalDeal::new("a", "Dell Inspiron Laptop 16GB RAM", "https://x/f/1");
        stale.set_category(CategoryLabel::new("Computers", "Memory"));
        stale.pub_date = "2024-11-29T08:00:00Z".into();
        let unknown = CanonicalDeal::new("b", "Bounty Paper Towels", "");
        let mut mystery = CanonicalDeal::new("c", "Mystery Box", "");
        mystery.set_category(CategoryLabel::new("Holiday", "Decor"));
        Catalog::from_deals(vec![stale, unknown, mystery])
    }

    #[test]
    fn rewrites_only_category_fields() {
        let mut catalog = catalog();
        let report = recategorize(&mut catalog, &Classifier::builtin());

        assert_eq!(report.total, 3);
        assert_eq!(report.changed, 3);
        assert_eq!(report.uncategorized_before, 1);
        assert_eq!(report.uncategorized_after, 1);

        let laptop = catalog.get("a").unwrap();
        assert_eq!(laptop.category(), CategoryLabel::new("Computers", "Laptops"));
        assert_eq!(laptop.pub_date, "2024-11-29T08:00:00Z");
        assert_eq!(laptop.link, "https://x/f/1");
        assert_eq!(catalog.get("b").unwrap().main_category, "Grocery");
        assert!(catalog.get("c").unwrap().category().is_uncategorized());
    }

    #[test]
    fn second_pass_is_a_fixed_point() {
        let mut catalog = catalog();
        let classifier = Classifier::builtin();
        recategorize(&mut catalog, &classifier);
        let snapshot: Vec<_> = catalog.iter().cloned().collect();

        let second = recategorize(&mut catalog, &classifier);
        assert_eq!(second.changed, 0);
        assert_eq!(catalog.iter().cloned().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    fn empty_catalog_reports_zeroes() {
        let mut catalog = Catalog::new();
        let report = recategorize(&mut catalog, &Classifier::builtin());
        assert_eq!(report, RecategorizeReport::default());
    }
}
