use crate::config::{AppConfig, LinkPatterns};
use crate::model::LinkTier;

pub const DEFAULT_TRACKING_MARKER: &str = "sdtrk=bfsheet";

/// Appends the tracking marker to links and ranks link quality.
#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    marker: String,
    search_markers: Vec<String>,
    direct_markers: Vec<String>,
}

impl Default for LinkNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKING_MARKER, &LinkPatterns::default())
    }
}

impl LinkNormalizer {
    pub fn new(marker: impl Into<String>, patterns: &LinkPatterns) -> Self {
        Self {
            marker: marker.into(),
            search_markers: patterns.search.clone(),
            direct_markers: patterns.direct.clone(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.tracking_marker.clone(), &config.link_patterns)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Ensures the link carries the tracking marker exactly once, as the
    /// last query parameter. Path, fragment and other query parameters are
    /// left untouched.
    pub fn normalize(&self, link: &str) -> String {
        let link = link.trim();
        if link.is_empty() {
            return String::new();
        }
        if link.contains(&self.marker) {
            return link.to_string();
        }

        // the marker belongs to the query, ahead of any fragment
        let (base, fragment) = match link.find('#') {
            Some(pos) => link.split_at(pos),
            None => (link, ""),
        };
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}{}{fragment}", self.marker)
    }

    pub fn tier(&self, link: &str) -> LinkTier {
        let link = link.trim();
        if link.is_empty() {
            return LinkTier::Empty;
        }
        if self.search_markers.iter().any(|m| link.contains(m.as_str())) {
            return LinkTier::SearchFallback;
        }
        if self.direct_markers.iter().any(|m| link.contains(m.as_str())) {
            return LinkTier::Direct;
        }
        // externally supplied links with neither marker are trusted
        LinkTier::Direct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_count(link: &str) -> usize {
        link.matches(DEFAULT_TRACKING_MARKER).count()
    }

    #[test]
    fn empty_and_blank_stay_empty() {
        let links = LinkNormalizer::default();
        assert_eq!(links.normalize(""), "");
        assert_eq!(links.normalize("   "), "");
    }

    #[test]
    fn appends_with_question_mark_when_no_query() {
        let links = LinkNormalizer::default();
        assert_eq!(
            links.normalize("https://x/f/1"),
            "https://x/f/1?sdtrk=bfsheet"
        );
    }

    #[test]
    fn appends_with_ampersand_when_query_present() {
        let links = LinkNormalizer::default();
        assert_eq!(
            links.normalize("https://x/f/1?a=1"),
            "https://x/f/1?a=1&sdtrk=bfsheet"
        );
    }

    #[test]
    fn marker_goes_before_the_fragment() {
        let links = LinkNormalizer::default();
        let cases = [
            ("https://x/f/1?a=1#comments", "https://x/f/1?a=1&sdtrk=bfsheet#comments"),
            ("https://x/f/1#c", "https://x/f/1?sdtrk=bfsheet#c"),
            ("https://x/f/1#", "https://x/f/1?sdtrk=bfsheet#"),
        ];
        for (raw, expected) in cases {
            let once = links.normalize(raw);
            assert_eq!(once, expected);
            assert_eq!(links.normalize(&once), once);
        }
    }

    #[test]
    fn leaves_marked_links_alone() {
        let links = LinkNormalizer::default();
        let marked = "https://x/f/1?sdtrk=bfsheet&a=1#comments";
        assert_eq!(links.normalize(marked), marked);
    }

    #[test]
    fn normalize_is_idempotent() {
        let links = LinkNormalizer::default();
        for raw in [
            "",
            "https://x/f/1",
            "https://x/f/1?a=1",
            "https://x/f/1?a=1&b=2#frag",
            "https://x/newsearch.php?q=tv&sdtrk=bfsheet",
            " https://x/e/9 ",
        ] {
            let once = links.normalize(raw);
            let twice = links.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {raw:?}");
            assert!(marker_count(&twice) <= 1);
        }
    }

    #[test]
    fn custom_marker_is_used() {
        let links = LinkNormalizer::new("ref=catalog", &LinkPatterns::default());
        assert_eq!(links.normalize("https://x/f/1"), "https://x/f/1?ref=catalog");
    }

    #[test]
    fn ranks_link_tiers() {
        let links = LinkNormalizer::default();
        assert_eq!(links.tier(""), LinkTier::Empty);
        assert_eq!(
            links.tier("https://x/newsearch.php?q=widget"),
            LinkTier::SearchFallback
        );
        assert_eq!(links.tier("https://x/f/1"), LinkTier::Direct);
        assert_eq!(links.tier("https://x/e/1"), LinkTier::Direct);
        assert_eq!(links.tier("https://shop.example/item/42"), LinkTier::Direct);
    }
}
