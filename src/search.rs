// Search-fallback links for listings without a direct link.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::AppConfig;

const MAX_QUERY_CHARS: usize = 100;
const CUT_MARKERS: [&str; 5] = [" $", " from ", " +", " -", " @"];
static NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\((?:various|select) (?:colors|sizes)\)").expect("valid noise regex")
});

#[derive(Debug, Clone)]
pub struct SearchFallback {
    base_url: String,
    marker: String,
}

impl SearchFallback {
    pub fn new(base_url: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.search_base_url.clone(), config.tracking_marker.clone())
    }

    /// `<base>&q=<query>&<marker>`
    pub fn search_url(&self, title: &str) -> String {
        let query = urlencoding::encode(&clean_title_for_search(title)).into_owned();
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}q={query}&{}", self.base_url, self.marker)
    }
}

impl Default for SearchFallback {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Reduces a deal title to the product name: price and store tails and
/// variant notes are dropped.
pub fn clean_title_for_search(title: &str) -> String {
    let mut cleaned = title;
    for marker in CUT_MARKERS {
        if let Some(pos) = cleaned.find(marker) {
            cleaned = &cleaned[..pos];
        }
    }

    let without_notes = NOISE_RE.replace_all(cleaned, " ");
    let collapsed = without_notes.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(MAX_QUERY_CHARS).collect()
}
