use crate::model::TitleKey;
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[$€£¥]\d[\d,]*(?:\.\d{2})?").expect("valid currency amount regex")
});

/// Dedup key for a title: prices removed, punctuation folded to spaces,
/// whitespace collapsed, lowercased.
pub fn normalize_title(title: &str) -> TitleKey {
    let without_prices = CURRENCY_AMOUNT_RE.replace_all(title, " ");
    // Lowercasing can emit combining marks (e.g. 'İ'), so fold after it.
    let lowered = without_prices.to_lowercase();
    let folded: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    TitleKey(folded.split_whitespace().collect::<Vec<_>>().join(" "))
}
