// Utility functions
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").expect("valid price regex"));
static DEAL_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/f/(\d+)").expect("valid deal number regex"));

/// Parses the timestamp formats sources emit into `DateTime<Utc>`:
/// RFC 3339, RFC 2822, naive ISO-8601 (taken as UTC) and bare
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `2024-11-29T08:00:00Z`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Lowercase hyphen-joined slug of the first `max_words` alphanumeric words.
pub fn to_kebab_case(text: &str, max_words: usize) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join("-")
}

/// First `$` amount in a title, e.g. `$1,299.00`.
pub fn extract_price(title: &str) -> String {
    PRICE_RE
        .find(title)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Numeric thread id of a direct deal link (`.../f/16123456-...`).
pub fn extract_deal_number(link: &str) -> Option<&str> {
    DEAL_NUMBER_RE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn detect_store(title: &str) -> String {
    let title = title.to_lowercase();
    if title.contains("prime") || title.contains("amazon") {
        "Amazon".to_string()
    } else {
        String::new()
    }
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
