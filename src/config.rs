use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::normalizer::link::DEFAULT_TRACKING_MARKER;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Json,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
    /// Prefix for ids derived from direct deal links, e.g. `slickdeals-f123`.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkPatterns {
    #[serde(default = "default_search_patterns")]
    pub search: Vec<String>,
    #[serde(default = "default_direct_patterns")]
    pub direct: Vec<String>,
}

impl Default for LinkPatterns {
    fn default() -> Self {
        Self {
            search: default_search_patterns(),
            direct: default_direct_patterns(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub store: StoreKind,
    pub sqlite_path: PathBuf,
    pub tracking_marker: String,
    pub link_patterns: LinkPatterns,
    pub search_base_url: String,
    pub feeds: Vec<FeedConfig>,
    pub sheet_html_url: Option<String>,
    pub rules_path: Option<PathBuf>,
    pub request_timeout_seconds: u64,
    pub max_retries: u32,
    pub resolve_delay_millis: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/deals.json"),
            store: StoreKind::Json,
            sqlite_path: PathBuf::from("data/deals.db"),
            tracking_marker: DEFAULT_TRACKING_MARKER.to_string(),
            link_patterns: LinkPatterns::default(),
            search_base_url:
                "https://slickdeals.net/newsearch.php?searchin=first&forumchoice%5B%5D=9"
                    .to_string(),
            feeds: vec![FeedConfig {
                name: "frontpage".to_string(),
                url: "https://slickdeals.net/newsearch.php?mode=frontpage&searcharea=deals&searchin=first&rss=1".to_string(),
                id_prefix: default_id_prefix(),
            }],
            sheet_html_url: None,
            rules_path: None,
            request_timeout_seconds: 15,
            max_retries: 2,
            resolve_delay_millis: 500,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) DealSync/0.3".to_string(),
        }
    }
}

fn default_id_prefix() -> String {
    "slickdeals".to_string()
}

fn default_search_patterns() -> Vec<String> {
    vec!["newsearch.php".to_string()]
}

fn default_direct_patterns() -> Vec<String> {
    vec!["/f/".to_string(), "/e/".to_string()]
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}
