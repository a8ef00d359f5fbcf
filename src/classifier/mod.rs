// Category classifier: ordered rule table, first match wins.

pub mod builtin;
pub mod predicate;
pub mod rules;

pub use predicate::PredicateSpec;
pub use rules::{RuleError, RuleSpec, RuleTable, RuleTableSpec};

use tracing::info;

use crate::config::AppConfig;
use crate::model::CategoryLabel;

impl RuleTable {
    pub fn builtin() -> Self {
        RuleTable::compile(&builtin::builtin_spec()).expect("built-in rule table is valid")
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    table: RuleTable,
}

impl Classifier {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    /// Uses `rules_path` when configured, otherwise the built-in table.
    pub fn from_config(config: &AppConfig) -> Result<Self, RuleError> {
        let table = match &config.rules_path {
            Some(path) => {
                let table = RuleTable::load(path)?;
                info!(
                    path = %path.display(),
                    version = table.version(),
                    rules = table.len(),
                    "Loaded rule table"
                );
                table
            }
            None => RuleTable::builtin(),
        };
        Ok(Self::new(table))
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Labels a listing from its title and link. Never fails: unmatched
    /// or empty input yields the Uncategorized label.
    pub fn classify(&self, title: &str, link: &str) -> CategoryLabel {
        let text = format!("{title} {link}").to_lowercase();
        self.table
            .first_match(&text)
            .cloned()
            .unwrap_or_else(CategoryLabel::uncategorized)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}
