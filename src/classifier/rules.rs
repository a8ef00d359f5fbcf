use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::predicate::{Predicate, PredicateSpec};
use crate::model::CategoryLabel;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("predicate has no keywords")]
    EmptyPredicate,
    #[error("blank keyword")]
    EmptyKeyword,
    #[error("invalid word pattern: {0}")]
    Pattern(String),
    #[error("rule #{index} ({label}): {source}")]
    InvalidRule {
        index: usize,
        label: String,
        source: Box<RuleError>,
    },
    #[error("rule #{0} has an empty main category")]
    EmptyLabel(usize),
    #[error("cannot read rule table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rule table: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub main: String,
    #[serde(default)]
    pub sub: String,
    pub when: PredicateSpec,
}

impl RuleSpec {
    pub fn new(main: &str, sub: &str, when: PredicateSpec) -> Self {
        Self {
            main: main.to_string(),
            sub: sub.to_string(),
            when,
        }
    }
}

/// Versioned, ordered rule list in its on-disk form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTableSpec {
    pub version: u32,
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub label: CategoryLabel,
    predicate: Predicate,
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        self.predicate.matches(text)
    }
}

/// Compiled rule table. Order is priority: the first matching rule wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    version: u32,
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn compile(spec: &RuleTableSpec) -> Result<Self, RuleError> {
        let mut rules = Vec::with_capacity(spec.rules.len());
        for (index, rule) in spec.rules.iter().enumerate() {
            if rule.main.trim().is_empty() {
                return Err(RuleError::EmptyLabel(index));
            }
            let predicate =
                Predicate::compile(&rule.when).map_err(|e| RuleError::InvalidRule {
                    index,
                    label: format!("{} / {}", rule.main, rule.sub),
                    source: Box::new(e),
                })?;
            rules.push(Rule {
                label: CategoryLabel::new(rule.main.clone(), rule.sub.clone()),
                predicate,
            });
        }

        Ok(Self {
            version: spec.version,
            rules,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let spec: RuleTableSpec = serde_json::from_str(json)?;
        Self::compile(&spec)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn first_match(&self, text: &str) -> Option<&CategoryLabel> {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| &rule.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "version": 7,
        "rules": [
            {"main": "Computers", "sub": "Laptops", "when": {"kind": "any", "keywords": ["laptop"]}},
            {"main": "Computers", "sub": "Memory", "when": {"kind": "word", "words": ["ram"], "exclude": ["dodge ram"]}},
            {"main": "Grocery", "when": {"kind": "either", "of": [
                {"kind": "context", "primary": ["coffee"], "context": ["beans"]},
                {"kind": "any", "keywords": ["juice"]}
            ]}}
        ]
    }"#;

    #[test]
    fn loads_and_compiles_json_table() {
        let table = RuleTable::from_json(TABLE).unwrap();
        assert_eq!(table.version(), 7);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rules()[2].label, CategoryLabel::new("Grocery", ""));
    }

    #[test]
    fn first_listed_rule_wins() {
        let table = RuleTable::from_json(TABLE).unwrap();
        let label = table.first_match("hp laptop 16gb ram").unwrap();
        assert_eq!(label.sub, "Laptops");
        assert_eq!(table.first_match("corsair 32gb ram kit").unwrap().sub, "Memory");
        assert!(table.first_match("dodge ram floor mats").is_none());
    }

    #[test]
    fn reordering_is_a_data_change() {
        let mut spec: RuleTableSpec = serde_json::from_str(TABLE).unwrap();
        spec.rules.swap(0, 1);
        let table = RuleTable::compile(&spec).unwrap();
        assert_eq!(table.first_match("hp laptop 16gb ram").unwrap().sub, "Memory");
    }

    #[test]
    fn invalid_rule_reports_its_position() {
        let json = r#"{"version": 1, "rules": [
            {"main": "A", "sub": "B", "when": {"kind": "any", "keywords": ["x"]}},
            {"main": "C", "sub": "D", "when": {"kind": "any", "keywords": []}}
        ]}"#;
        let err = RuleTable::from_json(json).unwrap_err();
        assert!(matches!(err, RuleError::InvalidRule { index: 1, .. }));
        assert!(err.to_string().contains("C / D"));
    }

    #[test]
    fn empty_main_category_is_rejected() {
        let json = r#"{"version": 1, "rules": [
            {"main": " ", "when": {"kind": "any", "keywords": ["x"]}}
        ]}"#;
        assert!(matches!(
            RuleTable::from_json(json),
            Err(RuleError::EmptyLabel(0))
        ));
    }
}
