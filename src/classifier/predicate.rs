use regex::Regex;
use serde::{Deserialize, Serialize};

use super::rules::RuleError;

/// Serializable form of a rule predicate, as stored in a rule table file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateSpec {
    /// Any keyword occurs as a substring.
    Any { keywords: Vec<String> },
    /// A primary keyword and a supporting context keyword both occur.
    Context {
        primary: Vec<String>,
        context: Vec<String>,
    },
    /// A word occurs as a whole token and no exclusion keyword occurs.
    Word {
        words: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        exclude: Vec<String>,
    },
    /// Any of the nested predicates holds.
    Either { of: Vec<PredicateSpec> },
}

impl PredicateSpec {
    pub fn any(keywords: &[&str]) -> Self {
        Self::Any {
            keywords: owned(keywords),
        }
    }

    pub fn context(primary: &[&str], context: &[&str]) -> Self {
        Self::Context {
            primary: owned(primary),
            context: owned(context),
        }
    }

    pub fn word(words: &[&str], exclude: &[&str]) -> Self {
        Self::Word {
            words: owned(words),
            exclude: owned(exclude),
        }
    }

    pub fn either(of: Vec<PredicateSpec>) -> Self {
        Self::Either { of }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Compiled predicate evaluated against lowercased scan text.
#[derive(Debug, Clone)]
pub enum Predicate {
    Any(Vec<String>),
    Context {
        primary: Vec<String>,
        context: Vec<String>,
    },
    Word {
        pattern: Regex,
        exclude: Vec<String>,
    },
    Either(Vec<Predicate>),
}

impl Predicate {
    pub fn compile(spec: &PredicateSpec) -> Result<Self, RuleError> {
        match spec {
            PredicateSpec::Any { keywords } => Ok(Predicate::Any(keyword_set(keywords)?)),
            PredicateSpec::Context { primary, context } => Ok(Predicate::Context {
                primary: keyword_set(primary)?,
                context: keyword_set(context)?,
            }),
            PredicateSpec::Word { words, exclude } => {
                let words = keyword_set(words)?;
                let exclude = exclude
                    .iter()
                    .map(|k| validated_keyword(k))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Predicate::Word {
                    pattern: word_pattern(&words)?,
                    exclude,
                })
            }
            PredicateSpec::Either { of } => {
                if of.is_empty() {
                    return Err(RuleError::EmptyPredicate);
                }
                let nested = of
                    .iter()
                    .map(Predicate::compile)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Predicate::Either(nested))
            }
        }
    }

    /// `text` must already be lowercase.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Predicate::Any(keywords) => contains_any(text, keywords),
            Predicate::Context { primary, context } => {
                contains_any(text, primary) && contains_any(text, context)
            }
            Predicate::Word { pattern, exclude } => {
                pattern.is_match(text) && !contains_any(text, exclude)
            }
            Predicate::Either(nested) => nested.iter().any(|p| p.matches(text)),
        }
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_str()))
}

fn keyword_set(keywords: &[String]) -> Result<Vec<String>, RuleError> {
    if keywords.is_empty() {
        return Err(RuleError::EmptyPredicate);
    }
    keywords.iter().map(|k| validated_keyword(k)).collect()
}

// Surrounding spaces are significant ("rtx " must not match "rtx4090"),
// so keywords are only lowercased, never trimmed.
fn validated_keyword(keyword: &str) -> Result<String, RuleError> {
    if keyword.trim().is_empty() {
        return Err(RuleError::EmptyKeyword);
    }
    Ok(keyword.to_lowercase())
}

/// One alternation over all words. `\b` is only placed next to word
/// characters, otherwise keywords such as `ps+` could never match.
fn word_pattern(words: &[String]) -> Result<Regex, RuleError> {
    let alternatives = words
        .iter()
        .map(|word| {
            let starts_word = word.chars().next().is_some_and(is_word_char);
            let ends_word = word.chars().last().is_some_and(is_word_char);
            format!(
                "{}{}{}",
                if starts_word { r"\b" } else { "" },
                regex::escape(word),
                if ends_word { r"\b" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("(?:{alternatives})"))
        .map_err(|e| RuleError::Pattern(e.to_string()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(spec: PredicateSpec) -> Predicate {
        Predicate::compile(&spec).unwrap()
    }

    #[test]
    fn any_matches_substrings() {
        let p = compiled(PredicateSpec::any(&["paper towel", "rtx "]));
        assert!(p.matches("bounty paper towels"));
        assert!(p.matches("msi rtx 4070"));
        assert!(!p.matches("msi rtx4070"));
        assert!(!p.matches(""));
    }

    #[test]
    fn context_requires_both_sides() {
        let p = compiled(PredicateSpec::context(&["coffee"], &["k-cup", "beans"]));
        assert!(p.matches("green mountain coffee k-cup pods"));
        assert!(p.matches("whole bean coffee beans 2lb"));
        assert!(!p.matches("coffee table walnut"));
        assert!(!p.matches("k-cup carousel"));
    }

    #[test]
    fn word_requires_whole_token() {
        let p = compiled(PredicateSpec::word(&["watch"], &[]));
        assert!(p.matches("casio g-shock watch"));
        assert!(p.matches("watch, silver"));
        assert!(!p.matches("watchdog timer"));
        assert!(!p.matches("stopwatches"));
    }

    #[test]
    fn word_exclusions_veto_a_match() {
        let p = compiled(PredicateSpec::word(&["rice"], &["rice cooker"]));
        assert!(p.matches("jasmine rice 25 lb"));
        assert!(!p.matches("zojirushi rice cooker"));
        assert!(!p.matches("lowest price ever"));
    }

    #[test]
    fn word_handles_punctuated_keywords() {
        let p = compiled(PredicateSpec::word(&["ps+", "wi-fi"], &[]));
        assert!(p.matches("ps+ premium 12 months"));
        assert!(p.matches("wi-fi 6 router"));
        assert!(!p.matches("twi-fis"));
    }

    #[test]
    fn word_escapes_regex_metacharacters() {
        let p = compiled(PredicateSpec::word(&["m.2"], &[]));
        assert!(p.matches("samsung m.2 ssd"));
        assert!(!p.matches("samsung m22 ssd"));
    }

    #[test]
    fn either_is_a_disjunction() {
        let p = compiled(PredicateSpec::either(vec![
            PredicateSpec::word(&["atv"], &[]),
            PredicateSpec::any(&["go kart"]),
        ]));
        assert!(p.matches("kids electric atv"));
        assert!(p.matches("gas go kart"));
        assert!(!p.matches("creative atvantage"));
    }

    #[test]
    fn keywords_are_lowercased_at_compile_time() {
        let p = compiled(PredicateSpec::any(&["PlayStation 5"]));
        assert!(p.matches("sony playstation 5 slim"));
    }

    #[test]
    fn rejects_empty_sets_and_blank_keywords() {
        assert!(matches!(
            Predicate::compile(&PredicateSpec::any(&[])),
            Err(RuleError::EmptyPredicate)
        ));
        assert!(matches!(
            Predicate::compile(&PredicateSpec::any(&["  "])),
            Err(RuleError::EmptyKeyword)
        ));
        assert!(matches!(
            Predicate::compile(&PredicateSpec::either(vec![])),
            Err(RuleError::EmptyPredicate)
        ));
    }

    #[test]
    fn spec_round_trips_through_json() {
        let spec = PredicateSpec::word(&["tent"], &["content"]);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"kind":"word","words":["tent"],"exclude":["content"]}"#);
        let back: PredicateSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
