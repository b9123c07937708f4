//! Rule-based tag extraction over a parsed document.
//!
//! Five categories from two sources: entity labels feed the three
//! deduplicated sets, fixed lexicons feed the two ordered lists. The list
//! categories deliberately use different tokenizations — tech terms match
//! the parser's tokens (punctuation split off), buzzwords match a plain
//! whitespace split of the raw text, so `"scalable,"` with a trailing comma
//! does not count as a buzzword. Both lists keep duplicates, order, and the
//! original surface casing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::scanner::Document;

/// Lowercase lexicon matched against parser tokens.
pub const TECH_TERMS: &[&str] = &["ai", "ml", "data", "python", "cloud"];

/// Lowercase lexicon matched against whitespace-split words, exact form.
pub const BUZZWORDS: &[&str] = &["innovation", "scalable", "synergy", "disruptive"];

/// The five-category tag bundle. Serialized field names are the public API,
/// including the space in `"Tech Terms"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagBundle {
    #[serde(rename = "Topics")]
    pub topics: BTreeSet<String>,
    #[serde(rename = "People")]
    pub people: BTreeSet<String>,
    #[serde(rename = "Places")]
    pub places: BTreeSet<String>,
    #[serde(rename = "Tech Terms")]
    pub tech_terms: Vec<String>,
    #[serde(rename = "Buzzwords")]
    pub buzzwords: Vec<String>,
}

/// Extract the tag bundle from a parsed document and the text it was
/// parsed from. Pure; the caller runs the parse.
pub fn extract_tags(doc: &Document, text: &str) -> TagBundle {
    let mut tags = TagBundle::default();

    for entity in &doc.entities {
        if entity.label.is_topic() {
            tags.topics.insert(entity.text.clone());
        } else if entity.label.is_person() {
            tags.people.insert(entity.text.clone());
        } else if entity.label.is_place() {
            tags.places.insert(entity.text.clone());
        }
    }

    for token in &doc.tokens {
        if TECH_TERMS.contains(&token.text.to_lowercase().as_str()) {
            tags.tech_terms.push(token.text.clone());
        }
    }

    for word in text.split_whitespace() {
        if BUZZWORDS.contains(&word.to_lowercase().as_str()) {
            tags.buzzwords.push(word.to_string());
        }
    }

    tags
}
