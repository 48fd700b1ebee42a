//! Material Extractor: pulls terms, definitions, facts, quotes, examples and
//! headers out of pasted course materials.
//!
//! Each extraction runs independently over the raw text; nothing is
//! cross-checked. Empty input produces an empty profile.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::lexicon::CAPITALIZED_STOPWORDS;
use crate::analysis::token_count;

static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*|[A-Z]{2,})(?-u:\b)")
        .expect("Invalid regex: term")
});
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*|[A-Z]{2,})\s*(?::|–|-)\s*([^.]+)")
        .expect("Invalid regex: definition")
});
static NUMERIC_FACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)\b\d+(?:\.\d+)?%|\b\d+(?:,\d+)*\b|\b(?:19|20)\d{2}\b")
        .expect("Invalid regex: numeric fact")
});
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("Invalid regex: quote"));
static EXAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:for example|e\.g\.|example:|case study:|instance)[^.!?]+[.!?]")
        .expect("Invalid regex: example")
});
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\n)([A-Z][A-Za-z\s]+)(?:\n|:)").expect("Invalid regex: header")
});

/// Keyword groups in priority order; the first group that matches decides.
static MATERIAL_TYPES: LazyLock<Vec<(MaterialType, Regex)>> = LazyLock::new(|| {
    vec![
        (
            MaterialType::Syllabus,
            Regex::new(r"(?i)(?:syllabus|course outline|learning objectives|course description)")
                .expect("Invalid regex: syllabus indicators"),
        ),
        (
            MaterialType::Textbook,
            Regex::new(r"(?i)(?:chapter|section|textbook|reading|author states)")
                .expect("Invalid regex: textbook indicators"),
        ),
        (
            MaterialType::Lecture,
            Regex::new(r"(?i)(?:lecture|professor|discussed in class|as mentioned in class)")
                .expect("Invalid regex: lecture indicators"),
        ),
        (
            MaterialType::Scientific,
            Regex::new(r"(?i)(?:experiment|method|results|conclusion|findings|study showed)")
                .expect("Invalid regex: scientific indicators"),
        ),
    ]
});

const KEY_TERM_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Syllabus,
    Textbook,
    Lecture,
    Scientific,
    #[default]
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProfile {
    pub key_terms: Vec<String>,
    pub definitions: Vec<Definition>,
    /// Raw matched strings: percentages, grouped numbers, years.
    pub numerical_facts: Vec<String>,
    /// Raw matches, surrounding quote marks included.
    pub quotes: Vec<String>,
    pub examples: Vec<String>,
    pub headers: Vec<String>,
    pub material_type: MaterialType,
    pub word_count: usize,
}

/// Extracts the structured profile of course materials.
pub fn extract_material_profile(materials: &str) -> MaterialProfile {
    MaterialProfile {
        key_terms: key_terms(materials),
        definitions: DEFINITION
            .captures_iter(materials)
            .map(|caps| Definition {
                term: caps[1].trim().to_string(),
                definition: caps[2].trim().to_string(),
            })
            .collect(),
        numerical_facts: all_matches(&NUMERIC_FACT, materials),
        quotes: all_matches(&QUOTE, materials),
        examples: EXAMPLE
            .find_iter(materials)
            .map(|m| m.as_str().trim().to_string())
            .collect(),
        headers: HEADER
            .captures_iter(materials)
            .map(|caps| caps[1].trim().to_string())
            .collect(),
        material_type: classify_material(materials),
        word_count: token_count(materials),
    }
}

fn key_terms(materials: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    TERM.find_iter(materials)
        .map(|m| m.as_str())
        .filter(|term| seen.insert(*term))
        .filter(|term| !CAPITALIZED_STOPWORDS.contains(term) && term.chars().count() > 1)
        .take(KEY_TERM_LIMIT)
        .map(str::to_string)
        .collect()
}

fn all_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

fn classify_material(materials: &str) -> MaterialType {
    MATERIAL_TYPES
        .iter()
        .find(|(_, re)| re.is_match(materials))
        .map(|(kind, _)| *kind)
        .unwrap_or_default()
}
