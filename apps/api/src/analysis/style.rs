//! Style Analyzer: quantitative writing-style features of a writing sample.
//!
//! All features are regex heuristics: sentence splitting, suffix-based
//! adjective/adverb detection and keyword counts. They are approximations with
//! known false positives; callers treat the patterns as a fixed contract.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::lexicon::{STYLE_STOPWORDS, TRANSITION_WORDS};
use crate::analysis::{rate, round_to};

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("Invalid regex: sentence"));
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n|\r\n\s*\r\n").expect("Invalid regex: paragraph break")
});
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid regex: sentence terminators"));
static LOWER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\b[a-z]+\b").expect("Invalid regex: lowercase word"));
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\w+").expect("Invalid regex: token"));
static ADJECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b\w+(?:ful|ous|ive|able|ible|al|ial|ic|ical|ish|less|y)\b")
        .expect("Invalid regex: adjective suffixes")
});
static ADVERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\b\w+ly\b").expect("Invalid regex: adverb suffix"));
static ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3}|…").expect("Invalid regex: ellipsis"));
static FIRST_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*((?-u:\w+))").expect("Invalid regex: first word"));
static TRANSITIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TRANSITION_WORDS
        .iter()
        .map(|word| {
            let pattern = format!(r"(?i-u)\b{word}\b");
            (*word, Regex::new(&pattern).expect("Invalid regex: transition word"))
        })
        .collect()
});
static COMPLEX_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",.*and|,.*but|,.*because|,.*however|,.*therefore|;|:")
        .expect("Invalid regex: complex sentence markers")
});
static SUBORDINATE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)\b(although|though|even though|because|since|unless|if|when|while|whereas|wherever)\b",
    )
    .expect("Invalid regex: subordinating conjunctions")
});
static RUN_ON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\w+)\s+and\s+(?-u:\w+)\s+and\s+(?-u:\w+)\s+and\s+(?-u:\w+)")
        .expect("Invalid regex: run-on")
});
static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(am|is|are|was|were|be|been|being)\s+(?-u:\w+ed\b)")
        .expect("Invalid regex: passive voice")
});
static CONTRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)\b\w+'(s|t|ve|ll|re|d)\b").expect("Invalid regex: contraction")
});
static FORMAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b(thus|therefore|consequently|furthermore|moreover)\b")
        .expect("Invalid regex: formal markers")
});
static INFORMAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b(well|anyway|basically|actually|like|just|so)\b")
        .expect("Invalid regex: informal markers")
});
static FIRST_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b(I|me|my|mine|myself|we|us|our|ours|ourselves)\b")
        .expect("Invalid regex: first person pronouns")
});
static THIRD_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)\b(he|him|his|himself|she|her|hers|herself|they|them|their|theirs|themselves|it|its|itself)\b",
    )
    .expect("Invalid regex: third person pronouns")
});

const FAVORITE_WORD_LIMIT: usize = 5;
const SENTENCE_STARTER_LIMIT: usize = 3;
const PREFERRED_TRANSITION_LIMIT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Profile types
// ────────────────────────────────────────────────────────────────────────────

/// Style features of a writing sample.
///
/// A sample with no terminated sentence serializes as `{"avgSentenceLength": 0}`
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleProfile {
    NoSentences {
        #[serde(rename = "avgSentenceLength")]
        avg_sentence_length: u32,
    },
    Full(Box<StyleFeatures>),
}

impl StyleProfile {
    pub fn features(&self) -> Option<&StyleFeatures> {
        match self {
            StyleProfile::NoSentences { .. } => None,
            StyleProfile::Full(features) => Some(features),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFeatures {
    pub sentence_structure: SentenceStructure,
    pub paragraph_structure: ParagraphStructure,
    pub vocabulary: Vocabulary,
    pub punctuation: Punctuation,
    pub transitions: Transitions,
    pub complexity: Complexity,
    pub error_patterns: ErrorPatterns,
    pub stylistic_preferences: StylisticPreferences,
}

/// Words per sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceStructure {
    pub min: usize,
    pub max: usize,
    pub avg: u32,
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStructure {
    pub avg_sentences_per_paragraph: f64,
    pub variability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    /// `None` when the sample has sentences but no ASCII words.
    pub lexical_diversity: Option<f64>,
    pub favorite_words: Vec<String>,
    pub adjective_frequency: f64,
    pub adverb_frequency: f64,
    pub avg_word_length: Option<f64>,
}

/// Occurrences per character of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Punctuation {
    pub comma_rate: f64,
    pub semicolon_rate: f64,
    pub colon_rate: f64,
    pub dash_rate: f64,
    pub exclamation_rate: f64,
    pub question_rate: f64,
    pub parentheses_rate: f64,
    pub ellipses_rate: f64,
    pub quotation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transitions {
    pub preferred_transitions: Vec<String>,
    pub common_sentence_starters: Vec<String>,
    pub uses_connecting_words: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complexity {
    pub complex_sentence_rate: f64,
    pub subordinate_clause_rate: f64,
    pub uses_varied_structure: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPatterns {
    pub repeats_words: bool,
    pub uses_run_on_sentences: bool,
    pub passive_voice_frequency: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Formal,
    Casual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylisticPreferences {
    pub uses_contractions: bool,
    pub formality_level: Formality,
    pub first_person_usage: f64,
    pub third_person_usage: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Computes the style profile of `text`. Never fails.
pub fn analyze_writing_style(text: &str) -> StyleProfile {
    let sentences: Vec<&str> = SENTENCE.find_iter(text).map(|m| m.as_str()).collect();

    if sentences.is_empty() {
        return StyleProfile::NoSentences {
            avg_sentence_length: 0,
        };
    }

    StyleProfile::Full(Box::new(StyleFeatures {
        sentence_structure: sentence_structure(&sentences),
        paragraph_structure: paragraph_structure(text),
        vocabulary: analyze_vocabulary(text),
        punctuation: analyze_punctuation(text),
        transitions: analyze_transitions(text, &sentences),
        complexity: analyze_complexity(&sentences),
        error_patterns: analyze_error_patterns(text),
        stylistic_preferences: analyze_preferences(text, sentences.len()),
    }))
}

fn sentence_structure(sentences: &[&str]) -> SentenceStructure {
    let word_counts: Vec<usize> = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let total: usize = word_counts.iter().sum();

    SentenceStructure {
        min: word_counts.iter().copied().min().unwrap_or(0),
        max: word_counts.iter().copied().max().unwrap_or(0),
        avg: (total as f64 / word_counts.len() as f64).round() as u32,
        variance: variance(&word_counts),
    }
}

fn paragraph_structure(text: &str) -> ParagraphStructure {
    let counts: Vec<usize> = PARAGRAPH_BREAK
        .split(text)
        .map(|p| SENTENCE.find_iter(p).count())
        .filter(|&n| n > 0)
        .collect();

    if counts.is_empty() {
        return ParagraphStructure {
            avg_sentences_per_paragraph: 0.0,
            variability: 0.0,
        };
    }

    let total: usize = counts.iter().sum();
    ParagraphStructure {
        avg_sentences_per_paragraph: round_to(total as f64 / counts.len() as f64, 1),
        variability: variance(&counts),
    }
}

/// Population variance rounded to 2 decimals.
fn variance(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let sum_sq: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
    round_to(sum_sq / n, 2)
}

fn analyze_vocabulary(text: &str) -> Vocabulary {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = LOWER_WORD.find_iter(&lowered).map(|m| m.as_str()).collect();
    let sentence_count = SENTENCE_TERMINATORS
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let unique: HashSet<&str> = words.iter().copied().collect();

    let favorite_words = rank_by_frequency(words.iter().copied())
        .into_iter()
        .filter(|word| word.len() > 3 && !STYLE_STOPWORDS.contains(&word.as_str()))
        .take(FAVORITE_WORD_LIMIT)
        .collect();

    let letters: usize = words.iter().map(|w| w.len()).sum();
    let per_word =
        |n: usize, places: i32| (!words.is_empty()).then(|| rate(n, words.len(), places));

    Vocabulary {
        lexical_diversity: per_word(unique.len(), 2),
        favorite_words,
        adjective_frequency: rate(ADJECTIVE.find_iter(text).count(), sentence_count, 2),
        adverb_frequency: rate(ADVERB.find_iter(text).count(), sentence_count, 2),
        avg_word_length: per_word(letters, 1),
    }
}

fn analyze_punctuation(text: &str) -> Punctuation {
    let total = text.chars().count();
    let count = |pred: fn(char) -> bool| text.chars().filter(|&c| pred(c)).count();
    let per_char = |n: usize| rate(n, total, 3);

    Punctuation {
        comma_rate: per_char(count(|c| c == ',')),
        semicolon_rate: per_char(count(|c| c == ';')),
        colon_rate: per_char(count(|c| c == ':')),
        dash_rate: per_char(count(|c| matches!(c, '—' | '–' | '-'))),
        exclamation_rate: per_char(count(|c| c == '!')),
        question_rate: per_char(count(|c| c == '?')),
        parentheses_rate: per_char(count(|c| matches!(c, '(' | ')'))),
        ellipses_rate: per_char(ELLIPSIS.find_iter(text).count()),
        quotation_rate: per_char(count(|c| matches!(c, '"' | '“' | '”'))),
    }
}

fn analyze_transitions(text: &str, sentences: &[&str]) -> Transitions {
    let present: Vec<&str> = TRANSITIONS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(word, _)| *word)
        .collect();

    let first_words: Vec<String> = sentences
        .iter()
        .filter_map(|s| FIRST_WORD.captures(s.trim()))
        .map(|caps| caps[1].to_lowercase())
        .collect();

    Transitions {
        preferred_transitions: present
            .iter()
            .take(PREFERRED_TRANSITION_LIMIT)
            .map(|w| w.to_string())
            .collect(),
        common_sentence_starters: rank_by_frequency(first_words.iter().map(String::as_str))
            .into_iter()
            .take(SENTENCE_STARTER_LIMIT)
            .collect(),
        uses_connecting_words: present.len() > 2,
    }
}

fn analyze_complexity(sentences: &[&str]) -> Complexity {
    let complex = sentences
        .iter()
        .filter(|s| COMPLEX_SENTENCE.is_match(s))
        .count();
    let subordinate = sentences
        .iter()
        .filter(|s| SUBORDINATE_CLAUSE.is_match(s))
        .count();

    Complexity {
        complex_sentence_rate: rate(complex, sentences.len(), 2),
        subordinate_clause_rate: rate(subordinate, sentences.len(), 2),
        uses_varied_structure: complex as f64 > sentences.len() as f64 * 0.3,
    }
}

fn analyze_error_patterns(text: &str) -> ErrorPatterns {
    ErrorPatterns {
        repeats_words: has_repeated_word(text),
        uses_run_on_sentences: RUN_ON.is_match(text),
        passive_voice_frequency: PASSIVE_VOICE.find_iter(text).count(),
    }
}

/// True when a word is immediately followed, after whitespace only, by the same
/// word ignoring case ("the the").
fn has_repeated_word(text: &str) -> bool {
    let tokens: Vec<_> = TOKEN.find_iter(text).collect();
    tokens.windows(2).any(|pair| {
        let gap = &text[pair[0].end()..pair[1].start()];
        !gap.is_empty()
            && gap.chars().all(char::is_whitespace)
            && pair[0].as_str().to_lowercase() == pair[1].as_str().to_lowercase()
    })
}

fn analyze_preferences(text: &str, sentence_count: usize) -> StylisticPreferences {
    let contractions = CONTRACTION.find_iter(text).count();
    let formal = FORMAL_MARKER.find_iter(text).count();
    let informal = INFORMAL_MARKER.find_iter(text).count();

    StylisticPreferences {
        uses_contractions: contractions as f64 > sentence_count as f64 * 0.3,
        formality_level: if formal > informal {
            Formality::Formal
        } else {
            Formality::Casual
        },
        first_person_usage: rate(FIRST_PERSON.find_iter(text).count(), sentence_count, 2),
        third_person_usage: rate(THIRD_PERSON.find_iter(text).count(), sentence_count, 2),
    }
}

/// Distinct items ordered by frequency, most frequent first. Ties keep the order
/// in which the items were first seen.
fn rank_by_frequency<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        match index.get(item) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(item, order.len());
                order.push((item, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().map(|(item, _)| item.to_string()).collect()
}
